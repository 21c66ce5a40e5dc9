//! Roman numeral values for inciso labels.

use crate::config::MAX_ROMAN_VALUE;

/// Value of a canonical upper-case roman numeral, if it lies in `1..=3000`.
///
/// Non-canonical spellings such as `IIII` or `VX` are rejected.
///
/// # Examples
/// ```
/// use legisbr_extractor::tagger::roman_value;
///
/// assert_eq!(roman_value("XIV"), Some(14));
/// assert_eq!(roman_value("MMM"), Some(3000));
/// assert_eq!(roman_value(""), None);
/// assert_eq!(roman_value("iv"), None);
/// ```
#[must_use]
pub fn roman_value(numeral: &str) -> Option<u32> {
    roman::from(numeral)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| (1..=MAX_ROMAN_VALUE).contains(v))
}
