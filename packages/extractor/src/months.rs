//! Portuguese month names.
//!
//! The alias table maps every full month name and its three-letter
//! abbreviation to the month ordinal. It is built once and shared read-only.

use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

use crate::error::ParseIssue;

/// Month aliases, keyed by the upper-case, accent-free spelling.
static MONTH_ALIASES: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    [
        ("JANEIRO", 1),
        ("JAN", 1),
        ("FEVEREIRO", 2),
        ("FEV", 2),
        ("MARCO", 3),
        ("MAR", 3),
        ("ABRIL", 4),
        ("ABR", 4),
        ("MAIO", 5),
        ("MAI", 5),
        ("JUNHO", 6),
        ("JUN", 6),
        ("JULHO", 7),
        ("JUL", 7),
        ("AGOSTO", 8),
        ("AGO", 8),
        ("SETEMBRO", 9),
        ("SET", 9),
        ("OUTUBRO", 10),
        ("OUT", 10),
        ("NOVEMBRO", 11),
        ("NOV", 11),
        ("DEZEMBRO", 12),
        ("DEZ", 12),
    ]
    .into_iter()
    .collect()
});

/// Fold a name to a lookup key: accents removed, upper case.
pub(crate) fn fold_key(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

/// Look up the ordinal (1-12) of a Portuguese month name or abbreviation.
///
/// Matching ignores case and diacritics, so "Março", "marco" and "MAR" all
/// resolve to 3.
///
/// # Examples
/// ```
/// use legisbr_extractor::months::month_ordinal;
///
/// assert_eq!(month_ordinal("dezembro"), Ok(12));
/// assert_eq!(month_ordinal("Março"), Ok(3));
/// assert!(month_ordinal("brumário").is_err());
/// ```
pub fn month_ordinal(name: &str) -> Result<u32, ParseIssue> {
    MONTH_ALIASES
        .get(fold_key(name).as_str())
        .copied()
        .ok_or_else(|| ParseIssue::MalformedMonthName {
            name: name.to_string(),
        })
}
