//! Per-line text repair.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Line-leading article heading written without its dot or space
/// ("Art1º", "Art 1º", "ART. 1").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Art|ART)\s*\.?\s*(\d)").expect("valid regex"));

/// Runs of spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MULTIPLE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// Space between a word and the comma that follows it.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_BEFORE_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w) +,").expect("valid regex"));

/// Missing space after a comma between two letters.
/// Matches "lei,que" but not "lei, que" or "1,5".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMMA_BEFORE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\p{L})").expect("valid regex"));

/// Double quotes that are not the plain ASCII `"`: typographic quotes and
/// their CP1252 code points decoded as Latin-1.
const FANCY_DOUBLE_QUOTES: &[char] = &['\u{201C}', '\u{201D}', '\u{201E}', '\u{93}', '\u{94}'];

/// Repair a single raw line.
///
/// Non-breaking spaces and tabs become spaces, typographic double quotes
/// become `"`, space runs collapse, the line is trimmed, a mangled article
/// heading is rewritten to `Art. N`, and comma spacing is fixed.
///
/// # Examples
/// ```
/// use legisbr_extractor::normalize::clean_line;
///
/// assert_eq!(clean_line("  Art1º\u{a0} Esta  Lei ,que"), "Art. 1º Esta Lei, que");
/// ```
#[must_use]
pub fn clean_line(raw: &str) -> String {
    let text: String = raw
        .chars()
        .map(|c| match c {
            '\u{a0}' | '\t' => ' ',
            c if FANCY_DOUBLE_QUOTES.contains(&c) => '"',
            c => c,
        })
        .collect();

    let text = MULTIPLE_SPACES.replace_all(&text, " ");
    let text = text.trim();
    let text = ARTICLE_HEADING.replace(text, "Art. $1");
    let text = SPACE_BEFORE_COMMA.replace_all(&text, "$1,");
    fix_comma_spacing(&text)
}

/// Insert the missing space after commas between letters.
///
/// Commas after a digit are decimal separators and stay as they are.
pub fn fix_comma_spacing(text: &str) -> String {
    COMMA_BEFORE_LETTER
        .replace_all(text, |caps: &Captures| {
            let comma = caps.get(0).map_or(0, |m| m.start());
            let after_letter = text[..comma].chars().next_back().is_some_and(char::is_alphabetic);
            if after_letter {
                format!(", {}", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
