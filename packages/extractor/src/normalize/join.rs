//! Line-join heuristic for lines broken by the source's typesetting.

use crate::config::{CONTINUATION_MARKS, TERMINAL_MARKS};
use crate::tagger::Tagger;

use super::cleanup::clean_line;

fn is_lowercase_word(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_uppercase)
}

fn is_numeric_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn words(text: &str) -> impl DoubleEndedIterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Decide whether `curr` continues the sentence left open by `prev`.
///
/// Checked in order: a continuation mark ending `prev` joins; a terminal
/// mark ending `prev` never joins; `curr` starting with punctuation, a digit
/// or a lowercase letter, with a lowercase or numeric first word, joins;
/// `prev` ending in a lowercase word joins.
///
/// # Examples
/// ```
/// use legisbr_extractor::normalize::decide_join;
///
/// assert!(decide_join("inciso II, da Constituição", "o disposto no art. 5º,"));
/// assert!(!decide_join("Art. 2º Revoga-se.", "Art. 1º Esta lei dispõe."));
/// ```
#[must_use]
pub fn decide_join(curr: &str, prev: &str) -> bool {
    let (Some(first), Some(last)) = (curr.trim_start().chars().next(), prev.trim_end().chars().last())
    else {
        return false;
    };

    if CONTINUATION_MARKS.contains(&last) {
        return true;
    }
    if TERMINAL_MARKS.contains(&last) {
        return false;
    }

    let starts_low = !first.is_alphabetic() || first.is_lowercase();
    let first_word_low = words(curr)
        .next()
        .map_or(true, |w| is_lowercase_word(w) || is_numeric_word(w));
    if starts_low && first_word_low {
        return true;
    }

    words(prev).next_back().is_some_and(is_lowercase_word)
}

/// Join broken lines in a single forward pass.
///
/// A line that opens a structural unit (or carries metadata) never joins
/// its predecessor. Otherwise it is appended to the last emitted line with a
/// single space when `decide_join` says so, and the seam is cleaned.
#[must_use]
pub fn join_lines(lines: Vec<String>) -> Vec<String> {
    let tagger = Tagger::shared();
    let total = lines.len();
    let mut out: Vec<String> = Vec::with_capacity(total);

    for curr in lines {
        let join = out
            .last()
            .is_some_and(|prev| !tagger.opens_unit(&curr) && decide_join(&curr, prev));

        match out.last_mut() {
            Some(prev) if join => *prev = clean_line(&format!("{prev} {curr}")),
            _ => out.push(curr),
        }
    }

    tracing::debug!(lines_in = total, lines_out = out.len(), "joined broken lines");
    out
}
