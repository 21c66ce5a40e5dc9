//! Text wrapping for YAML output.

use textwrap::{fill, Options};

use crate::config::TEXT_WRAP_WIDTH;

/// Wrap text at the given width, preserving paragraph breaks.
pub fn wrap_text(text: &str, width: usize) -> String {
    let options = Options::new(width).break_words(false);
    text.split("\n\n")
        .map(|p| fill(p, &options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Check if text should be wrapped for readability.
pub fn should_wrap_text(text: &str) -> bool {
    text.chars().count() > TEXT_WRAP_WIDTH
}

/// Wrap text with default width when it is long enough to need it.
pub fn wrap_if_long(text: &str) -> String {
    if should_wrap_text(text) {
        wrap_text(text, TEXT_WRAP_WIDTH)
    } else {
        text.to_string()
    }
}
