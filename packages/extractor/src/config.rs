//! Configuration constants and validation functions for the extractor.

use std::path::Path;

use crate::error::{ExtractorError, Result};
use crate::months::fold_key;

/// Characters that, ending a line, leave the sentence open: the next line
/// always continues it.
pub const CONTINUATION_MARKS: &[char] = &['(', '<', '[', '{', '|', ';', ','];

/// Characters that, ending a line, close it: the next line never joins it.
pub const TERMINAL_MARKS: &[char] = &[
    '!', ')', '.', '?', ']', '}', '>', ':', '\'', '"', '`', '#', '$', '%', '&', '*', '+', '-',
    '/', '=', '@', '\\', '^', '_', '~',
];

/// Places where federal legislation is signed, in their canonical spelling.
pub const ENACTMENT_PLACES: &[&str] = &["Brasília", "Rio de Janeiro", "Salvador"];

/// Page furniture that the source site prints on its own line.
pub const BOILERPLATE_LINES: &[&str] = &["Texto compilado", "Texto original", "Texto para impressão"];

/// Text wrap width for YAML output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Default directory for structured output files.
pub const DEFAULT_OUTPUT_DIR: &str = "legislacao";

/// Largest value a roman-numeral item may carry (MMM).
pub const MAX_ROMAN_VALUE: u32 = 3000;

/// Validate that an input path points to a readable regular file.
///
/// # Examples
/// ```
/// use legisbr_extractor::config::validate_input_path;
///
/// assert!(validate_input_path(std::path::Path::new("/definitely/missing.txt")).is_err());
/// ```
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExtractorError::InvalidInput {
            path: path.to_path_buf(),
            reason: "file does not exist".to_string(),
        });
    }
    if !path.is_file() {
        return Err(ExtractorError::InvalidInput {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }
    Ok(())
}

/// Validate that an output path, if it exists, is a directory.
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(ExtractorError::InvalidInput {
            path: path.to_path_buf(),
            reason: "output path is not a directory".to_string(),
        });
    }
    Ok(())
}

/// Canonical spelling of a signature place, ignoring case and accents.
///
/// # Examples
/// ```
/// use legisbr_extractor::config::canonical_place;
///
/// assert_eq!(canonical_place("BRASILIA"), Some("Brasília"));
/// assert_eq!(canonical_place("Recife"), None);
/// ```
#[must_use]
pub fn canonical_place(name: &str) -> Option<&'static str> {
    let key = fold_key(name);
    ENACTMENT_PLACES.iter().copied().find(|place| fold_key(place) == key)
}

/// Check whether a line is one of the known boilerplate lines.
#[must_use]
pub fn is_boilerplate_line(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    BOILERPLATE_LINES.iter().any(|b| line == b.to_lowercase())
}
