//! Error types for the extractor.
//!
//! Uses the dual-error pattern: `ExtractorError` for callers of the library
//! and the CLI, and `ParseIssue` for local, non-fatal problems that are
//! collected alongside the extraction result instead of aborting it.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::hierarchy::Level;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Input file could not be used.
    #[error("Invalid input '{}': {reason}", .path.display())]
    InvalidInput { path: PathBuf, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// A local parse issue promoted to an error by the caller.
    #[error(transparent)]
    Issue(#[from] ParseIssue),
}

/// Local problem found while structuring a single document.
///
/// Issues never abort the pipeline: the offending date or line is left as
/// it was and the issue is reported next to the fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseIssue {
    /// Month name not present in the month alias table.
    #[error("Unknown month name: '{name}'")]
    MalformedMonthName { name: String },

    /// Day, month and year do not form a calendar date.
    #[error("Invalid date '{text}': {reason}")]
    InvalidDate { text: String, reason: String },

    /// Citation seen before any article; its locator is empty.
    #[error("Citation on line {line} appears before any article")]
    OrphanCitation { line: usize },

    /// A dispositivo skipped an enclosing level that is not implied by the
    /// drafting rules; the level was filled with a placeholder.
    #[error("Line {line} skips the enclosing {level} level")]
    HierarchyGap { line: usize, level: Level },
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseIssue::MalformedMonthName {
            name: "brumário".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown month name: 'brumário'");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = ExtractorError::InvalidInput {
            path: PathBuf::from("lei.txt"),
            reason: "not a file".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input 'lei.txt': not a file");
    }

    #[test]
    fn test_issue_is_transparent() {
        let err = ExtractorError::from(ParseIssue::OrphanCitation { line: 3 });
        assert_eq!(
            err.to_string(),
            "Citation on line 3 appears before any article"
        );
    }

    #[test]
    fn test_hierarchy_gap_display() {
        let err = ParseIssue::HierarchyGap {
            line: 12,
            level: Level::RomanItem,
        };
        assert_eq!(err.to_string(), "Line 12 skips the enclosing inciso level");
    }
}
