//! Pipeline service that ties all components together.

use std::path::Path;

use crate::config::validate_input_path;
use crate::dates::normalize_dates_with_report;
use crate::error::{ExtractorError, Result};
use crate::hierarchy::LocatorTracker;
use crate::metadata::extract_metadata;
use crate::normalize::normalize;
use crate::tagger::Tagger;
use crate::types::LegalDocument;

/// Extract metadata and located fragments from normalized text.
///
/// Runs the metadata pass and the dispositivo pass over the lines of `text`
/// and threads the locator through the dispositivo tags. Lines that match
/// no dispositivo pattern produce no fragment.
///
/// # Examples
/// ```
/// use legisbr_extractor::extract_structure;
///
/// let document = extract_structure("LEI Nº 1, DE 2 DE JANEIRO DE 1990.\nArt. 1º Texto.");
/// assert_eq!(document.metadata.nickname.as_deref(), Some("LEI 1/1990"));
/// assert_eq!(document.fragments.len(), 1);
/// ```
#[must_use]
pub fn extract_structure(text: &str) -> LegalDocument {
    let tagger = Tagger::shared();

    let metadata_tags = tagger.tag_metadata(text.lines());
    let (metadata, mut issues) = extract_metadata(&metadata_tags);

    let dispositivo_tags = tagger.tag_dispositivos(text.lines());
    let (fragments, hierarchy_issues) = LocatorTracker::track(&dispositivo_tags);
    issues.extend(hierarchy_issues);

    tracing::info!(
        nickname = metadata.nickname.as_deref().unwrap_or("-"),
        fragments = fragments.len(),
        issues = issues.len(),
        "structured document"
    );

    LegalDocument {
        metadata,
        fragments,
        issues,
    }
}

/// Run the whole pipeline on raw text: normalize lines, normalize dates,
/// then extract the structure. Date issues come first in the issue list.
#[must_use]
pub fn structure_document(raw_text: &str) -> LegalDocument {
    let lines = normalize(raw_text);
    let dated = normalize_dates_with_report(&lines.join("\n"));

    let mut document = extract_structure(&dated.text);
    let mut issues = dated.issues;
    issues.append(&mut document.issues);
    document.issues = issues;
    document
}

/// Read a UTF-8 text file from disk.
pub fn read_text(path: &Path) -> Result<String> {
    validate_input_path(path)?;
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| ExtractorError::InvalidInput {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8 ({e})"),
    })
}

/// Read a plain-text law from disk and structure it.
///
/// # Arguments
/// * `path` - Path to a UTF-8 text file
///
/// # Returns
/// A `LegalDocument` with metadata, fragments and any issues met
pub fn structure_file(path: &Path) -> Result<LegalDocument> {
    let text = read_text(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(structure_document(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseIssue;
    use tempfile::tempdir;

    #[test]
    fn test_extract_structure_skips_prose() {
        let document = extract_structure("Dispõe sobre armas.\nArt. 1º Texto.\nprosa solta");
        assert_eq!(document.fragments.len(), 1);
        assert_eq!(document.fragments[0].line, 2);
    }

    #[test]
    fn test_structure_document_collects_date_issues_first() {
        let document = structure_document(
            "\"Citação órfã.\"\nArt. 1º Publicado em 31.02.2001.",
        );
        assert_eq!(document.issues.len(), 2);
        assert!(matches!(document.issues[0], ParseIssue::InvalidDate { .. }));
        assert_eq!(document.issues[1], ParseIssue::OrphanCitation { line: 1 });
    }

    #[test]
    fn test_structure_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lei.txt");
        std::fs::write(&path, "LEI Nº 7, DE 3 DE MARÇO DE 1999.\nArt. 1º Texto.\n").unwrap();

        let document = structure_file(&path).unwrap();
        assert_eq!(document.metadata.nickname.as_deref(), Some("LEI 7/1999"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x4c, 0x45, 0x49, 0xe7]).unwrap();

        assert!(matches!(
            read_text(&path),
            Err(ExtractorError::InvalidInput { .. })
        ));
    }
}
