//! Core data types for the extractor.
//!
//! These types represent a structured Brazilian legal act: its metadata and
//! the ordered list of located text fragments.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::error::ParseIssue;
use crate::hierarchy::Locator;

/// Kinds of legal acts recognised on a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LawType {
    /// Decreto-lei.
    #[serde(rename = "DECRETO-LEI")]
    DecreeLaw,

    /// Decreto.
    #[serde(rename = "DECRETO")]
    Decree,

    /// Lei complementar.
    #[serde(rename = "LEI COMPLEMENTAR")]
    ComplementaryLaw,

    /// Lei delegada.
    #[serde(rename = "LEI DELEGADA")]
    DelegatedLaw,

    /// Lei ordinária.
    #[serde(rename = "LEI")]
    Law,

    /// Constituição.
    #[serde(rename = "CONSTITUIÇÃO")]
    Constitution,
}

impl LawType {
    /// Get the label as written on the header line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DecreeLaw => "DECRETO-LEI",
            Self::Decree => "DECRETO",
            Self::ComplementaryLaw => "LEI COMPLEMENTAR",
            Self::DelegatedLaw => "LEI DELEGADA",
            Self::Law => "LEI",
            Self::Constitution => "CONSTITUIÇÃO",
        }
    }

    /// Get the directory name for file output.
    #[must_use]
    pub fn to_dir_name(&self) -> &'static str {
        match self {
            Self::DecreeLaw => "decreto_lei",
            Self::Decree => "decreto",
            Self::ComplementaryLaw => "lei_complementar",
            Self::DelegatedLaw => "lei_delegada",
            Self::Law => "lei",
            Self::Constitution => "constituicao",
        }
    }

    /// Parse the keyword captured from a header line.
    ///
    /// Internal whitespace is collapsed and the cedilla/tilde of
    /// "CONSTITUIÇÃO" are optional.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        let keyword = text.split_whitespace().collect::<Vec<_>>().join(" ");
        match keyword.to_uppercase().as_str() {
            "DECRETO-LEI" => Some(Self::DecreeLaw),
            "DECRETO" => Some(Self::Decree),
            "LEI COMPLEMENTAR" => Some(Self::ComplementaryLaw),
            "LEI DELEGADA" => Some(Self::DelegatedLaw),
            "LEI" => Some(Self::Law),
            "CONSTITUIÇÃO" | "CONSTITUICÃO" | "CONSTITUIÇAO" | "CONSTITUICAO" => {
                Some(Self::Constitution)
            }
            _ => None,
        }
    }
}

/// The publication notice printed under compiled texts, with its dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationNotice {
    /// Notice as written.
    pub text: String,

    /// Date of publication in the Coleção de Leis do Brasil.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clbr_date: Option<NaiveDate>,

    /// Date of publication in the Diário Oficial da União.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dou_date: Option<NaiveDate>,
}

/// Metadata extracted from a single legal act.
///
/// Header fields stay `None` when no header line was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LawMetadata {
    /// Short canonical name (e.g. "LEI 10826/2003", "CF/1988").
    pub nickname: Option<String>,

    /// Header line as matched.
    pub full_name: Option<String>,

    /// Kind of act.
    pub law_type: Option<LawType>,

    /// Act number, digits only.
    pub number: Option<String>,

    /// Four-digit year, digits only.
    pub year: Option<String>,

    /// Whether a revocation marker was found.
    pub revoked: bool,

    /// Place of signature (e.g. "Brasília").
    pub enactment_place: Option<String>,

    /// Signature date as written (e.g. "22 de dezembro de 2003").
    pub enactment_date_text: Option<String>,

    /// Signature date.
    pub enactment_date_iso: Option<NaiveDate>,

    /// Publication notice, if present.
    pub publication: Option<PublicationNotice>,
}

/// Regex for slug generation - matches non-word characters.
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dashes.
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Slug used when a document carries no recognisable header.
pub const UNNAMED_SLUG: &str = "sem_identificacao";

impl LawMetadata {
    /// Build the canonical nickname from the header parts.
    ///
    /// # Examples
    /// ```
    /// use legisbr_extractor::types::{LawMetadata, LawType};
    ///
    /// assert_eq!(
    ///     LawMetadata::derive_nickname(LawType::Law, Some("10826"), "2003"),
    ///     "LEI 10826/2003"
    /// );
    /// assert_eq!(
    ///     LawMetadata::derive_nickname(LawType::Constitution, None, "1988"),
    ///     "CF/1988"
    /// );
    /// ```
    #[must_use]
    pub fn derive_nickname(law_type: LawType, number: Option<&str>, year: &str) -> String {
        match (law_type, number) {
            (LawType::Constitution, _) => format!("CF/{year}"),
            (_, Some(number)) => format!("{} {number}/{year}", law_type.as_str()),
            (_, None) => format!("{}/{year}", law_type.as_str()),
        }
    }

    /// Generate a file-name friendly slug from the nickname.
    ///
    /// # Examples
    /// ```
    /// use legisbr_extractor::types::LawMetadata;
    ///
    /// let metadata = LawMetadata {
    ///     nickname: Some("LEI COMPLEMENTAR 101/2000".to_string()),
    ///     ..LawMetadata::default()
    /// };
    /// assert_eq!(metadata.to_slug(), "lei_complementar_101_2000");
    /// ```
    #[must_use]
    pub fn to_slug(&self) -> String {
        let Some(nickname) = self.nickname.as_deref() else {
            return UNNAMED_SLUG.to_string();
        };
        let text = nickname.to_lowercase();
        let text = SLUG_NON_WORD.replace_all(&text, " ");
        let text = SLUG_SPACE_DASH.replace_all(&text, "_");
        text.trim_matches('_').to_string()
    }

    /// Directory name for this act's law type.
    #[must_use]
    pub fn dir_name(&self) -> &'static str {
        self.law_type.map_or("outros", |t| t.to_dir_name())
    }
}

/// One located unit of legal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalFragment {
    /// Position in the hierarchy.
    #[serde(flatten)]
    pub locator: Locator,

    /// Whether the text quotes another act's provision.
    pub is_citation: bool,

    /// Text after the structural label (the whole line for citations).
    pub text: String,

    /// One-based line number in the structured text.
    pub line: usize,
}

/// A structured legal act: metadata, fragments in source order, and the
/// local issues met while structuring it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegalDocument {
    pub metadata: LawMetadata,
    pub fragments: Vec<LegalFragment>,
    pub issues: Vec<ParseIssue>,
}

impl LegalDocument {
    /// Number of citation fragments.
    #[must_use]
    pub fn citation_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_citation).count()
    }

    /// Distinct article labels in order of first appearance.
    #[must_use]
    pub fn articles(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for article in self.fragments.iter().filter_map(|f| f.locator.article.as_deref()) {
            if !seen.contains(&article) {
                seen.push(article);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_law_type_as_str() {
        assert_eq!(LawType::Law.as_str(), "LEI");
        assert_eq!(LawType::DecreeLaw.as_str(), "DECRETO-LEI");
        assert_eq!(LawType::ComplementaryLaw.as_str(), "LEI COMPLEMENTAR");
    }

    #[test]
    fn test_law_type_to_dir_name() {
        assert_eq!(LawType::DecreeLaw.to_dir_name(), "decreto_lei");
        assert_eq!(LawType::Constitution.to_dir_name(), "constituicao");
    }

    #[test]
    fn test_law_type_from_keyword() {
        assert_eq!(LawType::from_keyword("LEI"), Some(LawType::Law));
        assert_eq!(
            LawType::from_keyword("LEI  COMPLEMENTAR"),
            Some(LawType::ComplementaryLaw)
        );
        assert_eq!(
            LawType::from_keyword("CONSTITUICAO"),
            Some(LawType::Constitution)
        );
        assert_eq!(LawType::from_keyword("PORTARIA"), None);
    }

    #[test]
    fn test_derive_nickname_without_number() {
        assert_eq!(
            LawMetadata::derive_nickname(LawType::Decree, None, "1890"),
            "DECRETO/1890"
        );
    }

    #[test]
    fn test_to_slug() {
        let metadata = LawMetadata {
            nickname: Some("DECRETO-LEI 2848/1940".to_string()),
            law_type: Some(LawType::DecreeLaw),
            ..LawMetadata::default()
        };
        assert_eq!(metadata.to_slug(), "decreto_lei_2848_1940");
        assert_eq!(metadata.dir_name(), "decreto_lei");
    }

    #[test]
    fn test_to_slug_without_header() {
        let metadata = LawMetadata::default();
        assert_eq!(metadata.to_slug(), UNNAMED_SLUG);
        assert_eq!(metadata.dir_name(), "outros");
    }

    #[test]
    fn test_articles_deduplicated() {
        let fragment = |article: &str| LegalFragment {
            locator: Locator {
                article: Some(article.to_string()),
                ..Locator::default()
            },
            is_citation: false,
            text: String::new(),
            line: 1,
        };
        let document = LegalDocument {
            fragments: vec![fragment("Art. 1º"), fragment("Art. 1º"), fragment("Art. 2º")],
            ..LegalDocument::default()
        };
        assert_eq!(document.articles(), vec!["Art. 1º", "Art. 2º"]);
        assert_eq!(document.citation_count(), 0);
    }
}
