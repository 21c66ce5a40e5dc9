//! Matchers for dispositivo lines: articles, paragraphs, items and
//! citations.

use crate::tagger::matcher::LineMatcher;
use crate::tagger::patterns::{ARTICLE, CITATION, LETTER_ITEM, NUMBER_ITEM, PARAGRAPH, ROMAN_ITEM};
use crate::tagger::roman::roman_value;
use crate::tagger::types::{StructuralTag, TagKind, TagMatch};

/// Matcher for `Art. N` lines.
pub struct ArticleMatcher;

impl LineMatcher for ArticleMatcher {
    fn kind(&self) -> TagKind {
        TagKind::Article
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let caps = ARTICLE.captures(line)?;
        let tag = StructuralTag::Article {
            number: caps["label"].to_string(),
        };
        Some(TagMatch::new(tag, &caps[0], &caps["text"]))
    }
}

/// Matcher for quoted lines inserted into the text by an amending act.
///
/// The whole line, quotes included, is the fragment text.
pub struct CitationMatcher;

impl LineMatcher for CitationMatcher {
    fn kind(&self) -> TagKind {
        TagKind::Citation
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let m = CITATION.find(line)?;
        Some(TagMatch::new(StructuralTag::Citation, m.as_str(), m.as_str()))
    }
}

/// Matcher for `§ N` and `Parágrafo único` lines.
pub struct ParagraphMatcher;

impl LineMatcher for ParagraphMatcher {
    fn kind(&self) -> TagKind {
        TagKind::Paragraph
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let caps = PARAGRAPH.captures(line)?;
        let tag = StructuralTag::Paragraph {
            label: caps["label"].to_string(),
        };
        Some(TagMatch::new(tag, &caps[0], &caps["text"]))
    }
}

/// Matcher for incisos (`I -`, `IV.`, `XII)`).
///
/// The numeral must be non-empty and worth at most 3000.
pub struct RomanItemMatcher;

impl LineMatcher for RomanItemMatcher {
    fn kind(&self) -> TagKind {
        TagKind::RomanItem
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let caps = ROMAN_ITEM.captures(line)?;
        let numeral = &caps["numeral"];
        roman_value(numeral)?;
        let tag = StructuralTag::RomanItem {
            numeral: numeral.to_string(),
        };
        Some(TagMatch::new(tag, &caps[0], &caps["text"]))
    }
}

/// Matcher for alíneas (`a)`, `b)`).
pub struct LetterItemMatcher;

impl LineMatcher for LetterItemMatcher {
    fn kind(&self) -> TagKind {
        TagKind::LetterItem
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let caps = LETTER_ITEM.captures(line)?;
        let tag = StructuralTag::LetterItem {
            letter: caps["letter"].to_string(),
        };
        Some(TagMatch::new(tag, &caps[0], &caps["text"]))
    }
}

/// Matcher for numbered items (`1.`, `2)`, `1º`).
pub struct NumberItemMatcher;

impl LineMatcher for NumberItemMatcher {
    fn kind(&self) -> TagKind {
        TagKind::NumberItem
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let caps = NUMBER_ITEM.captures(line)?;
        let tag = StructuralTag::NumberItem {
            number: caps["number"].to_string(),
        };
        Some(TagMatch::new(tag, &caps[0], &caps["text"]))
    }
}
