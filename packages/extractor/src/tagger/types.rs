//! Types for the structural tagger.

use crate::types::LawType;

/// Classification of a normalized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralTag {
    LawHeader {
        law_type: LawType,
        number: Option<String>,
        year: String,
    },
    Revoked,
    PlaceDate {
        place: String,
        day: String,
        month: String,
        year: String,
    },
    PublicationNotice {
        clbr_date: Option<String>,
        dou_date: Option<String>,
    },
    Article {
        number: String,
    },
    Paragraph {
        label: String,
    },
    RomanItem {
        numeral: String,
    },
    LetterItem {
        letter: String,
    },
    NumberItem {
        number: String,
    },
    Citation,
    Unclassified,
}

/// Fieldless discriminant of `StructuralTag`, used for registry lookups
/// and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    LawHeader,
    Revoked,
    PlaceDate,
    PublicationNotice,
    Article,
    Paragraph,
    RomanItem,
    LetterItem,
    NumberItem,
    Citation,
    Unclassified,
}

impl StructuralTag {
    /// Get the kind of this tag.
    #[must_use]
    pub fn kind(&self) -> TagKind {
        match self {
            Self::LawHeader { .. } => TagKind::LawHeader,
            Self::Revoked => TagKind::Revoked,
            Self::PlaceDate { .. } => TagKind::PlaceDate,
            Self::PublicationNotice { .. } => TagKind::PublicationNotice,
            Self::Article { .. } => TagKind::Article,
            Self::Paragraph { .. } => TagKind::Paragraph,
            Self::RomanItem { .. } => TagKind::RomanItem,
            Self::LetterItem { .. } => TagKind::LetterItem,
            Self::NumberItem { .. } => TagKind::NumberItem,
            Self::Citation => TagKind::Citation,
            Self::Unclassified => TagKind::Unclassified,
        }
    }
}

/// Result of a successful match on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// The tag with its extracted attributes.
    pub tag: StructuralTag,

    /// Text matched by the pattern.
    pub matched: String,

    /// Text that follows the structural label (whole line for citations).
    pub body: String,
}

impl TagMatch {
    /// Create a new match.
    #[must_use]
    pub fn new(tag: StructuralTag, matched: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            tag,
            matched: matched.into(),
            body: body.into(),
        }
    }
}

/// A matched line with its one-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    pub line: usize,
    pub tag: StructuralTag,
    pub matched: String,
    pub body: String,
}

impl TaggedLine {
    /// Attach a line number to a match.
    #[must_use]
    pub fn from_match(line: usize, m: TagMatch) -> Self {
        Self {
            line,
            tag: m.tag,
            matched: m.matched,
            body: m.body,
        }
    }
}
