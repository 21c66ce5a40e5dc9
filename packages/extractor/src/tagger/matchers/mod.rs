//! Line matcher implementations.

mod dispositivo;
mod metadata;

pub use dispositivo::{
    ArticleMatcher, CitationMatcher, LetterItemMatcher, NumberItemMatcher, ParagraphMatcher,
    RomanItemMatcher,
};
pub use metadata::{
    digits_only, LawHeaderMatcher, PlaceDateMatcher, PublicationNoticeMatcher, RevokedMatcher,
};
