//! Ordered matcher registry and the factory functions for each pass.

use super::matcher::LineMatcher;
use super::matchers::{
    ArticleMatcher, CitationMatcher, LawHeaderMatcher, LetterItemMatcher, NumberItemMatcher,
    ParagraphMatcher, PlaceDateMatcher, PublicationNoticeMatcher, RevokedMatcher,
    RomanItemMatcher,
};
use tracing::trace;

use super::types::TagMatch;

/// Ordered list of matchers.
///
/// Registration order is priority order: the first matcher that accepts a
/// line classifies it.
pub struct MatcherRegistry {
    matchers: Vec<Box<dyn LineMatcher>>,
}

impl MatcherRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Append a matcher with the lowest priority so far.
    pub fn register(&mut self, matcher: impl LineMatcher + 'static) {
        self.matchers.push(Box::new(matcher));
    }

    /// Classify a line with the first matcher that accepts it.
    #[must_use]
    pub fn classify(&self, line: &str) -> Option<TagMatch> {
        self.matchers.iter().find_map(|m| {
            let found = m.try_match(line)?;
            trace!(kind = ?m.kind(), line, "Line classified");
            Some(found)
        })
    }

    /// Number of registered matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Check whether the registry has no matchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the registry for the dispositivo pass.
///
/// Priority: Article, Citation, Paragraph, RomanItem, LetterItem,
/// NumberItem.
#[must_use]
pub fn create_dispositivo_registry() -> MatcherRegistry {
    let mut registry = MatcherRegistry::new();
    registry.register(ArticleMatcher);
    registry.register(CitationMatcher);
    registry.register(ParagraphMatcher);
    registry.register(RomanItemMatcher);
    registry.register(LetterItemMatcher);
    registry.register(NumberItemMatcher);
    registry
}

/// Create the registry for the metadata pass.
#[must_use]
pub fn create_metadata_registry() -> MatcherRegistry {
    let mut registry = MatcherRegistry::new();
    registry.register(LawHeaderMatcher);
    registry.register(RevokedMatcher);
    registry.register(PlaceDateMatcher);
    registry.register(PublicationNoticeMatcher);
    registry
}
