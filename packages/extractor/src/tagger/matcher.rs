//! Line matcher trait definition.

use super::types::{TagKind, TagMatch};

/// Trait for line matchers.
///
/// Each matcher recognises one kind of structural line. Matchers are
/// registered in order in a `MatcherRegistry`; the first one that accepts a
/// line classifies it.
pub trait LineMatcher: Send + Sync {
    /// Kind of tag this matcher produces.
    fn kind(&self) -> TagKind;

    /// Try to classify a normalized line.
    fn try_match(&self, line: &str) -> Option<TagMatch>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::types::StructuralTag;

    struct RevokedStub;

    impl LineMatcher for RevokedStub {
        fn kind(&self) -> TagKind {
            TagKind::Revoked
        }

        fn try_match(&self, line: &str) -> Option<TagMatch> {
            line.starts_with("Revogada")
                .then(|| TagMatch::new(StructuralTag::Revoked, line, ""))
        }
    }

    #[test]
    fn test_matcher_trait() {
        let matcher = RevokedStub;
        assert_eq!(matcher.kind(), TagKind::Revoked);
        assert!(matcher.try_match("Revogada pela Lei nº 1").is_some());
        assert!(matcher.try_match("Art. 1º").is_none());
    }
}
