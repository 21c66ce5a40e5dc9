//! Locator tracker: turns tagged dispositivo lines into located fragments.

use crate::error::ParseIssue;
use crate::tagger::{StructuralTag, TaggedLine};
use crate::types::LegalFragment;

use super::locator::{Level, Locator};

/// Stateful walker over the dispositivo tag stream.
///
/// Each opener sets its own level, inherits the levels above and clears the
/// levels below. A citation takes the locator of the fragment before it.
#[derive(Debug, Default)]
pub struct LocatorTracker {
    current: Locator,
    emitted: usize,
    issues: Vec<ParseIssue>,
}

impl LocatorTracker {
    /// Create a tracker with an empty locator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance over one tagged line.
    ///
    /// Returns `None` for tags that are not dispositivos.
    pub fn advance(&mut self, tagged: &TaggedLine) -> Option<LegalFragment> {
        let (level, label) = match &tagged.tag {
            StructuralTag::Article { number } => (Level::Article, number),
            StructuralTag::Paragraph { label } => (Level::Paragraph, label),
            StructuralTag::RomanItem { numeral } => (Level::RomanItem, numeral),
            StructuralTag::LetterItem { letter } => (Level::LetterItem, letter),
            StructuralTag::NumberItem { number } => (Level::NumberItem, number),
            StructuralTag::Citation => return Some(self.cite(tagged)),
            _ => return None,
        };

        let (next, filled) = self.current.descend(level, label.as_str());
        for gap in filled.into_iter().filter(|l| *l != Level::Paragraph) {
            self.record(ParseIssue::HierarchyGap {
                line: tagged.line,
                level: gap,
            });
        }
        self.current = next;

        Some(self.emit(tagged, false))
    }

    fn cite(&mut self, tagged: &TaggedLine) -> LegalFragment {
        if self.emitted == 0 {
            self.record(ParseIssue::OrphanCitation { line: tagged.line });
        }
        self.emit(tagged, true)
    }

    fn emit(&mut self, tagged: &TaggedLine, is_citation: bool) -> LegalFragment {
        self.emitted += 1;
        LegalFragment {
            locator: self.current.clone(),
            is_citation,
            text: tagged.body.clone(),
            line: tagged.line,
        }
    }

    fn record(&mut self, issue: ParseIssue) {
        tracing::warn!(issue = %issue, "hierarchy issue");
        self.issues.push(issue);
    }

    /// Consume the tracker, returning the issues it recorded.
    #[must_use]
    pub fn into_issues(self) -> Vec<ParseIssue> {
        self.issues
    }

    /// Walk a whole tag stream.
    #[must_use]
    pub fn track(tags: &[TaggedLine]) -> (Vec<LegalFragment>, Vec<ParseIssue>) {
        let mut tracker = Self::new();
        let fragments = tags.iter().filter_map(|t| tracker.advance(t)).collect();
        (fragments, tracker.into_issues())
    }
}
