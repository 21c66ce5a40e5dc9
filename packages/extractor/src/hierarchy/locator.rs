//! Locator types for the hierarchy tracker.

use std::fmt;

use serde::Serialize;

/// Label given to the paragraph level when an item hangs directly off the
/// article's main text (its caput).
pub const CAPUT_LABEL: &str = "caput";

/// Label given to any other level skipped by a malformed document.
pub const UNKNOWN_LABEL: &str = "?";

/// One level of the legal hierarchy, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Artigo.
    Article,
    /// Parágrafo (or the caput, implicitly).
    Paragraph,
    /// Inciso, numbered with roman numerals.
    RomanItem,
    /// Alínea, lettered.
    LetterItem,
    /// Item, numbered with digits.
    NumberItem,
}

impl Level {
    /// All levels, outermost first.
    pub const ALL: [Level; 5] = [
        Level::Article,
        Level::Paragraph,
        Level::RomanItem,
        Level::LetterItem,
        Level::NumberItem,
    ];

    /// Portuguese name of the level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "artigo",
            Self::Paragraph => "parágrafo",
            Self::RomanItem => "inciso",
            Self::LetterItem => "alínea",
            Self::NumberItem => "item",
        }
    }

    /// Label used to fill this level when a deeper level is set without it.
    #[must_use]
    pub fn implicit_label(self) -> &'static str {
        match self {
            Self::Paragraph => CAPUT_LABEL,
            _ => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a fragment in the legal hierarchy.
///
/// Holds the last-seen label at each level. Labels are kept as written in
/// the source ("Art. 1º", "§ 2º", "IV", "b)", "3.").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Locator {
    pub article: Option<String>,
    pub paragraph: Option<String>,
    pub roman_item: Option<String>,
    pub letter_item: Option<String>,
    pub number_item: Option<String>,
}

impl Locator {
    /// Create an empty locator (all levels unset).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the label at a level.
    #[must_use]
    pub fn get(&self, level: Level) -> Option<&str> {
        self.slot(level).as_deref()
    }

    fn slot(&self, level: Level) -> &Option<String> {
        match level {
            Level::Article => &self.article,
            Level::Paragraph => &self.paragraph,
            Level::RomanItem => &self.roman_item,
            Level::LetterItem => &self.letter_item,
            Level::NumberItem => &self.number_item,
        }
    }

    fn slot_mut(&mut self, level: Level) -> &mut Option<String> {
        match level {
            Level::Article => &mut self.article,
            Level::Paragraph => &mut self.paragraph,
            Level::RomanItem => &mut self.roman_item,
            Level::LetterItem => &mut self.letter_item,
            Level::NumberItem => &mut self.number_item,
        }
    }

    /// Create a new locator positioned at `level` with `label`.
    ///
    /// Levels above are inherited, levels below are reset. Returns the new
    /// locator and the ancestor levels that were unset and had to be filled
    /// with their implicit label.
    #[must_use]
    pub fn descend(&self, level: Level, label: impl Into<String>) -> (Self, Vec<Level>) {
        let mut next = self.clone();
        let mut filled = Vec::new();

        for ancestor in Level::ALL.iter().copied().filter(|l| *l < level) {
            let slot = next.slot_mut(ancestor);
            if slot.is_none() {
                *slot = Some(ancestor.implicit_label().to_string());
                filled.push(ancestor);
            }
        }

        *next.slot_mut(level) = Some(label.into());

        for below in Level::ALL.iter().copied().filter(|l| *l > level) {
            *next.slot_mut(below) = None;
        }

        (next, filled)
    }

    /// Deepest level that carries a label.
    #[must_use]
    pub fn deepest(&self) -> Option<Level> {
        Level::ALL
            .iter()
            .rev()
            .copied()
            .find(|l| self.slot(*l).is_some())
    }

    /// Check that no level is set below an unset one.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        let mut seen_gap = false;
        for level in Level::ALL {
            match (self.slot(level).is_some(), seen_gap) {
                (true, true) => return false,
                (false, _) => seen_gap = true,
                _ => {}
            }
        }
        true
    }

    /// Check whether all levels are unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deepest().is_none()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = Level::ALL.iter().filter_map(|l| self.get(*l)).collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descend_sets_and_resets() {
        let locator = Locator::new();
        let (art, filled) = locator.descend(Level::Article, "Art. 1º");
        assert!(filled.is_empty());
        assert_eq!(art.get(Level::Article), Some("Art. 1º"));

        let (par, _) = art.descend(Level::Paragraph, "§ 1º");
        let (inc, _) = par.descend(Level::RomanItem, "I");
        assert_eq!(inc.to_string(), "Art. 1º, § 1º, I");

        let (art2, _) = inc.descend(Level::Article, "Art. 2º");
        assert_eq!(art2.get(Level::Article), Some("Art. 2º"));
        assert_eq!(art2.get(Level::Paragraph), None);
        assert_eq!(art2.get(Level::RomanItem), None);
    }

    #[test]
    fn test_descend_fills_caput() {
        let (art, _) = Locator::new().descend(Level::Article, "Art. 5º");
        let (inc, filled) = art.descend(Level::RomanItem, "I");

        assert_eq!(filled, vec![Level::Paragraph]);
        assert_eq!(inc.get(Level::Paragraph), Some(CAPUT_LABEL));
        assert!(inc.is_nested());
    }

    #[test]
    fn test_descend_fills_unknown_article() {
        let (par, filled) = Locator::new().descend(Level::Paragraph, "Parágrafo único");
        assert_eq!(filled, vec![Level::Article]);
        assert_eq!(par.get(Level::Article), Some(UNKNOWN_LABEL));
    }

    #[test]
    fn test_is_nested() {
        let gap = Locator {
            article: Some("Art. 1º".to_string()),
            roman_item: Some("I".to_string()),
            ..Locator::default()
        };
        assert!(!gap.is_nested());
        assert!(Locator::new().is_nested());
    }

    #[test]
    fn test_deepest() {
        assert_eq!(Locator::new().deepest(), None);
        let (art, _) = Locator::new().descend(Level::Article, "Art. 1º");
        let (alinea, _) = art
            .descend(Level::Paragraph, "§ 1º")
            .0
            .descend(Level::RomanItem, "II")
            .0
            .descend(Level::LetterItem, "a)");
        assert_eq!(alinea.deepest(), Some(Level::LetterItem));
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Article < Level::Paragraph);
        assert!(Level::LetterItem < Level::NumberItem);
        assert_eq!(Level::ALL.last(), Some(&Level::NumberItem));
    }
}
