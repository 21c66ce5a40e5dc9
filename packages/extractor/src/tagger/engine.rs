//! Tagger engine that runs the metadata and dispositivo passes.

use std::sync::LazyLock;

use super::registry::{create_dispositivo_registry, create_metadata_registry, MatcherRegistry};
use super::types::{TagMatch, TaggedLine};

static SHARED: LazyLock<Tagger> = LazyLock::new(Tagger::new);

/// Engine that classifies normalized lines using the two registries.
///
/// The metadata pass and the dispositivo pass are independent: a line may
/// be tagged by both (a header line is never a dispositivo, but nothing
/// prevents it).
pub struct Tagger {
    metadata: MatcherRegistry,
    dispositivo: MatcherRegistry,
}

impl Tagger {
    /// Create a tagger with the standard registries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: create_metadata_registry(),
            dispositivo: create_dispositivo_registry(),
        }
    }

    /// Process-wide tagger with the standard registries.
    #[must_use]
    pub fn shared() -> &'static Tagger {
        &SHARED
    }

    /// Check whether a line opens a structural unit of any kind.
    ///
    /// Used by the normalizer to stop folding wrapped lines into the next
    /// header, article, item or notice.
    #[must_use]
    pub fn opens_unit(&self, line: &str) -> bool {
        let line = line.trim();
        self.dispositivo.classify(line).is_some() || self.metadata.classify(line).is_some()
    }

    /// Run the metadata pass over the lines of a text.
    #[must_use]
    pub fn tag_metadata<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Vec<TaggedLine> {
        run_pass(&self.metadata, lines)
    }

    /// Run the dispositivo pass over the lines of a text.
    #[must_use]
    pub fn tag_dispositivos<'a>(
        &self,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Vec<TaggedLine> {
        run_pass(&self.dispositivo, lines)
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

fn run_pass<'a>(
    registry: &MatcherRegistry,
    lines: impl IntoIterator<Item = &'a str>,
) -> Vec<TaggedLine> {
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            registry
                .classify(line)
                .map(|m: TagMatch| TaggedLine::from_match(i + 1, m))
        })
        .collect()
}
