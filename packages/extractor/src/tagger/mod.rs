//! Structural tagger for normalized legal text.
//!
//! Classifies each line as metadata (header, revocation, signature,
//! publication notice) or as a dispositivo (article, paragraph, inciso,
//! alínea, item, citation). Matchers are registered in priority order in a
//! `MatcherRegistry`, and the `Tagger` runs one registry per pass.

mod engine;
mod matcher;
pub mod matchers;
pub mod patterns;
mod registry;
mod roman;
mod types;

pub use engine::Tagger;
pub use matcher::LineMatcher;
pub use registry::{create_dispositivo_registry, create_metadata_registry, MatcherRegistry};
pub use roman::roman_value;
pub use types::{StructuralTag, TagKind, TagMatch, TaggedLine};
