//! Brazilian legislation extractor - rebuild the structure of a law from its
//! plain-text rendition.
//!
//! Page text of a published act loses most of its layout: sentences are
//! broken across lines, words are glued together, and the hierarchy of
//! articles, paragraphs and items survives only as line prefixes. This crate
//! turns such text into a `LegalDocument`: the act's metadata plus an ordered
//! list of fragments, each tagged with its full hierarchical locator.
//!
//! # Example
//!
//! ```
//! use legisbr_extractor::structure_document;
//!
//! let document = structure_document(
//!     "LEI Nº 10.826, DE 22 DE DEZEMBRO DE 2003.\n\
//!      Art. 1º O Sistema Nacional de Armas tem circunscrição \n\
//!      em todo o território nacional.\n\
//!      Parágrafo único. Compete ao Sinarm:\n\
//!      I - identificar as armas de fogo;",
//! );
//!
//! assert_eq!(document.metadata.nickname.as_deref(), Some("LEI 10826/2003"));
//! assert_eq!(document.fragments.len(), 3);
//! assert_eq!(document.fragments[2].locator.to_string(), "Art. 1º, Parágrafo único, I");
//! ```
//!
//! # Architecture
//!
//! - [`normalize`]: Line normalizer (cleanup, segmentation, line joining)
//! - [`tagger`]: Structural tagger with an extensible matcher registry
//! - [`hierarchy`]: Locator type and the tracker threading it through tags
//! - [`metadata`]: Metadata extraction from tagged header lines
//! - [`dates`]: Date normalization and parsing
//! - [`months`]: Portuguese month-name table
//! - [`pipeline`]: Composition of the stages above
//! - [`types`]: Core data types (LegalDocument, LegalFragment, LawMetadata)
//! - [`error`]: Error types and Result alias
//! - [`config`]: Constants and input validation
//! - [`yaml`]: YAML and JSON output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod hierarchy;
pub mod metadata;
pub mod months;
pub mod normalize;
pub mod pipeline;
pub mod tagger;
pub mod types;
pub mod yaml;

// Re-export the pipeline entry points
pub use dates::normalize_dates;
pub use normalize::normalize;
pub use pipeline::{extract_structure, structure_document, structure_file};

// Re-export commonly used items
pub use error::{ExtractorError, ParseIssue, Result};
pub use hierarchy::{Level, Locator};
pub use types::{LawMetadata, LawType, LegalDocument, LegalFragment, PublicationNotice};
