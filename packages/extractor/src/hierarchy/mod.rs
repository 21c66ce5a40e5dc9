//! Hierarchical locator tracking for Brazilian legislation.
//!
//! Threads the five-level locator (artigo > parágrafo > inciso > alínea >
//! item) through the stream of tagged dispositivo lines, producing one
//! `LegalFragment` per tagged line.

mod locator;
mod tracker;

pub use locator::{Level, Locator, CAPUT_LABEL, UNKNOWN_LABEL};
pub use tracker::LocatorTracker;
