//! YAML and JSON output for structured legal acts.

mod text;
mod writer;

pub use text::{should_wrap_text, wrap_if_long, wrap_text};
pub use writer::{generate_json, generate_yaml, output_path, save_json, save_yaml};
