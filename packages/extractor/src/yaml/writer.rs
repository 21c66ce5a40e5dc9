//! YAML and JSON writers for structured legal acts.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::text::wrap_if_long;
use crate::config::DEFAULT_OUTPUT_DIR;
use crate::error::Result;
use crate::types::{LegalDocument, LegalFragment, PublicationNotice};

/// `key: 'value'` line, optionally a sequence item.
/// Captures: (1) everything up to the opening quote, (2) the unquoted value.
#[allow(clippy::expect_used)]
static QUOTED_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*(?:- )?[a-zA-Z_$][a-zA-Z_$0-9]*: )'([^']*)'$").expect("valid regex")
});

/// `key: |` or `key: >-` line opening a block scalar.
#[allow(clippy::expect_used)]
static BLOCK_SCALAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:- )?[a-zA-Z_$][a-zA-Z_$0-9]*: [|>][-+]?\d*$").expect("valid regex")
});

/// Words that YAML 1.1 readers resolve to booleans or null.
const YAML_11_KEYWORDS: &[&str] = &[
    "y", "n", "yes", "no", "on", "off", "true", "false", "null", "~",
];

/// Signature place and date for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlEnactment {
    #[serde(skip_serializing_if = "Option::is_none")]
    place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
}

/// Publication notice for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlPublication {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    clbr_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dou_date: Option<NaiveDate>,
}

impl From<&PublicationNotice> for YamlPublication {
    fn from(p: &PublicationNotice) -> Self {
        Self {
            text: wrap_if_long(&p.text),
            clbr_date: p.clbr_date,
            dou_date: p.dou_date,
        }
    }
}

/// Fragment representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paragraph: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roman_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    letter_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number_item: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    citation: bool,
    text: String,
    line: usize,
}

impl From<&LegalFragment> for YamlFragment {
    fn from(f: &LegalFragment) -> Self {
        let locator = f.locator.clone();
        Self {
            article: locator.article,
            paragraph: locator.paragraph,
            roman_item: locator.roman_item,
            letter_item: locator.letter_item,
            number_item: locator.number_item,
            citation: f.is_citation,
            text: wrap_if_long(&f.text),
            line: f.line,
        }
    }
}

/// Full document representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlDocument {
    #[serde(rename = "$id")]
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    law_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<String>,
    revoked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    enactment: Option<YamlEnactment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publication: Option<YamlPublication>,
    fragments: Vec<YamlFragment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<String>,
}

/// Generate the serializable YAML structure from a document.
fn generate_yaml_struct(doc: &LegalDocument) -> YamlDocument {
    let metadata = &doc.metadata;

    let has_enactment = metadata.enactment_place.is_some()
        || metadata.enactment_date_text.is_some()
        || metadata.enactment_date_iso.is_some();
    let enactment = has_enactment.then(|| YamlEnactment {
        place: metadata.enactment_place.clone(),
        date_text: metadata.enactment_date_text.clone(),
        date: metadata.enactment_date_iso,
    });

    YamlDocument {
        id: metadata.to_slug(),
        nickname: metadata.nickname.clone(),
        full_name: metadata.full_name.clone(),
        law_type: metadata.law_type.map(|t| t.as_str().to_string()),
        number: metadata.number.clone(),
        year: metadata.year.clone(),
        revoked: metadata.revoked,
        enactment,
        publication: metadata.publication.as_ref().map(YamlPublication::from),
        fragments: doc.fragments.iter().map(YamlFragment::from).collect(),
        issues: doc.issues.iter().map(ToString::to_string).collect(),
    }
}

/// Shift every block sequence two columns to the right of the key that
/// owns it.
///
/// serde_yaml_ng writes `- ` markers flush with their parent key; the
/// published files nest them one step deeper:
///
/// ```yaml
/// # Before:              # After:
/// fragments:             fragments:
/// - article: Art. 1º       - article: Art. 1º
///   text: foo                text: foo
/// ```
fn indent_yaml_sequences(yaml: &str) -> String {
    // Columns of the `- ` markers of the sequences around the current line.
    let mut open: Vec<usize> = Vec::new();

    yaml.lines()
        .map(|line| {
            let body = line.trim_start();
            if body.is_empty() {
                return line.to_string();
            }

            let column = line.len() - body.len();
            let is_item = body.starts_with("- ");
            open.retain(|&marker| marker < column || (marker == column && is_item));
            if is_item && open.last() != Some(&column) {
                open.push(column);
            }

            format!("{}{body}", " ".repeat(column + 2 * open.len()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check whether a scalar must keep its quotes to read back as the same
/// string.
///
/// Locator labels are the usual trouble: `1.` reads back as a float and `?`
/// as a mapping key, while `§ 1º`, `2)` and `caput` are plain strings.
/// Booleans of older YAML readers and ISO dates stay quoted as well.
fn needs_yaml_quoting(value: &str) -> bool {
    if YAML_11_KEYWORDS.contains(&value.to_lowercase().as_str())
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    {
        return true;
    }

    !matches!(
        serde_yaml_ng::from_str::<serde_yaml_ng::Value>(value),
        Ok(serde_yaml_ng::Value::String(parsed)) if parsed == value
    )
}

/// Drop single quotes the serializer added around values that are plain
/// strings anyway.
///
/// Lines inside a block scalar are fragment text and are copied verbatim.
fn strip_redundant_quotes(yaml: &str) -> String {
    // Column of the key whose block scalar is being copied.
    let mut block_key: Option<usize> = None;

    yaml.lines()
        .map(|line| {
            let body = line.trim_start();
            let column = line.len() - body.len();

            if let Some(key) = block_key {
                if body.is_empty() || column > key {
                    return line.to_string();
                }
                block_key = None;
            }

            if BLOCK_SCALAR_RE.is_match(line) {
                block_key = Some(column + if body.starts_with("- ") { 2 } else { 0 });
                return line.to_string();
            }

            match QUOTED_VALUE_RE.captures(line) {
                Some(caps) if !needs_yaml_quoting(&caps[2]) => format!("{}{}", &caps[1], &caps[2]),
                _ => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate a YAML string from a structured document.
pub fn generate_yaml(doc: &LegalDocument) -> Result<String> {
    let yaml_struct = generate_yaml_struct(doc);
    let yaml = serde_yaml_ng::to_string(&yaml_struct)?;
    let yaml = indent_yaml_sequences(&strip_redundant_quotes(&yaml));

    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Generate a pretty-printed JSON string from a structured document.
pub fn generate_json(doc: &LegalDocument) -> Result<String> {
    let mut content = serde_json::to_string_pretty(doc)?;
    content.push('\n');
    Ok(content)
}

/// Path a document is written to: `{base}/{law type}/{slug}.{extension}`.
#[must_use]
pub fn output_path(doc: &LegalDocument, output_base: Option<&Path>, extension: &str) -> PathBuf {
    let output_base = output_base.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));
    output_base
        .join(doc.metadata.dir_name())
        .join(format!("{}.{extension}", doc.metadata.to_slug()))
}

/// Replace `path` with `content` without ever exposing a half-written
/// file: the content is staged next to the target, synced, then renamed.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let staging = path.with_extension(format!("{extension}.partial"));

    let written = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    Ok(())
}

/// Save a document as a YAML file.
///
/// # Arguments
/// * `doc` - The structured document to save
/// * `output_base` - Base directory for output (default: "legislacao/")
///
/// # Returns
/// Path to the saved file
pub fn save_yaml(doc: &LegalDocument, output_base: Option<&Path>) -> Result<PathBuf> {
    let output_file = output_path(doc, output_base, "yaml");
    write_atomic(&output_file, &generate_yaml(doc)?)?;
    Ok(output_file)
}

/// Save a document as a JSON file next to where the YAML would go.
pub fn save_json(doc: &LegalDocument, output_base: Option<&Path>) -> Result<PathBuf> {
    let output_file = output_path(doc, output_base, "json");
    write_atomic(&output_file, &generate_json(doc)?)?;
    Ok(output_file)
}
