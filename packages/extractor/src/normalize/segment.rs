//! Segmentation of raw text into cleaned lines with explicit boundaries.
//!
//! Every physical line (or piece of one, after a concatenation split) becomes
//! a `Segment` that records what separated it from the next one. Folding
//! then decides which segments merge, without any marker characters in the
//! text itself.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::is_boilerplate_line;
use crate::tagger::Tagger;

use super::cleanup::clean_line;

/// Two capitalised words glued together ("DispõeSobre").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GLUED_CAPITALISED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\p{Lu}\p{Ll}+(\p{Lu}\p{Ll}+)\b").expect("valid regex"));

/// A capitalised word glued to an upper-case run ("RegistroSINARM").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GLUED_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\p{Lu}\p{Ll}+(\p{Lu}{2,})\b").expect("valid regex"));

/// What separates a segment from the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Ordinary line break.
    Soft,
    /// A run of blank lines.
    Paragraph,
    /// Split inserted between two glued words.
    Split,
}

/// One cleaned line with its boundary information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Cleaned text.
    pub text: String,

    /// The raw line ended in whitespace (a soft wrap in the source).
    pub trailing_space: bool,

    /// The text opens a structural unit or carries metadata.
    pub opens_unit: bool,

    /// Boundary after this segment.
    pub boundary: Boundary,
}

impl Segment {
    fn new(raw: &str, boundary: Boundary, tagger: &Tagger) -> Self {
        let text = clean_line(raw);
        let opens_unit = tagger.opens_unit(&text);
        Self {
            trailing_space: raw.ends_with([' ', '\u{a0}', '\t']),
            text,
            opens_unit,
            boundary,
        }
    }
}

/// Byte offsets where a physical line must be split because two words were
/// glued together by a lost line break.
fn concatenation_offsets(line: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = [&*GLUED_CAPITALISED, &*GLUED_UPPERCASE]
        .into_iter()
        .flat_map(|re| re.captures_iter(line))
        .filter_map(|caps| caps.get(1).map(|m| m.start()))
        .collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

/// Split a physical line at glued-word boundaries.
///
/// # Examples
/// ```
/// use legisbr_extractor::normalize::split_concatenations;
///
/// assert_eq!(
///     split_concatenations("Dispõe sobre armas.RegistroSINARM"),
///     vec!["Dispõe sobre armas.Registro", "SINARM"]
/// );
/// ```
#[must_use]
pub fn split_concatenations(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for offset in concatenation_offsets(line) {
        pieces.push(&line[start..offset]);
        start = offset;
    }
    pieces.push(&line[start..]);
    pieces
}

/// Split raw text into segments.
///
/// CRLF pairs become spaces; a run of blank lines becomes a `Paragraph`
/// boundary on the preceding segment.
#[must_use]
pub fn segment(raw: &str) -> Vec<Segment> {
    let tagger = Tagger::shared();
    let text = raw.replace("\r\n", " ").replace('\r', " ");
    let mut segments: Vec<Segment> = Vec::new();

    for physical in text.split('\n') {
        if physical.trim().is_empty() {
            if let Some(last) = segments.last_mut() {
                last.boundary = Boundary::Paragraph;
            }
            continue;
        }

        let pieces = split_concatenations(physical);
        let last = pieces.len() - 1;
        for (i, piece) in pieces.into_iter().enumerate() {
            let boundary = if i < last {
                Boundary::Split
            } else {
                Boundary::Soft
            };
            segments.push(Segment::new(piece, boundary, tagger));
        }
    }

    segments
}

/// Fold segments into lines.
///
/// A segment whose raw line ended in whitespace is a soft wrap: across an
/// ordinary line break it absorbs the next segment, unless that one opens a
/// structural unit. Empty and boilerplate segments are dropped.
#[must_use]
pub fn fold_segments(segments: Vec<Segment>) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut glue = false;

    for seg in segments {
        if seg.text.is_empty() || is_boilerplate_line(&seg.text) {
            glue = false;
            continue;
        }

        let folded = glue && !seg.opens_unit;
        match lines.last_mut() {
            Some(last) if folded => {
                last.push(' ');
                last.push_str(&seg.text);
            }
            _ => lines.push(seg.text),
        }

        glue = seg.trailing_space && seg.boundary == Boundary::Soft;
    }

    lines
}
