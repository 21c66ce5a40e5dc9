//! Compiled line patterns.
//!
//! Dispositivo patterns are case-sensitive and anchored at the start of a
//! normalized line. Metadata patterns are case-insensitive apart from the
//! law-type keyword of the header line.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Month names and abbreviations, full names first so that "março" is not
/// cut short at "mar".
pub const MONTH_ALTERNATION: &str = "janeiro|fevereiro|mar[çc]o|abril|maio|junho|julho|agosto|\
     setembro|outubro|novembro|dezembro|jan|fev|mar|abr|mai|jun|jul|ago|set|out|nov|dez";

/// `Art. 1º`, `Art. 1.025.`, `Art. 5º-A -`, followed by the article text.
pub static ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>Art\.\s*\d+(?:\.\d{3})*(?:[º°]|o\b)?(?:-[A-Z]{1,3}\b)?)(?:\s*[.\-–—])?\s*(?P<text>.*)$")
        .expect("valid regex")
});

/// A line wrapped in double quotes, optionally closed by `(NR)`.
pub static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^".*(?:"|\(NR\))$"#).expect("valid regex"));

/// `§ 1º` or `Parágrafo único`, followed by the paragraph text.
pub static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<label>§\s*\d+(?:[º°]|o\b)?(?:-[A-Z]{1,3}\b)?|(?i:par[áa]grafo\s+[úu]nico))(?:\s*[.\-–—:])?\s*(?P<text>.*)$",
    )
    .expect("valid regex")
});

/// Upper-case roman numeral, a punctuation separator, then text.
///
/// The numeral group may match empty; callers reject that case.
pub static ROMAN_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<numeral>M{0,3}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3}))\s*[.\-–—):]\s*(?P<text>.+)$",
    )
    .expect("valid regex")
});

/// `a)`, `b)`, `aa)` followed by the item text.
pub static LETTER_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<letter>[a-zA-Z]+\))\s*(?P<text>.*)$").expect("valid regex"));

/// `1.`, `2)`, `1º` followed by whitespace and the item text.
pub static NUMBER_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<number>[1-9]+(?:[ºª°]|[^\w\s]))\s+(?P<text>.*)$").expect("valid regex")
});

/// Header line: law-type keyword, optional number, then `DE <date>` ending
/// in a year.
pub static LAW_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<kind>DECRETO-LEI|DECRETO|LEI\s+COMPLEMENTAR|LEI\s+DELEGADA|LEI|CONSTITUI[ÇC][ÃA]O)\b(?i:\s*(?:N(?:[.°º]|O\.?|[ÚU]MERO)?\s*)?(?P<number>\d[\d.]*)?.*?\bDE\s+.*?(?P<year>\d[ .]?\d{3})\b)",
    )
    .expect("valid regex")
});

/// `Revogada`/`Revogado` at the start of a line.
pub static REVOKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^revogad[ao].*$").expect("valid regex"));

/// Signature line: place, optional state, then a spelled-out date.
pub static PLACE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<place>Bras[íi]lia|Rio de Janeiro|Salvador)\b[ ,]*(?:(?:DF|RJ|BA)\b)?[., ]*(?P<date>(?P<day>\d{{1,2}})[ oº°de]{{4,5}}\b(?P<month>{MONTH_ALTERNATION})\b[ de]{{4,5}}(?P<year>\d[. ]?\d{{3}}))\b"
    ))
    .expect("valid regex")
});

/// The "Este texto não substitui o publicado no DOU/CLBR" notice.
pub static PUBLICATION_NOTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*este\s+texto\s+n[aã]o\s+subst.*?\s+o(?:\s+original)?\s+publicado.*(?:CLBR|D\.?O\.?U\.?).*$",
    )
    .expect("valid regex")
});

/// CLBR publication date inside a notice.
pub static CLBR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)CLBR.*?(?P<date>\d{1,2}[oº°]? ?\.\d{1,2}\.\d{4})").expect("valid regex")
});

/// DOU publication date inside a notice.
pub static DOU_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)D\.?O\.?U\.?.*?(?P<date>\d{1,2}[oº°]? ?\.\d{1,2}\.\d{4})").expect("valid regex")
});

/// Spelled-out date anywhere in text: `22 de dezembro de 2003`.
pub static SPELLED_OUT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?P<day>\d{{1,2}})[ oº°de]{{4,5}}\b(?P<month>{MONTH_ALTERNATION})\b[ de]{{4,5}}(?P<year>\d[. ]?\d{{3}})\b"
    ))
    .expect("valid regex")
});

/// Short numeric date anywhere in text: `7.9.1988`, `07-09-1988`, `1º/2/2003`.
pub static SHORT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<day>\d{1,2})[oº°]? ?[.\-/](?P<month>\d{1,2})[.\-/](?P<year>\d[ .]?\d{3})\b")
        .expect("valid regex")
});
