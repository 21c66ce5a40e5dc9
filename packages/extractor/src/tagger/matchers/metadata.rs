//! Matchers for metadata lines: header, revocation, signature and
//! publication notice.

use regex::Regex;

use crate::config::canonical_place;
use crate::tagger::matcher::LineMatcher;
use crate::tagger::patterns::{CLBR_DATE, DOU_DATE, LAW_HEADER, PLACE_DATE, PUBLICATION_NOTICE, REVOKED};
use crate::tagger::types::{StructuralTag, TagKind, TagMatch};
use crate::types::LawType;

/// Keep only ASCII digits ("10.826" -> "10826", "1 988" -> "1988").
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

fn captured_date(pattern: &Regex, text: &str) -> Option<String> {
    pattern.captures(text).map(|caps| caps["date"].to_string())
}

/// Matcher for the act's header line.
pub struct LawHeaderMatcher;

impl LineMatcher for LawHeaderMatcher {
    fn kind(&self) -> TagKind {
        TagKind::LawHeader
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let caps = LAW_HEADER.captures(line)?;
        let law_type = LawType::from_keyword(&caps["kind"])?;
        let number = caps
            .name("number")
            .map(|m| digits_only(m.as_str()))
            .filter(|n| !n.is_empty());
        let tag = StructuralTag::LawHeader {
            law_type,
            number,
            year: digits_only(&caps["year"]),
        };
        Some(TagMatch::new(tag, caps[0].trim(), line))
    }
}

/// Matcher for revocation markers.
pub struct RevokedMatcher;

impl LineMatcher for RevokedMatcher {
    fn kind(&self) -> TagKind {
        TagKind::Revoked
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let m = REVOKED.find(line)?;
        Some(TagMatch::new(StructuralTag::Revoked, m.as_str(), line))
    }
}

/// Matcher for the signature line (`Brasília, 22 de dezembro de 2003`).
pub struct PlaceDateMatcher;

impl LineMatcher for PlaceDateMatcher {
    fn kind(&self) -> TagKind {
        TagKind::PlaceDate
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let caps = PLACE_DATE.captures(line)?;
        let place = &caps["place"];
        let tag = StructuralTag::PlaceDate {
            place: canonical_place(place).unwrap_or(place).to_string(),
            day: caps["day"].to_string(),
            month: caps["month"].to_string(),
            year: digits_only(&caps["year"]),
        };
        Some(TagMatch::new(tag, &caps[0], &caps["date"]))
    }
}

/// Matcher for the publication notice, with its CLBR and DOU dates.
pub struct PublicationNoticeMatcher;

impl LineMatcher for PublicationNoticeMatcher {
    fn kind(&self) -> TagKind {
        TagKind::PublicationNotice
    }

    fn try_match(&self, line: &str) -> Option<TagMatch> {
        let m = PUBLICATION_NOTICE.find(line)?;
        let notice = m.as_str().trim();
        let tag = StructuralTag::PublicationNotice {
            clbr_date: captured_date(&CLBR_DATE, notice),
            dou_date: captured_date(&DOU_DATE, notice),
        };
        Some(TagMatch::new(tag, notice, notice))
    }
}
