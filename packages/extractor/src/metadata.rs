//! Metadata extraction from the metadata tag stream.
//!
//! Every metadata kind is last-match-wins: a later header, revocation,
//! signature or notice line overwrites what an earlier one set.

use crate::dates::{parse_day_month_year, parse_spelled_out};
use crate::error::ParseIssue;
use crate::tagger::{StructuralTag, TaggedLine};
use crate::types::{LawMetadata, PublicationNotice};

/// Accumulates `LawMetadata` from tagged lines in document order.
#[derive(Debug, Default)]
pub struct MetadataAccumulator {
    metadata: LawMetadata,
    issues: Vec<ParseIssue>,
}

impl MetadataAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tagged line into the metadata.
    pub fn absorb(&mut self, tagged: &TaggedLine) {
        match &tagged.tag {
            StructuralTag::LawHeader {
                law_type,
                number,
                year,
            } => {
                if let Some(previous) = &self.metadata.full_name {
                    tracing::debug!(previous = %previous, line = tagged.line, "law header overwritten");
                }
                self.metadata.nickname = Some(LawMetadata::derive_nickname(
                    *law_type,
                    number.as_deref(),
                    year,
                ));
                self.metadata.full_name = Some(tagged.matched.clone());
                self.metadata.law_type = Some(*law_type);
                self.metadata.number.clone_from(number);
                self.metadata.year = Some(year.clone());
            }
            StructuralTag::Revoked => {
                self.metadata.revoked = true;
            }
            StructuralTag::PlaceDate {
                place,
                day,
                month,
                year,
            } => {
                if self.metadata.enactment_place.is_some() {
                    tracing::debug!(line = tagged.line, "enactment place and date overwritten");
                }
                self.metadata.enactment_place = Some(place.clone());
                self.metadata.enactment_date_text = Some(tagged.body.clone());
                self.metadata.enactment_date_iso = match parse_spelled_out(day, month, year) {
                    Ok(date) => Some(date),
                    Err(issue) => {
                        self.record(issue);
                        None
                    }
                };
            }
            StructuralTag::PublicationNotice {
                clbr_date,
                dou_date,
            } => {
                if self.metadata.publication.is_some() {
                    tracing::debug!(line = tagged.line, "publication notice overwritten");
                }
                let clbr_date = self.parse_optional(clbr_date.as_deref());
                let dou_date = self.parse_optional(dou_date.as_deref());
                self.metadata.publication = Some(PublicationNotice {
                    text: tagged.matched.clone(),
                    clbr_date,
                    dou_date,
                });
            }
            _ => {}
        }
    }

    fn parse_optional(&mut self, text: Option<&str>) -> Option<chrono::NaiveDate> {
        match parse_day_month_year(text?) {
            Ok(date) => Some(date),
            Err(issue) => {
                self.record(issue);
                None
            }
        }
    }

    fn record(&mut self, issue: ParseIssue) {
        tracing::warn!(issue = %issue, "metadata issue");
        self.issues.push(issue);
    }

    /// Finish accumulation.
    #[must_use]
    pub fn finish(self) -> (LawMetadata, Vec<ParseIssue>) {
        (self.metadata, self.issues)
    }
}

/// Build `LawMetadata` from a metadata tag stream.
#[must_use]
pub fn extract_metadata(tags: &[TaggedLine]) -> (LawMetadata, Vec<ParseIssue>) {
    let mut accumulator = MetadataAccumulator::new();
    for tagged in tags {
        accumulator.absorb(tagged);
    }
    accumulator.finish()
}
