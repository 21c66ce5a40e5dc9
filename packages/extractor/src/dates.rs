//! Date normalization.
//!
//! Repairs the year of spelled-out dates (`7 de setembro de 1 988` becomes
//! `7 de setembro de 1988`) and rewrites short numeric dates to
//! `DD.MM.YYYY`. A date that cannot be validated is left exactly as
//! written and reported as a `ParseIssue`; the rest of the text is still
//! normalized.

use chrono::NaiveDate;
use regex::Captures;

use crate::error::ParseIssue;
use crate::months::month_ordinal;
use crate::tagger::matchers::digits_only;
use crate::tagger::patterns::{SHORT_DATE, SPELLED_OUT_DATE};

/// Normalized text with the dates that could not be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNormalization {
    pub text: String,
    pub issues: Vec<ParseIssue>,
}

/// Normalize every date in `text`, dropping the issue report.
///
/// # Examples
/// ```
/// use legisbr_extractor::dates::normalize_dates;
///
/// assert_eq!(normalize_dates("em 7 de setembro de 1 988"), "em 7 de setembro de 1988");
/// assert_eq!(normalize_dates("em 7.9.1988"), "em 07.09.1988");
/// ```
#[must_use]
pub fn normalize_dates(text: &str) -> String {
    normalize_dates_with_report(text).text
}

/// Normalize every date in `text` and report the ones left unchanged.
#[must_use]
pub fn normalize_dates_with_report(text: &str) -> DateNormalization {
    let mut issues = Vec::new();

    let spelled = SPELLED_OUT_DATE.replace_all(text, |caps: &Captures<'_>| {
        rewrite_spelled_out(caps).unwrap_or_else(|issue| {
            issues.push(issue);
            caps[0].to_string()
        })
    });

    let short = SHORT_DATE.replace_all(&spelled, |caps: &Captures<'_>| {
        rewrite_short(caps).unwrap_or_else(|issue| {
            issues.push(issue);
            caps[0].to_string()
        })
    });

    for issue in &issues {
        tracing::warn!(issue = %issue, "date left unchanged");
    }

    DateNormalization {
        text: short.into_owned(),
        issues,
    }
}

/// Keep the date as written up to the year, and merge the year's digits.
fn rewrite_spelled_out(caps: &Captures<'_>) -> Result<String, ParseIssue> {
    let whole = caps.get(0).map_or("", |m| m.as_str());
    let year = digits_only(&caps["year"]);

    let ordinal = month_ordinal(&caps["month"])?;
    calendar_date(whole, &caps["day"], ordinal, &year)?;

    let year_offset = caps
        .name("year")
        .zip(caps.get(0))
        .map_or(0, |(y, m)| y.start() - m.start());
    Ok(format!("{}{year}", &whole[..year_offset]))
}

fn rewrite_short(caps: &Captures<'_>) -> Result<String, ParseIssue> {
    let month: u32 = caps["month"].parse().map_err(|_| invalid(&caps[0], "month is not a number"))?;
    let year = digits_only(&caps["year"]);
    let date = calendar_date(&caps[0], &caps["day"], month, &year)?;
    Ok(date.format("%d.%m.%Y").to_string())
}

fn invalid(text: &str, reason: &str) -> ParseIssue {
    ParseIssue::InvalidDate {
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

/// Build a calendar date from day and year digits and a month ordinal.
fn calendar_date(text: &str, day: &str, month: u32, year: &str) -> Result<NaiveDate, ParseIssue> {
    let day: u32 = day.parse().map_err(|_| invalid(text, "day is not a number"))?;
    let year: i32 = year.parse().map_err(|_| invalid(text, "year is not a number"))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid(text, "not a calendar date"))
}

/// Parse a `D.M.YYYY` date as printed in publication notices.
///
/// Any non-digit characters separate the three parts, so an ordinal after
/// the day ("1º.2.2003") is accepted.
pub fn parse_day_month_year(text: &str) -> Result<NaiveDate, ParseIssue> {
    let parts: Vec<&str> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid(text, "expected day, month and year"));
    };
    let month: u32 = month.parse().map_err(|_| invalid(text, "month is not a number"))?;
    calendar_date(text, day, month, year)
}

/// Parse a spelled-out date (`22 de dezembro de 2003`).
pub fn parse_spelled_out(day: &str, month: &str, year: &str) -> Result<NaiveDate, ParseIssue> {
    let text = format!("{day} de {month} de {year}");
    let ordinal = month_ordinal(month)?;
    calendar_date(&text, day, ordinal, &digits_only(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelled_out_year_with_space() {
        assert_eq!(
            normalize_dates("Brasília, 7 de setembro de 1 988."),
            "Brasília, 7 de setembro de 1988."
        );
    }

    #[test]
    fn test_spelled_out_keeps_wording() {
        assert_eq!(
            normalize_dates("em 1º de março de 2000"),
            "em 1º de março de 2000"
        );
        assert_eq!(
            normalize_dates("DE 22 DE DEZEMBRO DE 2.003"),
            "DE 22 DE DEZEMBRO DE 2003"
        );
    }

    #[test]
    fn test_short_dates_are_padded() {
        assert_eq!(normalize_dates("DOU de 7.9.1988"), "DOU de 07.09.1988");
        assert_eq!(normalize_dates("de 07-09-1988"), "de 07.09.1988");
        assert_eq!(normalize_dates("de 1º/2/2003"), "de 01.02.2003");
    }

    #[test]
    fn test_invalid_short_date_left_unchanged() {
        let report = normalize_dates_with_report("em 31.02.2001 e 7.9.1988");
        assert_eq!(report.text, "em 31.02.2001 e 07.09.1988");
        assert_eq!(
            report.issues,
            vec![ParseIssue::InvalidDate {
                text: "31.02.2001".to_string(),
                reason: "not a calendar date".to_string(),
            }]
        );
    }

    #[test]
    fn test_invalid_spelled_out_date_left_unchanged() {
        let report = normalize_dates_with_report("em 31 de fevereiro de 2001");
        assert_eq!(report.text, "em 31 de fevereiro de 2001");
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn test_normalize_dates_is_idempotent() {
        let text = "Lei de 7 de setembro de 1 988, DOU de 7.9.1988.";
        let once = normalize_dates(text);
        assert_eq!(normalize_dates(&once), once);
    }

    #[test]
    fn test_numbers_that_are_not_dates() {
        let text = "Lei nº 10.826/2003, art. 5º";
        assert_eq!(normalize_dates(text), text);
    }

    #[test]
    fn test_parse_day_month_year() {
        assert_eq!(
            parse_day_month_year("1º.2.2003"),
            Ok(NaiveDate::from_ymd_opt(2003, 2, 1).unwrap())
        );
        assert!(parse_day_month_year("2003").is_err());
        assert!(parse_day_month_year("30.2.2003").is_err());
    }

    #[test]
    fn test_parse_spelled_out() {
        assert_eq!(
            parse_spelled_out("22", "dezembro", "2003"),
            Ok(NaiveDate::from_ymd_opt(2003, 12, 22).unwrap())
        );
        assert_eq!(
            parse_spelled_out("22", "brumário", "2003"),
            Err(ParseIssue::MalformedMonthName {
                name: "brumário".to_string()
            })
        );
    }
}
