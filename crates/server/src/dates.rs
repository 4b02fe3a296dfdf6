//! Conversions between the case API's `YYYY-MM-DD` dates, the three-field
//! form date, and the display formats used on pages.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use shared_types::{CaseDate, Language};

use crate::i18n::month_name;

const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Days a respondent has to file the ET3 after the claim is served.
pub const ET3_RESPONSE_DAYS: i64 = 28;

/// Parse the leading `YYYY-MM-DD` of a remote date or timestamp.
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let head = value.trim().get(..10)?;
    NaiveDate::parse_from_str(head, API_DATE_FORMAT).ok()
}

/// Split a remote date into the day / month / year form fields.
pub fn parse_to_case_date(value: &str) -> Option<CaseDate> {
    let date = parse_api_date(value)?;
    Some(CaseDate {
        day: format!("{:02}", date.day()),
        month: format!("{:02}", date.month()),
        year: format!("{:04}", date.year()),
    })
}

fn case_date_to_naive(date: &CaseDate) -> Option<NaiveDate> {
    let day: u32 = date.day.trim().parse().ok()?;
    let month: u32 = date.month.trim().parse().ok()?;
    let year_text = date.year.trim();
    if year_text.len() != 4 {
        return None;
    }
    let year: i32 = year_text.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whether the three fields name a real calendar date.
pub fn is_valid_case_date(date: &CaseDate) -> bool {
    case_date_to_naive(date).is_some()
}

/// Form date to the remote `YYYY-MM-DD` form. Day and month may be typed
/// without leading zeros.
pub fn convert_to_api_format(date: &CaseDate) -> Option<String> {
    case_date_to_naive(date).map(|d| d.format(API_DATE_FORMAT).to_string())
}

/// Remote date to `DD/MM/YYYY`.
pub fn format_date_string_to_dd_mm_yyyy(value: &str) -> Option<String> {
    parse_api_date(value).map(|d| d.format("%d/%m/%Y").to_string())
}

pub fn add_days(base: NaiveDate, days: i64) -> NaiveDate {
    base + Duration::days(days)
}

/// Remote date plus 28 days, as `DD/MM/YYYY`.
pub fn add_string_date_28_days(value: &str) -> Option<String> {
    parse_api_date(value).map(|d| add_days(d, ET3_RESPONSE_DAYS).format("%d/%m/%Y").to_string())
}

/// Long display form, `D Month YYYY`, with month names in the given language.
pub fn format_long(date: NaiveDate, language: Language) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name(date.month(), language),
        date.year()
    )
}

/// `base + days`, rendered in the long display form.
pub fn due_date(base: &str, days: i64, language: Language) -> Option<String> {
    parse_api_date(base).map(|d| format_long(add_days(d, days), language))
}

/// Display form of a remote timestamp such as `2024-01-15T10:21:07.123`.
///
/// Falls back to a bare date when there is no time part.
pub fn format_api_timestamp(value: &str, language: Language) -> Option<String> {
    let trimmed = value.trim();
    let date = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| parse_api_date(trimmed))?;
    Some(format_long(date, language))
}
