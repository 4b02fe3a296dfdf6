//! Field validators. Each returns the error type to record against the
//! field, or `None` when the value is acceptable.

pub mod file;

use shared_types::{error_type, CaseDate, FormError};

use crate::dates;

pub fn is_field_filled_in(value: Option<&str>) -> Option<&'static str> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(error_type::REQUIRED),
    }
}

fn blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// UK phone number: digits with optional spaces, dashes, brackets and a
/// leading `+`. Empty is allowed.
pub fn is_valid_uk_tel_number(value: Option<&str>) -> Option<&'static str> {
    if blank(value) {
        return None;
    }
    let raw = value.unwrap_or_default().trim();
    let (has_plus, rest) = match raw.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    if !rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return Some(error_type::INVALID);
    }
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    let valid = if has_plus {
        digits.starts_with("44") && (11..=13).contains(&digits.len())
    } else {
        (10..=11).contains(&digits.len())
    };
    (!valid).then_some(error_type::INVALID)
}

/// Money amount: digits with optional thousands separators and pence.
pub fn is_valid_currency(value: Option<&str>) -> Option<&'static str> {
    if blank(value) {
        return None;
    }
    let v = value.unwrap_or_default().trim();
    let v = v.strip_prefix('£').unwrap_or(v);
    let (pounds, pence) = match v.split_once('.') {
        Some((pounds, pence)) => (pounds, Some(pence)),
        None => (v, None),
    };
    let pence_ok = pence.map_or(true, |p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit()));
    let groups: Vec<&str> = pounds.split(',').collect();
    let pounds_ok = !pounds.is_empty()
        && groups.iter().all(|g| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit()))
        && (groups.len() == 1 || (groups[0].len() <= 3 && groups[1..].iter().all(|g| g.len() == 3)))
        && pounds.chars().filter(|c| c.is_ascii_digit()).count() <= 12;
    (!(pounds_ok && pence_ok)).then_some(error_type::INVALID)
}

/// Average weekly hours between 0 and 168, at most two decimal places.
pub fn is_valid_avg_weekly_hours(value: Option<&str>) -> Option<&'static str> {
    if blank(value) {
        return None;
    }
    let v = value.unwrap_or_default().trim();
    let decimals_ok = v.split_once('.').map_or(true, |(_, d)| d.len() <= 2);
    match v.parse::<f64>() {
        Ok(hours) if decimals_ok && (0.0..=168.0).contains(&hours) => None,
        _ => Some(error_type::INVALID),
    }
}

/// Three-field date input. All blank counts as missing.
pub fn is_valid_case_date(date: &CaseDate) -> Option<&'static str> {
    let all_blank = [&date.day, &date.month, &date.year]
        .iter()
        .all(|part| part.trim().is_empty());
    if all_blank {
        return Some(error_type::REQUIRED);
    }
    (!dates::is_valid_case_date(date)).then_some(error_type::INVALID)
}

/// Radio answer: required, and must be one of `allowed`.
pub fn is_one_of(value: Option<&str>, allowed: &[&str]) -> Option<&'static str> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Some(error_type::REQUIRED);
    };
    (!allowed.contains(&value)).then_some(error_type::INVALID)
}

/// Whole number such as a head count. Empty is allowed.
pub fn is_valid_whole_number(value: Option<&str>) -> Option<&'static str> {
    if blank(value) {
        return None;
    }
    let v = value.unwrap_or_default().trim().replace(',', "");
    let ok = v.len() <= 9 && v.chars().all(|c| c.is_ascii_digit());
    (!ok).then_some(error_type::INVALID)
}

/// Errors collected for one form, at most one per property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(Vec<FormError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, property_name: &str, error: Option<&str>) {
        if let Some(error) = error {
            self.add(FormError::new(error, property_name));
        }
    }

    pub fn add(&mut self, error: FormError) {
        if !self.0.iter().any(|e| e.property_name == error.property_name) {
            self.0.push(error);
        }
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = FormError>) {
        for error in errors {
            self.add(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<FormError> {
        self.0
    }
}
