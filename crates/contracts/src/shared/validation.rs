//! Validation of entity drafts before they are sent to the backend.
//!
//! Errors are collected per field; every message is an i18n key so the
//! frontend can render it in the current locale.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::ValidateEmail;

/// Message keys produced by the validators
pub mod messages {
    pub const FIELD_REQUIRED: &str = "fieldRequired";
    pub const EMAIL_REQUIRED: &str = "emailRequired";
    pub const INVALID_EMAIL: &str = "invalidEmail";
    pub const INVALID_NUMBER: &str = "invalidNumber";
    pub const INVALID_DATE: &str = "invalidDate";
    pub const PASSWORD_TOO_SHORT: &str = "passwordTooShort";
    pub const SELECT_AT_LEAST_ONE: &str = "selectAtLeastOne";
}

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Field key -> message key. Only the first error per field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First error in field-key order; used for the blocking alert.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.iter().next().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    // ------------------------------------------------------------------
    // Checks used by `to_payload` implementations
    // ------------------------------------------------------------------

    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.insert(field, messages::FIELD_REQUIRED);
        }
    }

    pub fn require_list(&mut self, field: &str, values: &[String]) {
        if values.iter().all(|v| v.trim().is_empty()) {
            self.insert(field, messages::SELECT_AT_LEAST_ONE);
        }
    }

    /// Required, syntactically valid email address
    pub fn email(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.insert(field, messages::EMAIL_REQUIRED);
        } else if !is_valid_email(value) {
            self.insert(field, messages::INVALID_EMAIL);
        }
    }

    /// Optional email: only checked when filled in
    pub fn optional_email(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if !value.is_empty() && !is_valid_email(value) {
            self.insert(field, messages::INVALID_EMAIL);
        }
    }

    pub fn password(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.insert(field, messages::FIELD_REQUIRED);
        } else if value.chars().count() < MIN_PASSWORD_LENGTH {
            self.insert(field, messages::PASSWORD_TOO_SHORT);
        }
    }

    /// Optional decimal. Empty input is `None`, garbage is an error.
    pub fn decimal(&mut self, field: &str, raw: &str) -> Option<f64> {
        match parse_decimal(raw) {
            Ok(value) => value,
            Err(()) => {
                self.insert(field, messages::INVALID_NUMBER);
                None
            }
        }
    }

    /// Required decimal: missing -> `fieldRequired`, garbage -> `invalidNumber`
    pub fn required_decimal(&mut self, field: &str, raw: &str) -> f64 {
        self.require(field, raw);
        self.decimal(field, raw).unwrap_or_default()
    }

    pub fn integer<T: FromStr>(&mut self, field: &str, raw: &str) -> Option<T> {
        match parse_integer(raw) {
            Ok(value) => value,
            Err(()) => {
                self.insert(field, messages::INVALID_NUMBER);
                None
            }
        }
    }

    pub fn date(&mut self, field: &str, raw: &str) -> Option<NaiveDate> {
        match parse_date(raw) {
            Ok(value) => value,
            Err(()) => {
                self.insert(field, messages::INVALID_DATE);
                None
            }
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

pub fn parse_decimal(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    // Accept a decimal comma as well
    let normalized = raw.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(()),
    }
}

pub fn parse_integer<T: FromStr>(raw: &str) -> Result<Option<T>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>().map(Some).map_err(|_| ())
}

pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ())
}

/// Renders a decimal for a text input: `120.0` -> `"120"`, `99.5` -> `"99.5"`
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_optional_decimal(value: Option<f64>) -> String {
    value.map(format_decimal).unwrap_or_default()
}

pub fn format_optional_date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_keeps_first_error() {
        let mut errors = FieldErrors::new();
        errors.require("price", "  ");
        errors.decimal("price", "abc");
        assert_eq!(errors.get("price"), Some(messages::FIELD_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_rules() {
        let mut errors = FieldErrors::new();
        errors.email("email", "not-an-email");
        assert_eq!(errors.get("email"), Some(messages::INVALID_EMAIL));

        let mut errors = FieldErrors::new();
        errors.email("email", "");
        assert_eq!(errors.get("email"), Some(messages::EMAIL_REQUIRED));

        let mut errors = FieldErrors::new();
        errors.email("email", "agent@example.com");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(""), Ok(None));
        assert_eq!(parse_decimal("120"), Ok(Some(120.0)));
        assert_eq!(parse_decimal("99,5"), Ok(Some(99.5)));
        assert_eq!(parse_decimal("12a"), Err(()));
        assert_eq!(parse_decimal("inf"), Err(()));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-15"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 15))
        );
        assert_eq!(parse_date("15.03.2025"), Err(()));
        assert_eq!(parse_date(" "), Ok(None));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(120.0), "120");
        assert_eq!(format_decimal(99.5), "99.5");
        assert_eq!(format_optional_decimal(None), "");
    }

    #[test]
    fn test_password_rules() {
        let mut errors = FieldErrors::new();
        errors.password("password", "123");
        assert_eq!(errors.get("password"), Some(messages::PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_first_is_ordered_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", messages::FIELD_REQUIRED);
        errors.insert("name", messages::FIELD_REQUIRED);
        assert_eq!(errors.first(), Some(("name", messages::FIELD_REQUIRED)));
    }
}
