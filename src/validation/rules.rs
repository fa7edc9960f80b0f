use super::ValidationError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Message for a required field that is absent or of the wrong type.
pub const REQUIRED: &str = "Required";

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Parse the date formats accepted by the console: RFC 3339, `YYYY-MM-DD`,
/// and `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC).
#[must_use]
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Collects rule violations while reading fields out of a JSON object.
#[derive(Debug)]
pub struct Validator<'a> {
    body: &'a Value,
    messages: Vec<String>,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(body: &'a Value) -> Self {
        Self {
            body,
            messages: Vec::new(),
        }
    }

    fn fail(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    /// A string field of at least `min` characters.
    pub fn min_len(&mut self, field: &str, min: usize, message: &str) -> Option<String> {
        match self.body.get(field).and_then(Value::as_str) {
            Some(s) if s.chars().count() >= min => Some(s.to_string()),
            Some(_) => {
                self.fail(message);
                None
            }
            None => {
                self.fail(REQUIRED);
                None
            }
        }
    }

    /// A string field holding a plausible email address.
    pub fn email(&mut self, field: &str, message: &str) -> Option<String> {
        let Some(s) = self.body.get(field).and_then(Value::as_str) else {
            self.fail(REQUIRED);
            return None;
        };
        let valid = EMAIL_RE.as_ref().is_some_and(|re| re.is_match(s));
        if valid {
            Some(s.to_string())
        } else {
            self.fail(message);
            None
        }
    }

    /// A string field that parses with [`parse_date`]. Returns the raw string
    /// and the parsed instant.
    pub fn date(&mut self, field: &str, message: &str) -> Option<(String, DateTime<Utc>)> {
        let Some(s) = self.body.get(field).and_then(Value::as_str) else {
            self.fail(REQUIRED);
            return None;
        };
        if let Some(parsed) = parse_date(s) {
            Some((s.to_string(), parsed))
        } else {
            self.fail(message);
            None
        }
    }

    /// One of a fixed set of string values.
    pub fn one_of(
        &mut self,
        field: &str,
        allowed: &[&str],
        missing: &str,
        invalid: &str,
    ) -> Option<String> {
        match self.body.get(field) {
            None | Some(Value::Null) => {
                self.fail(missing);
                None
            }
            Some(Value::String(s)) if allowed.contains(&s.as_str()) => Some(s.clone()),
            Some(_) => {
                self.fail(invalid);
                None
            }
        }
    }

    /// A non-negative amount given as a JSON number or a numeric string.
    /// An empty string counts as missing.
    pub fn amount(
        &mut self,
        field: &str,
        required: &str,
        not_a_number: &str,
        negative: &str,
    ) -> Option<f64> {
        let number = match self.body.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(Value::Number(n)) => Some(n.as_f64()),
            Some(Value::String(s)) => Some(s.trim().parse::<f64>().ok()),
            Some(_) => Some(None),
        };
        match number {
            None => {
                self.fail(required);
                None
            }
            Some(Some(n)) if n.is_finite() => {
                if n < 0.0 {
                    self.fail(negative);
                    None
                } else {
                    Some(n)
                }
            }
            Some(_) => {
                self.fail(not_a_number);
                None
            }
        }
    }

    /// Record a cross-field violation.
    pub fn reject(&mut self, message: &str) {
        self.fail(message);
    }

    /// `Ok(value)` when no rule was violated, otherwise every message joined.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.messages.is_empty() => Ok(value),
            _ => Err(ValidationError(self.messages.join(", "))),
        }
    }
}
