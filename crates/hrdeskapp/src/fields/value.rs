//! Runtime field values and their coercions.
//!
//! Records hand out [`FieldValue`]s; the schema decides how they are read.
//! A value that cannot be read as the requested kind degrades to that kind's
//! zero (0.0 for numbers, no instant for dates, empty string for text) so a
//! single malformed record never breaks a whole view.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Runtime representation of a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    /// The record has the field but no value for it (e.g. an unset end date).
    Empty,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::text)
    }

    pub fn optional_date(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Date)
    }

    pub fn optional_timestamp(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Timestamp)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Display form, used for search matching and categorical equality.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Timestamp(t) => t.to_rfc3339(),
            FieldValue::Empty => String::new(),
        }
    }

    /// Read the value as a float. Unparsable text, dates and empties read as 0.0.
    pub fn as_number(&self) -> f64 {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        if n.is_nan() {
            0.0
        } else {
            n
        }
    }

    /// Read the value as a point in time. Returns `None` when it has no date.
    pub fn as_instant(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(d) => d.and_hms_opt(0, 0, 0),
            FieldValue::Timestamp(t) => Some(t.naive_utc()),
            FieldValue::Text(s) => parse_instant(s),
            FieldValue::Number(_) | FieldValue::Empty => None,
        }
    }

    /// Calendar date of [`as_instant`](Self::as_instant).
    pub fn as_date(&self) -> Option<NaiveDate> {
        self.as_instant().map(|instant| instant.date())
    }
}

/// Parse the date-like strings found in record data.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM[:SS]`
/// and plain `YYYY-MM-DD`.
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
