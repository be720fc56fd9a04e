use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Record;
use crate::fields::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
    /// Derived from approved leave; never marked by hand.
    OnLeave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::HalfDay => "half_day",
            Self::OnLeave => "on_leave",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "late" => Some(Self::Late),
            "half_day" => Some(Self::HalfDay),
            "on_leave" => Some(Self::OnLeave),
            _ => None,
        }
    }
}

/// A manually marked attendance entry for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// `{employee_id}@{date}`; one entry per employee per date.
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub marked_by: String,
    pub marked_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn record_id(employee_id: &str, date: NaiveDate) -> String {
        format!("{}@{}", employee_id, date.format("%Y-%m-%d"))
    }
}

/// One roster line on the attendance screen.
///
/// The row's id is the employee id, so the roster sorts and pages like any
/// other screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub editable: bool,
    pub marked_by: Option<String>,
    pub marked_at: Option<DateTime<Utc>>,
}

impl Record for AttendanceRow {
    fn id(&self) -> &str {
        &self.employee_id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" | "employee_id" => FieldValue::text(&self.employee_id),
            "employee_name" => FieldValue::text(&self.employee_name),
            "department" => FieldValue::text(&self.department),
            "date" => FieldValue::Date(self.date),
            "status" => FieldValue::text(self.status.as_str()),
            "editable" => FieldValue::text(if self.editable { "yes" } else { "no" }),
            "marked_by" => FieldValue::optional_text(self.marked_by.as_deref()),
            "marked_at" => FieldValue::optional_timestamp(self.marked_at),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_loose_spellings() {
        assert_eq!(AttendanceStatus::parse("Absent"), Some(AttendanceStatus::Absent));
        assert_eq!(AttendanceStatus::parse("half-day"), Some(AttendanceStatus::HalfDay));
        assert_eq!(AttendanceStatus::parse(" on_leave "), Some(AttendanceStatus::OnLeave));
        assert_eq!(AttendanceStatus::parse("sleeping"), None);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::HalfDay,
            AttendanceStatus::OnLeave,
        ] {
            assert_eq!(AttendanceStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn record_id_is_employee_at_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
        assert_eq!(AttendanceRecord::record_id("E1", date), "E1@2024-02-07");
    }
}
