use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::error::{HrdeskError, Result};
use crate::fields::FieldValue;
use crate::provider::CurrentUser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    /// Free-form leave category ("annual", "sick", ...).
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    pub applied_on: NaiveDate,
    #[serde(default)]
    pub approved_by: Option<String>,
}

impl LeaveRequest {
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        leave_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            employee_name: String::new(),
            leave_type: leave_type.into(),
            start_date,
            end_date,
            reason: String::new(),
            status: LeaveStatus::Pending,
            applied_on: start_date,
            approved_by: None,
        }
    }

    /// Inclusive length in calendar days. Inverted ranges count as zero.
    pub fn days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }

    /// Whether `date` falls inside `[start_date, end_date]`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Approve a pending request, stamping the approver.
    pub fn approve(&mut self, actor: &CurrentUser) -> Result<()> {
        self.decide(LeaveStatus::Approved, actor)
    }

    /// Reject a pending request, stamping who decided.
    pub fn reject(&mut self, actor: &CurrentUser) -> Result<()> {
        self.decide(LeaveStatus::Rejected, actor)
    }

    fn decide(&mut self, status: LeaveStatus, actor: &CurrentUser) -> Result<()> {
        if self.status != LeaveStatus::Pending {
            return Err(HrdeskError::InvalidOperation(format!(
                "leave request {} is already {}",
                self.id,
                self.status.as_str()
            )));
        }
        self.status = status;
        self.approved_by = Some(actor.name.clone());
        Ok(())
    }
}

impl Record for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "employee_id" => FieldValue::text(&self.employee_id),
            "employee_name" => FieldValue::text(&self.employee_name),
            "leave_type" => FieldValue::text(&self.leave_type),
            "start_date" => FieldValue::Date(self.start_date),
            "end_date" => FieldValue::Date(self.end_date),
            "days" => FieldValue::Number(self.days() as f64),
            "reason" => FieldValue::text(&self.reason),
            "status" => FieldValue::text(self.status.as_str()),
            "applied_on" => FieldValue::Date(self.applied_on),
            "approved_by" => FieldValue::optional_text(self.approved_by.as_deref()),
            _ => return None,
        };
        Some(value)
    }
}
