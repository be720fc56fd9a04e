use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::fields::FieldValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Reimbursed,
}

impl ExpenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Reimbursed => "reimbursed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub submitted_by: String,
    #[serde(default)]
    pub status: ExpenseStatus,
    /// Set for fuel and maintenance expenses tied to a fleet vehicle.
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            amount,
            date,
            submitted_by: String::new(),
            status: ExpenseStatus::Pending,
            vehicle_id: None,
            notes: String::new(),
        }
    }
}

impl Record for Expense {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "title" => FieldValue::text(&self.title),
            "category" => FieldValue::text(&self.category),
            "amount" => FieldValue::Number(self.amount),
            "date" => FieldValue::Date(self.date),
            "submitted_by" => FieldValue::text(&self.submitted_by),
            "status" => FieldValue::text(self.status.as_str()),
            "vehicle_id" => FieldValue::optional_text(self.vehicle_id.as_deref()),
            "notes" => FieldValue::text(&self.notes),
            _ => return None,
        };
        Some(value)
    }
}
