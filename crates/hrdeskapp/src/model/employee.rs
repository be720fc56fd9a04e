use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::fields::FieldValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub department: String,
    #[serde(default)]
    pub designation: String,
    /// Organizational unit code, embedded in generated employee ids.
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            department: department.into(),
            designation: String::new(),
            unit: String::new(),
            status: EmployeeStatus::Active,
            join_date,
            salary: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "name" => FieldValue::text(&self.name),
            "email" => FieldValue::text(&self.email),
            "phone" => FieldValue::text(&self.phone),
            "department" => FieldValue::text(&self.department),
            "designation" => FieldValue::text(&self.designation),
            "unit" => FieldValue::text(&self.unit),
            "status" => FieldValue::text(self.status.as_str()),
            "join_date" => FieldValue::Date(self.join_date),
            "salary" => FieldValue::Number(self.salary),
            _ => return None,
        };
        Some(value)
    }
}
