//! Shared test fixtures.

use chrono::NaiveDate;

use crate::fields::{FieldSpec, FieldValue, Schema};
use crate::model::{Employee, Record};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn employee(id: &str, name: &str, department: &str) -> Employee {
    Employee::new(id, name, department, date(2023, 1, 9))
}

/// The roster used by the attendance scenarios: E1, E2, E3.
pub fn roster() -> Vec<Employee> {
    vec![
        employee("E1", "Ada", "Engineering"),
        employee("E2", "Grace", "Operations"),
        employee("E3", "Linus", "Engineering"),
    ]
}

/// A minimal record whose date field is raw text, so tests can feed
/// malformed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub amount: f64,
    pub when: String,
}

impl Row {
    pub fn new(id: &str, name: &str, kind: &str, amount: f64, when: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            amount,
            when: when.to_string(),
        }
    }
}

impl Record for Row {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::text(&self.id)),
            "name" => Some(FieldValue::text(&self.name)),
            "kind" => Some(FieldValue::text(&self.kind)),
            "amount" => Some(FieldValue::Number(self.amount)),
            "when" => Some(FieldValue::text(&self.when)),
            _ => None,
        }
    }
}

const ROW_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("id", "ID"),
    FieldSpec::text("name", "Name").searchable(),
    FieldSpec::text("kind", "Kind").searchable().categorical(),
    FieldSpec::number("amount", "Amount"),
    FieldSpec::date("when", "When"),
];

pub const ROW_SCHEMA: Schema = Schema::new(ROW_FIELDS);
