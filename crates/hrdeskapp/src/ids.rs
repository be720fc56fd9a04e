//! Date-encoded identifiers for new records.
//!
//! | Record | Format | Example |
//! |--------|--------|---------|
//! | Employee | `{UNIT}-{YY}{MM}-{SEQ:04}` | `OPS-2402-0007` |
//! | Expense | `EXP-{YY}{MM}{DD}-{SEQ:03}` | `EXP-240217-001` |
//! | Trip | `TRP-{YY}{MM}{DD}-{SEQ:03}` | `TRP-240217-012` |
//!
//! Sequence widths are minimums; larger numbers are printed in full.
//! Formatting is pure. Sequence state lives in an explicit
//! [`SequenceCounter`], so uniqueness across several creators is up to
//! whoever owns the counter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HrdeskError, Result};

const DEFAULT_UNIT: &str = "EMP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdTemplate {
    Employee { unit_code: String },
    Expense,
    Trip,
}

impl IdTemplate {
    pub fn employee(unit_code: impl Into<String>) -> Self {
        Self::Employee {
            unit_code: unit_code.into(),
        }
    }
}

pub fn format_id(date: NaiveDate, sequence: u32, template: &IdTemplate) -> String {
    match template {
        IdTemplate::Employee { unit_code } => {
            let unit = unit_code.trim();
            let unit = if unit.is_empty() {
                DEFAULT_UNIT.to_string()
            } else {
                unit.to_ascii_uppercase()
            };
            format!("{}-{}-{:04}", unit, date.format("%y%m"), sequence)
        }
        IdTemplate::Expense => format!("EXP-{}-{:03}", date.format("%y%m%d"), sequence),
        IdTemplate::Trip => format!("TRP-{}-{:03}", date.format("%y%m%d"), sequence),
    }
}

/// When a [`SequenceCounter`] starts over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceScope {
    /// Restart at 1 on each new date.
    #[default]
    Daily,
    /// Never restart.
    Global,
}

#[derive(Debug, Clone)]
pub struct SequenceCounter {
    scope: SequenceScope,
    last: u32,
    last_date: Option<NaiveDate>,
}

impl SequenceCounter {
    pub fn new(scope: SequenceScope) -> Self {
        Self {
            scope,
            last: 0,
            last_date: None,
        }
    }

    /// Resume after an already issued sequence number on `date`.
    pub fn starting_after(scope: SequenceScope, date: NaiveDate, last: u32) -> Self {
        Self {
            scope,
            last,
            last_date: Some(date),
        }
    }

    /// The next sequence number for `date`. The counter is left unchanged
    /// when it has run out.
    pub fn next(&mut self, date: NaiveDate) -> Result<u32> {
        let restart = self.scope == SequenceScope::Daily && self.last_date != Some(date);
        let next = if restart {
            1
        } else {
            self.last
                .checked_add(1)
                .ok_or(HrdeskError::SequenceExhausted(self.last))?
        };
        self.last = next;
        self.last_date = Some(date);
        Ok(next)
    }

    pub fn next_id(&mut self, date: NaiveDate, template: &IdTemplate) -> Result<String> {
        let sequence = self.next(date)?;
        Ok(format_id(date, sequence, template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::date;

    #[test]
    fn employee_ids() {
        let d = date(2024, 2, 17);
        assert_eq!(format_id(d, 7, &IdTemplate::employee("OPS")), "OPS-2402-0007");
        assert_eq!(format_id(d, 7, &IdTemplate::employee(" ops ")), "OPS-2402-0007");
        assert_eq!(format_id(d, 1, &IdTemplate::employee("")), "EMP-2402-0001");
    }

    #[test]
    fn expense_and_trip_ids() {
        let d = date(2024, 2, 17);
        assert_eq!(format_id(d, 1, &IdTemplate::Expense), "EXP-240217-001");
        assert_eq!(format_id(d, 12, &IdTemplate::Trip), "TRP-240217-012");
    }

    #[test]
    fn widths_are_minimums() {
        let d = date(2024, 2, 17);
        assert_eq!(format_id(d, 1234, &IdTemplate::Expense), "EXP-240217-1234");
        assert_eq!(format_id(d, 12345, &IdTemplate::employee("HR")), "HR-2402-12345");
    }

    #[test]
    fn daily_counter_restarts_on_new_date() {
        let mut counter = SequenceCounter::new(SequenceScope::Daily);
        let d1 = date(2024, 2, 17);
        let d2 = date(2024, 2, 18);
        assert_eq!(counter.next(d1).unwrap(), 1);
        assert_eq!(counter.next(d1).unwrap(), 2);
        assert_eq!(counter.next(d2).unwrap(), 1);
        assert_eq!(counter.next_id(d2, &IdTemplate::Trip).unwrap(), "TRP-240218-002");
    }

    #[test]
    fn global_counter_keeps_counting() {
        let mut counter = SequenceCounter::new(SequenceScope::Global);
        assert_eq!(counter.next(date(2024, 2, 17)).unwrap(), 1);
        assert_eq!(counter.next(date(2024, 2, 18)).unwrap(), 2);
    }

    #[test]
    fn resume_after_existing_sequence() {
        let d = date(2024, 2, 17);
        let mut counter = SequenceCounter::starting_after(SequenceScope::Daily, d, 4);
        assert_eq!(counter.next_id(d, &IdTemplate::Expense).unwrap(), "EXP-240217-005");
        assert_eq!(counter.next(date(2024, 2, 18)).unwrap(), 1);
    }

    #[test]
    fn exhausted_counter_errors_without_wrapping() {
        let d = date(2024, 2, 17);
        let mut counter = SequenceCounter::starting_after(SequenceScope::Global, d, u32::MAX);
        assert!(matches!(
            counter.next(d),
            Err(HrdeskError::SequenceExhausted(u32::MAX))
        ));
        assert!(counter.next_id(d, &IdTemplate::Trip).is_err());

        // a daily counter still restarts on the next date
        let mut daily = SequenceCounter::starting_after(SequenceScope::Daily, d, u32::MAX);
        assert!(daily.next(d).is_err());
        assert_eq!(daily.next(date(2024, 2, 18)).unwrap(), 1);
    }
}
