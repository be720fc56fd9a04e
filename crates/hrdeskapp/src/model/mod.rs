//! # Domain Model
//!
//! The record types behind the dashboard's six list screens, and the
//! [`Record`] trait through which the view pipeline reads them.
//!
//! | Screen | Record | Identifier |
//! |--------|--------|------------|
//! | Employees | [`Employee`] | unit-coded employee id |
//! | Leave | [`LeaveRequest`] | request id |
//! | Expenses | [`Expense`] | date-coded expense id |
//! | Trips | [`Trip`] | date-coded trip number |
//! | Vehicles | [`Vehicle`] | fleet id |
//! | Attendance | [`AttendanceRow`] | employee id (one row per employee per date) |
//!
//! Records are plain data. Status fields are closed enums whose string form
//! (`as_str`) is what categorical filters compare against, verbatim.

use crate::fields::FieldValue;

mod attendance;
mod employee;
mod expense;
mod leave;
mod trip;
mod vehicle;

pub use attendance::{AttendanceRecord, AttendanceRow, AttendanceStatus};
pub use employee::{Employee, EmployeeStatus};
pub use expense::{Expense, ExpenseStatus};
pub use leave::{LeaveRequest, LeaveStatus};
pub use trip::{Trip, TripStatus};
pub use vehicle::{Vehicle, VehicleStatus};

/// A domain item the view pipeline can filter, sort and page.
pub trait Record {
    /// Stable identifier; also the sort tie-breaker.
    fn id(&self) -> &str;

    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    fn field_or_empty(&self, name: &str) -> FieldValue {
        self.field(name).unwrap_or(FieldValue::Empty)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        (**self).field(name)
    }
}
