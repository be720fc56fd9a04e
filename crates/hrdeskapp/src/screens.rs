//! # Screens
//!
//! The six list screens share one pipeline and differ only in the data below:
//! the record schema, which field date buckets apply to, and where sorting
//! starts.
//!
//! | Screen | Date field | Default sort | New column starts |
//! |--------|------------|--------------|-------------------|
//! | `employees` | `join_date` | `name` | ascending |
//! | `leave` | `start_date` | `applied_on` | descending |
//! | `expenses` | `date` | `date` | descending |
//! | `trips` | `start_date` | `start_date` | descending |
//! | `vehicles` | `last_service` | `registration` | ascending |
//! | `attendance` | none (one date per roster) | `employee_name` | ascending |
//!
//! Screens whose natural order is "newest first" reset a newly clicked column
//! to descending; the directory-like screens reset to ascending.

use crate::error::{HrdeskError, Result};
use crate::fields::{FieldSpec, Schema};
use crate::view::{FilterSpec, SortOrder, SortSpec, ViewPipeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Identifier used by clients (e.g. `"expenses"`).
    pub name: &'static str,
    pub title: &'static str,
    pub schema: Schema,
    pub date_field: Option<&'static str>,
    pub default_sort: &'static str,
    pub default_order: SortOrder,
}

impl Screen {
    /// A fresh filter: no search, no dropdowns, all dates.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::new(self.schema.searchable(), self.date_field)
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.default_sort, self.default_order)
    }

    pub fn pipeline(&self) -> ViewPipeline {
        ViewPipeline::new(self.schema)
    }
}

const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("id", "ID").searchable(),
    FieldSpec::text("name", "Name").searchable(),
    FieldSpec::text("email", "Email").searchable(),
    FieldSpec::text("phone", "Phone").searchable(),
    FieldSpec::text("department", "Department").categorical(),
    FieldSpec::text("designation", "Designation").searchable(),
    FieldSpec::text("unit", "Unit").categorical(),
    FieldSpec::text("status", "Status").categorical(),
    FieldSpec::date("join_date", "Joined"),
    FieldSpec::number("salary", "Salary"),
];

const LEAVE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("id", "ID").searchable(),
    FieldSpec::text("employee_id", "Employee ID").searchable(),
    FieldSpec::text("employee_name", "Employee").searchable(),
    FieldSpec::text("leave_type", "Type").categorical(),
    FieldSpec::date("start_date", "From"),
    FieldSpec::date("end_date", "To"),
    FieldSpec::number("days", "Days"),
    FieldSpec::text("status", "Status").categorical(),
    FieldSpec::date("applied_on", "Applied"),
    FieldSpec::text("approved_by", "Approved by"),
];

const EXPENSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("id", "ID").searchable(),
    FieldSpec::text("title", "Title").searchable(),
    FieldSpec::text("category", "Category").categorical(),
    FieldSpec::number("amount", "Amount"),
    FieldSpec::date("date", "Date"),
    FieldSpec::text("submitted_by", "Submitted by").searchable(),
    FieldSpec::text("status", "Status").categorical(),
    FieldSpec::text("vehicle_id", "Vehicle").searchable(),
];

const TRIP_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("id", "Trip").searchable(),
    FieldSpec::text("vehicle_id", "Vehicle").searchable().categorical(),
    FieldSpec::text("driver", "Driver").searchable(),
    FieldSpec::text("origin", "From").searchable(),
    FieldSpec::text("destination", "To").searchable(),
    FieldSpec::date("start_date", "Start"),
    FieldSpec::date("end_date", "End"),
    FieldSpec::number("distance_km", "Km"),
    FieldSpec::text("purpose", "Purpose").searchable(),
    FieldSpec::text("status", "Status").categorical(),
];

const VEHICLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("id", "ID").searchable(),
    FieldSpec::text("registration", "Registration").searchable(),
    FieldSpec::text("make", "Make").searchable(),
    FieldSpec::text("model", "Model").searchable(),
    FieldSpec::text("vehicle_type", "Type").categorical(),
    FieldSpec::text("unit", "Unit").categorical(),
    FieldSpec::text("status", "Status").categorical(),
    FieldSpec::text("fuel_type", "Fuel").categorical(),
    FieldSpec::number("year", "Year"),
    FieldSpec::number("mileage", "Mileage"),
    FieldSpec::date("last_service", "Last service"),
];

const ATTENDANCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("employee_id", "ID").searchable(),
    FieldSpec::text("employee_name", "Employee").searchable(),
    FieldSpec::text("department", "Department").categorical(),
    FieldSpec::text("status", "Status").categorical(),
    FieldSpec::text("editable", "Editable"),
    FieldSpec::text("marked_by", "Marked by"),
];

pub static EMPLOYEES: Screen = Screen {
    name: "employees",
    title: "Employees",
    schema: Schema::new(EMPLOYEE_FIELDS),
    date_field: Some("join_date"),
    default_sort: "name",
    default_order: SortOrder::Asc,
};

pub static LEAVE_REQUESTS: Screen = Screen {
    name: "leave",
    title: "Leave requests",
    schema: Schema::new(LEAVE_FIELDS),
    date_field: Some("start_date"),
    default_sort: "applied_on",
    default_order: SortOrder::Desc,
};

pub static EXPENSES: Screen = Screen {
    name: "expenses",
    title: "Expenses",
    schema: Schema::new(EXPENSE_FIELDS),
    date_field: Some("date"),
    default_sort: "date",
    default_order: SortOrder::Desc,
};

pub static TRIPS: Screen = Screen {
    name: "trips",
    title: "Trips",
    schema: Schema::new(TRIP_FIELDS),
    date_field: Some("start_date"),
    default_sort: "start_date",
    default_order: SortOrder::Desc,
};

pub static VEHICLES: Screen = Screen {
    name: "vehicles",
    title: "Vehicles",
    schema: Schema::new(VEHICLE_FIELDS),
    date_field: Some("last_service"),
    default_sort: "registration",
    default_order: SortOrder::Asc,
};

pub static ATTENDANCE: Screen = Screen {
    name: "attendance",
    title: "Attendance",
    schema: Schema::new(ATTENDANCE_FIELDS),
    date_field: None,
    default_sort: "employee_name",
    default_order: SortOrder::Asc,
};

pub static SCREENS: &[&Screen] = &[
    &EMPLOYEES,
    &LEAVE_REQUESTS,
    &EXPENSES,
    &TRIPS,
    &VEHICLES,
    &ATTENDANCE,
];

/// Look up a screen by name.
pub fn get_screen(name: &str) -> Result<&'static Screen> {
    SCREENS
        .iter()
        .copied()
        .find(|screen| screen.name == name)
        .ok_or_else(|| HrdeskError::UnknownScreen(name.to_string()))
}
