//! # Field System
//!
//! Every list screen works over records with a fixed set of named fields.
//! Rather than reading fields ad hoc per screen, the field system provides:
//!
//! - **Kinds**: what a field holds (text, number, date)
//! - **Specs**: per-field metadata (searchable, categorical)
//! - **Schemas**: the field set of one record type
//! - **Values**: the runtime value a record reports for a field
//!
//! ## Field Kinds
//!
//! | Kind | Examples | Compared as |
//! |------|----------|-------------|
//! | `Text` | `name`, `department`, `status` | case-insensitive string |
//! | `Number` | `amount`, `salary`, `mileage` | float (unparsable → 0) |
//! | `Date` | `join_date`, `start_date` | instant (unparsable → earliest) |
//!
//! ## Usage
//!
//! ```ignore
//! let kind = EMPLOYEES.schema.kind_of("join_date");
//! let value = employee.field("join_date").unwrap_or(FieldValue::Empty);
//! let when = value.as_instant();
//! ```

mod spec;
mod value;

pub use spec::{FieldKind, FieldSpec, Schema};
pub use value::{parse_instant, FieldValue};
