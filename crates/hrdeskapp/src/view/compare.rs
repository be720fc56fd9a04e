//! Schema-driven field ordering.
//!
//! Each sort reads one [`SortKey`] per record up front, then orders by that
//! key and finally by record id, so every sort is a deterministic total
//! order even when many records share a value.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use super::sort::SortSpec;
use crate::fields::{FieldKind, Schema};
use crate::model::Record;

/// A field value read for comparison under its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Lowercased text.
    Text(String),
    Number(f64),
    /// `None` (missing or unparsable) sorts before every real instant.
    Instant(Option<NaiveDateTime>),
}

impl SortKey {
    pub fn read<R: Record + ?Sized>(record: &R, field: &str, kind: FieldKind) -> Self {
        let value = record.field_or_empty(field);
        match kind {
            FieldKind::Text => SortKey::Text(value.to_text().to_lowercase()),
            FieldKind::Number => {
                let n = value.as_number();
                // -0.0 and 0.0 must tie
                SortKey::Number(if n == 0.0 { 0.0 } else { n })
            }
            FieldKind::Date => SortKey::Instant(value.as_instant()),
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Instant(a), SortKey::Instant(b)) => a.cmp(b),
            // Keys of one sort are read under one kind
            _ => Ordering::Equal,
        }
    }
}

/// Orders records by a named field, reading it as the schema declares.
#[derive(Debug, Clone, Copy)]
pub struct FieldComparator {
    schema: Schema,
}

impl FieldComparator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn key<R: Record + ?Sized>(&self, record: &R, field: &str) -> SortKey {
        SortKey::read(record, field, self.schema.kind_of(field))
    }

    /// Ascending comparison of one field, without tie-break.
    pub fn compare<R: Record + ?Sized>(&self, a: &R, b: &R, field: &str) -> Ordering {
        self.key(a, field).compare(&self.key(b, field))
    }

    /// Sort by `spec`, breaking ties by ascending id whatever the direction.
    pub fn sorted<'r, R: Record + ?Sized>(&self, records: Vec<&'r R>, spec: &SortSpec) -> Vec<&'r R> {
        let mut keyed: Vec<(SortKey, &'r R)> = records
            .into_iter()
            .map(|record| (self.key(record, &spec.field), record))
            .collect();

        keyed.sort_by(|(key_a, a), (key_b, b)| {
            spec.order
                .apply(key_a.compare(key_b))
                .then_with(|| a.id().cmp(b.id()))
        });

        keyed.into_iter().map(|(_, record)| record).collect()
    }
}
