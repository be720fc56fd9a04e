//! Field specifications and per-screen schemas.
//!
//! A schema is the single source of truth for how a screen's fields are read:
//! which kind of value each holds, whether free-text search looks at it, and
//! whether it can carry a categorical (dropdown) filter.

use serde::{Deserialize, Serialize};

/// The kind of value a field holds.
///
/// Declared per schema, never sniffed from the value at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Compared as case-insensitive strings.
    Text,

    /// Compared as floats; unparsable values read as 0.
    Number,

    /// Compared as instants; unparsable values sort first.
    Date,
}

/// Specification for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used by filters and sort specs (e.g. "department").
    pub name: &'static str,

    /// Column heading.
    pub label: &'static str,

    pub kind: FieldKind,

    /// Whether free-text search looks at this field.
    pub searchable: bool,

    /// Whether this field can carry an exact-match filter.
    pub categorical: bool,
}

impl FieldSpec {
    /// Create a field spec with all flags off.
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            searchable: false,
            categorical: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    /// Set the searchable flag.
    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Set the categorical flag.
    pub const fn categorical(mut self) -> Self {
        self.categorical = true;
        self
    }
}

/// An ordered set of field specs describing one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Look up a field spec by name.
    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Kind of the named field. Fields the schema does not know are text.
    pub fn kind_of(&self, name: &str) -> FieldKind {
        self.get(name).map_or(FieldKind::Text, |spec| spec.kind)
    }

    /// Names of the fields free-text search looks at.
    pub fn searchable(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|spec| spec.searchable)
            .map(|spec| spec.name)
    }

    /// Names of the fields that accept categorical filters.
    pub fn categorical(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|spec| spec.categorical)
            .map(|spec| spec.name)
    }
}
