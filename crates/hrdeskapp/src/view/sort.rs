use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Orient an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// The active sort column and direction of a list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
    /// Direction a newly selected column starts in.
    pub reset_order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
            reset_order: order,
        }
    }

    pub fn with_reset_order(mut self, order: SortOrder) -> Self {
        self.reset_order = order;
        self
    }

    /// Header click: the same column flips direction, a new column starts
    /// over in `reset_order`.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.order = self.order.reversed();
        } else {
            self.field = field.to_string();
            self.order = self.reset_order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_same_field_flips() {
        let mut spec = SortSpec::new("name", SortOrder::Asc);
        spec.toggle("name");
        assert_eq!(spec.order, SortOrder::Desc);
        spec.toggle("name");
        assert_eq!(spec.order, SortOrder::Asc);
    }

    #[test]
    fn toggle_new_field_resets_to_screen_default() {
        let mut spec = SortSpec::new("date", SortOrder::Desc);
        spec.toggle("date");
        assert_eq!(spec.order, SortOrder::Asc);

        spec.toggle("amount");
        assert_eq!(spec.field, "amount");
        assert_eq!(spec.order, SortOrder::Desc);
    }

    #[test]
    fn reset_order_can_differ_from_initial_order() {
        let mut spec = SortSpec::new("name", SortOrder::Desc).with_reset_order(SortOrder::Asc);
        spec.toggle("department");
        assert_eq!(spec.order, SortOrder::Asc);
    }

    #[test]
    fn apply_orients_comparisons() {
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Desc.apply(Ordering::Equal), Ordering::Equal);
    }
}
