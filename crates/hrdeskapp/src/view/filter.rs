//! Record filtering.
//!
//! A [`FilterSpec`] is what the user has typed and picked: a search term,
//! dropdown values, and a date bucket. [`FilterPredicate::build`] resolves it
//! once against a reference date and then tests records in a single pass.
//! All active conditions are ANDed.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Categorical value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// A named relative date window, or explicit bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "bucket")]
pub enum DateBucket {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
    ThisQuarter,
    /// Either bound may be omitted. `to` is an inclusive calendar date.
    Custom {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateBucket {
    /// Resolve the bucket against `today`. `All` resolves to no range at all.
    pub fn range(&self, today: NaiveDate, week_start: Weekday) -> Option<DateRange> {
        match *self {
            DateBucket::All => None,
            DateBucket::Today => Some(DateRange::new(Some(today), today.succ_opt())),
            DateBucket::ThisWeek => {
                let offset = (7 + today.weekday().num_days_from_monday()
                    - week_start.num_days_from_monday())
                    % 7;
                let start = today.checked_sub_days(Days::new(u64::from(offset)));
                let end = start.and_then(|s| s.checked_add_days(Days::new(7)));
                Some(DateRange::new(start, end))
            }
            DateBucket::ThisMonth => Some(DateRange::new(
                first_of_month(today.year(), today.month()),
                first_of_month(today.year(), today.month() + 1),
            )),
            DateBucket::ThisQuarter => {
                let first_month = (today.month() - 1) / 3 * 3 + 1;
                Some(DateRange::new(
                    first_of_month(today.year(), first_month),
                    first_of_month(today.year(), first_month + 3),
                ))
            }
            DateBucket::Custom { from, to } => {
                Some(DateRange::new(from, to.and_then(|d| d.succ_opt())))
            }
        }
    }
}

/// First day of `month` in `year`; months past 12 roll into the next year.
fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (year, month) = if month > 12 {
        (year + 1, month - 12)
    } else {
        (year, month)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Half-open date interval `[from, until)`. A missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { from, until }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| from <= date) && self.until.map_or(true, |until| date < until)
    }
}

/// The user's filter choices for one list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search_text: String,
    /// Fields the search term is matched against.
    pub searchable_fields: Vec<String>,
    /// Field → required value. [`ALL`] leaves the field unconstrained.
    pub categorical: BTreeMap<String, String>,
    /// The field a date bucket applies to. Without one, buckets are ignored.
    pub date_field: Option<String>,
    pub date_bucket: DateBucket,
    pub week_start: Weekday,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            searchable_fields: Vec::new(),
            categorical: BTreeMap::new(),
            date_field: None,
            date_bucket: DateBucket::All,
            week_start: Weekday::Mon,
        }
    }
}

impl FilterSpec {
    pub fn new<I, S>(searchable_fields: I, date_field: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            searchable_fields: searchable_fields.into_iter().map(Into::into).collect(),
            date_field: date_field.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.categorical.insert(field.into(), value.into());
        self
    }

    pub fn with_bucket(mut self, bucket: DateBucket) -> Self {
        self.date_bucket = bucket;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }
}

/// A [`FilterSpec`] resolved against a reference date, ready to test records.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPredicate {
    needle: Option<String>,
    searchable_fields: Vec<String>,
    categorical: Vec<(String, String)>,
    date: Option<(String, DateRange)>,
}

impl FilterPredicate {
    pub fn build(spec: &FilterSpec, today: NaiveDate) -> Self {
        let needle = if spec.search_text.is_empty() {
            None
        } else {
            Some(spec.search_text.to_lowercase())
        };

        let categorical = spec
            .categorical
            .iter()
            .filter(|(_, value)| value.as_str() != ALL)
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect();

        let date = match (&spec.date_field, spec.date_bucket.range(today, spec.week_start)) {
            (Some(field), Some(range)) => Some((field.clone(), range)),
            _ => None,
        };

        Self {
            needle,
            searchable_fields: spec.searchable_fields.clone(),
            categorical,
            date,
        }
    }

    /// True when no condition is active and every record passes.
    pub fn is_unconstrained(&self) -> bool {
        self.needle.is_none() && self.categorical.is_empty() && self.date.is_none()
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_categories(record) && self.matches_date(record)
    }

    fn matches_search<R: Record + ?Sized>(&self, record: &R) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        self.searchable_fields.iter().any(|field| {
            record
                .field_or_empty(field)
                .to_text()
                .to_lowercase()
                .contains(needle.as_str())
        })
    }

    // Exact and case-sensitive, unlike search.
    fn matches_categories<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.categorical
            .iter()
            .all(|(field, value)| record.field_or_empty(field).to_text() == *value)
    }

    fn matches_date<R: Record + ?Sized>(&self, record: &R) -> bool {
        let Some((field, range)) = &self.date else {
            return true;
        };
        record
            .field_or_empty(field)
            .as_date()
            .is_some_and(|date| range.contains(date))
    }
}
