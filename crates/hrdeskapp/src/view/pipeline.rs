use chrono::NaiveDate;
use tracing::debug;

use super::compare::FieldComparator;
use super::filter::{FilterPredicate, FilterSpec};
use super::page::{paginate, PageState, ViewResult};
use super::sort::SortSpec;
use crate::fields::Schema;
use crate::generation::{Generation, Stamped};
use crate::model::Record;

/// Filter, then sort, then paginate, for one record schema.
///
/// `apply` is a pure function of its inputs: sorting only ever sees records
/// that passed the filter, and pagination only slices the sorted sequence.
#[derive(Debug, Clone, Copy)]
pub struct ViewPipeline {
    comparator: FieldComparator,
}

impl ViewPipeline {
    pub fn new(schema: Schema) -> Self {
        Self {
            comparator: FieldComparator::new(schema),
        }
    }

    pub fn apply<R: Record + Clone>(
        &self,
        records: &[R],
        filter: &FilterSpec,
        sort: &SortSpec,
        page: &PageState,
        today: NaiveDate,
    ) -> ViewResult<R> {
        let predicate = FilterPredicate::build(filter, today);
        let filtered: Vec<&R> = records.iter().filter(|r| predicate.matches(*r)).collect();
        let sorted = self.comparator.sorted(filtered, sort);
        let result = paginate(sorted, page).cloned();

        debug!(
            total = records.len(),
            matched = result.total_count,
            page = result.page,
            pages = result.total_pages,
            sort = %sort.field,
            "applied view"
        );
        result
    }

    /// [`apply`](Self::apply), tagged with the request generation that
    /// produced `records`.
    pub fn apply_stamped<R: Record + Clone>(
        &self,
        generation: Generation,
        records: &[R],
        filter: &FilterSpec,
        sort: &SortSpec,
        page: &PageState,
        today: NaiveDate,
    ) -> Stamped<ViewResult<R>> {
        Stamped::new(generation, self.apply(records, filter, sort, page, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{date, Row, ROW_SCHEMA};
    use crate::generation::GenerationCounter;
    use crate::view::filter::DateBucket;
    use crate::view::page::PageSize;
    use crate::view::sort::SortOrder;

    fn rows() -> Vec<Row> {
        vec![
            Row::new("r1", "Delta", "ops", 40.0, "2024-02-12"),
            Row::new("r2", "alpha", "hr", 10.0, "2024-02-17"),
            Row::new("r3", "Charlie", "ops", 30.0, "2024-01-30"),
            Row::new("r4", "bravo", "ops", 20.0, "2024-02-16"),
            Row::new("r5", "Echo", "hr", 50.0, "bad date"),
        ]
    }

    fn ids(result: &ViewResult<Row>) -> Vec<&str> {
        result.items.iter().map(|r| r.id.as_str()).collect()
    }

    fn page(n: usize) -> PageState {
        let mut state = PageState::new(PageSize::new(10).unwrap());
        state.set_page(n);
        state
    }

    #[test]
    fn filter_then_sort_then_page() {
        let pipeline = ViewPipeline::new(ROW_SCHEMA);
        let filter = FilterSpec::new(["name"], Some("when"))
            .with_category("kind", "ops")
            .with_bucket(DateBucket::ThisMonth);
        let sort = SortSpec::new("name", SortOrder::Asc);

        let result = pipeline.apply(&rows(), &filter, &sort, &page(1), date(2024, 2, 17));
        assert_eq!(ids(&result), vec!["r4", "r1"]);
        assert_eq!(result.total_count, 2);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn numeric_sort_descending() {
        let pipeline = ViewPipeline::new(ROW_SCHEMA);
        let sort = SortSpec::new("amount", SortOrder::Desc);
        let result = pipeline.apply(
            &rows(),
            &FilterSpec::default(),
            &sort,
            &page(1),
            date(2024, 2, 17),
        );
        assert_eq!(ids(&result), vec!["r5", "r1", "r3", "r4", "r2"]);
    }

    #[test]
    fn empty_collection() {
        let pipeline = ViewPipeline::new(ROW_SCHEMA);
        let result = pipeline.apply::<Row>(
            &[],
            &FilterSpec::default(),
            &SortSpec::new("name", SortOrder::Asc),
            &page(4),
            date(2024, 2, 17),
        );
        assert!(result.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 1);
    }

    #[test]
    fn stamped_results_can_be_discarded() {
        let pipeline = ViewPipeline::new(ROW_SCHEMA);
        let mut counter = GenerationCounter::new();
        let stale = counter.next();
        let fresh = counter.next();
        let filter = FilterSpec::default();
        let sort = SortSpec::new("name", SortOrder::Asc);
        let today = date(2024, 2, 17);

        let late = pipeline.apply_stamped(stale, &rows(), &filter, &sort, &page(1), today);
        let current = pipeline.apply_stamped(fresh, &rows()[..2], &filter, &sort, &page(1), today);

        assert!(counter.accept(late).is_none());
        assert_eq!(counter.accept(current).map(|r| r.total_count), Some(2));
    }
}
