use chrono::{Days, NaiveDate};
use hrdeskapp::config::HrdeskConfig;
use hrdeskapp::model::{Expense, Record};
use hrdeskapp::screens::EXPENSES;
use hrdeskapp::session::ListState;
use hrdeskapp::view::{
    DateBucket, FilterSpec, PageSize, PageState, SortOrder, SortSpec, ViewPipeline, ViewResult,
    PAGE_SIZES,
};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 17).unwrap()
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("travel".to_string()),
        Just("meals".to_string()),
        Just("fuel".to_string()),
    ]
}

/// Expenses with small amount and date ranges so ties are common.
fn expenses_strategy(max: usize) -> impl Strategy<Value = Vec<Expense>> {
    proptest::collection::vec((category_strategy(), 0u32..20, 0u64..60), 0..max).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (category, amount, offset))| {
                    let date = today() - Days::new(offset);
                    Expense::new(
                        format!("X{:03}", i),
                        format!("Item {}", amount % 7),
                        category,
                        f64::from(amount),
                        date,
                    )
                })
                .collect()
        },
    )
}

fn page_size_strategy() -> impl Strategy<Value = PageSize> {
    proptest::sample::select(PAGE_SIZES.to_vec()).prop_map(|n| PageSize::new(n).unwrap())
}

fn sort_field_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(vec!["amount", "date", "title", "category", "id"])
}

fn whole(records: &[Expense], sort: &SortSpec) -> ViewResult<Expense> {
    let pipeline = ViewPipeline::new(EXPENSES.schema);
    let page = PageState::new(PageSize::new(100).unwrap());
    pipeline.apply(records, &FilterSpec::default(), sort, &page, today())
}

fn ids(result: &ViewResult<Expense>) -> Vec<String> {
    result.items.iter().map(|e| e.id.clone()).collect()
}

proptest! {
    #[test]
    fn apply_is_idempotent(
        records in expenses_strategy(60),
        field in sort_field_strategy(),
        size in page_size_strategy(),
        page in 1usize..10,
    ) {
        let pipeline = ViewPipeline::new(EXPENSES.schema);
        let filter = EXPENSES.filter_spec().with_category("category", "travel");
        let sort = SortSpec::new(field, SortOrder::Desc);
        let mut state = PageState::new(size);
        state.set_page(page);

        let first = pipeline.apply(&records, &filter, &sort, &state, today());
        let second = pipeline.apply(&records, &filter, &sort, &state, today());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn page_counts_hold(
        records in expenses_strategy(120),
        size in page_size_strategy(),
        page in 0usize..20,
    ) {
        let pipeline = ViewPipeline::new(EXPENSES.schema);
        let mut state = PageState::new(size);
        state.set_page(page);

        let result = pipeline.apply(
            &records,
            &FilterSpec::default(),
            &EXPENSES.sort_spec(),
            &state,
            today(),
        );
        let expected_pages = std::cmp::max(1, records.len().div_ceil(size.get()));
        prop_assert_eq!(result.total_count, records.len());
        prop_assert_eq!(result.total_pages, expected_pages);
        prop_assert!(result.page >= 1 && result.page <= result.total_pages);
        prop_assert!(result.items.len() <= size.get());
        if result.page < result.total_pages {
            prop_assert_eq!(result.items.len(), size.get());
        }
    }

    #[test]
    fn pages_partition_the_filtered_set(
        records in expenses_strategy(80),
        size in page_size_strategy(),
    ) {
        let pipeline = ViewPipeline::new(EXPENSES.schema);
        let filter = EXPENSES.filter_spec().with_bucket(DateBucket::ThisMonth);
        let sort = EXPENSES.sort_spec();

        let all = whole(&records, &sort);
        let expected: Vec<String> = all
            .items
            .iter()
            .filter(|e| e.date >= NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .map(|e| e.id.clone())
            .collect();

        let mut state = PageState::new(size);
        let mut seen = Vec::new();
        let first = pipeline.apply(&records, &filter, &sort, &state, today());
        for page in 1..=first.total_pages {
            state.set_page(page);
            let result = pipeline.apply(&records, &filter, &sort, &state, today());
            seen.extend(ids(&result));
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys(
        amounts in proptest::collection::btree_set(0u32..1000, 0..40),
    ) {
        // Ids deliberately out of step with amounts.
        let records: Vec<Expense> = amounts
            .iter()
            .rev()
            .enumerate()
            .map(|(i, amount)| {
                Expense::new(format!("X{:03}", i), "Item", "travel", f64::from(*amount), today())
            })
            .collect();

        let asc = ids(&whole(&records, &SortSpec::new("amount", SortOrder::Asc)));
        let mut desc = ids(&whole(&records, &SortSpec::new("amount", SortOrder::Desc)));
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn ties_break_by_id_ascending_in_both_directions(
        records in expenses_strategy(60),
        field in sort_field_strategy(),
        descending in any::<bool>(),
    ) {
        let order = if descending { SortOrder::Desc } else { SortOrder::Asc };
        let result = whole(&records, &SortSpec::new(field, order));
        let kind = EXPENSES.schema.kind_of(field);

        for pair in result.items.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let same_key = match kind {
                hrdeskapp::fields::FieldKind::Number => {
                    a.field_or_empty(field).as_number() == b.field_or_empty(field).as_number()
                }
                hrdeskapp::fields::FieldKind::Date => {
                    a.field_or_empty(field).as_instant() == b.field_or_empty(field).as_instant()
                }
                hrdeskapp::fields::FieldKind::Text => {
                    a.field_or_empty(field).to_text().to_lowercase()
                        == b.field_or_empty(field).to_text().to_lowercase()
                }
            };
            if same_key {
                prop_assert!(a.id < b.id, "{} before {} on equal {}", a.id, b.id, field);
            }
        }
    }

    #[test]
    fn input_order_does_not_matter(
        records in expenses_strategy(40).prop_shuffle(),
        field in sort_field_strategy(),
    ) {
        let mut canonical = records.clone();
        canonical.sort_by(|a, b| a.id.cmp(&b.id));

        let sort = SortSpec::new(field, SortOrder::Desc);
        prop_assert_eq!(ids(&whole(&records, &sort)), ids(&whole(&canonical, &sort)));
    }

    #[test]
    fn filter_changes_return_to_first_page(
        page in 2usize..50,
        search in "[a-z]{1,6}",
        category in category_strategy(),
    ) {
        let mut state = ListState::for_screen(&EXPENSES, &HrdeskConfig::default());

        state.set_page(page);
        state.set_search(search);
        prop_assert_eq!(state.page().page(), 1);

        state.set_page(page);
        state.set_category("category", category);
        prop_assert_eq!(state.page().page(), 1);

        state.set_page(page);
        state.set_date_bucket(DateBucket::ThisQuarter);
        prop_assert_eq!(state.page().page(), 1);
    }
}
