//! # Session State
//!
//! What a screen remembers while it is open. Nothing here outlives the
//! session: navigating away drops it, and reopening starts from the screen's
//! defaults.
//!
//! - [`ListState`]: filter, sort and page cursor for one list screen. Any
//!   change to the filter or page size sends the cursor back to page 1.
//! - [`AttendanceBoard`]: the attendance screen. It tracks the selected date,
//!   the reconciliation for that date, and manual marks not yet saved. Fetches
//!   are stamped with a [`Generation`] so a slow response for an old date
//!   cannot overwrite the current one.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::HrdeskConfig;
use crate::error::Result;
use crate::generation::{Generation, GenerationCounter};
use crate::model::{AttendanceRecord, AttendanceRow, AttendanceStatus, Employee, Record};
use crate::provider::CurrentUser;
use crate::reconcile::{
    override_status, reconcile, AttendanceSummary, LeaveWindow, Reconciliation,
};
use crate::screens::Screen;
use crate::view::{DateBucket, FilterSpec, PageSize, PageState, SortSpec, ViewPipeline, ViewResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListState {
    filter: FilterSpec,
    sort: SortSpec,
    page: PageState,
}

impl ListState {
    /// Screen defaults, with page size and week start from `config`.
    pub fn for_screen(screen: &Screen, config: &HrdeskConfig) -> Self {
        Self {
            filter: screen.filter_spec().with_week_start(config.week_start()),
            sort: screen.sort_spec(),
            page: PageState::new(config.page_size()),
        }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.filter.search_text != text {
            self.filter.search_text = text;
            self.page.reset();
        }
    }

    /// Set a dropdown filter. [`ALL`](crate::view::ALL) clears it.
    pub fn set_category(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if self.filter.categorical.get(&field) != Some(&value) {
            self.filter.categorical.insert(field, value);
            self.page.reset();
        }
    }

    pub fn clear_categories(&mut self) {
        if !self.filter.categorical.is_empty() {
            self.filter.categorical.clear();
            self.page.reset();
        }
    }

    pub fn set_date_bucket(&mut self, bucket: DateBucket) {
        if self.filter.date_bucket != bucket {
            self.filter.date_bucket = bucket;
            self.page.reset();
        }
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page.set_page_size(page_size);
    }

    /// Request a page. The next [`view`](Self::view) clamps it.
    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    /// Header click on `field`. The page cursor stays where it is.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    /// Run the pipeline and remember the page it settled on.
    pub fn view<R: Record + Clone>(
        &mut self,
        pipeline: &ViewPipeline,
        records: &[R],
        today: NaiveDate,
    ) -> ViewResult<R> {
        let result = pipeline.apply(records, &self.filter, &self.sort, &self.page, today);
        self.page.set_page_within(result.page, result.total_pages);
        result
    }
}

/// State of the attendance screen for one session.
#[derive(Debug)]
pub struct AttendanceBoard {
    today: NaiveDate,
    generations: GenerationCounter,
    roster: Vec<Employee>,
    reconciliation: Reconciliation,
    overrides: BTreeMap<String, AttendanceRecord>,
}

impl AttendanceBoard {
    /// A board showing `today`, empty until the first
    /// [`apply_leaves`](Self::apply_leaves).
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            generations: GenerationCounter::new(),
            roster: Vec::new(),
            reconciliation: Reconciliation::empty(today, today),
            overrides: BTreeMap::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.reconciliation.date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    /// Switch to `date` and start a fetch for it.
    ///
    /// Unsaved marks belong to the previous date and are dropped.
    pub fn select_date(&mut self, date: NaiveDate) -> Generation {
        self.discard_overrides("date changed");
        self.reconciliation = Reconciliation::empty(date, self.today);
        self.generations.next()
    }

    /// Start a fresh fetch for the current date.
    pub fn begin_refresh(&mut self) -> Generation {
        self.discard_overrides("roster refreshed");
        self.generations.next()
    }

    /// Install the roster and leave fetched under `generation`.
    ///
    /// Returns `false`, changing nothing, when a newer fetch has started since.
    pub fn apply_leaves(
        &mut self,
        generation: Generation,
        roster: Vec<Employee>,
        leaves: &[LeaveWindow],
    ) -> bool {
        if !self.generations.is_current(generation) {
            debug!(
                stale = generation.value(),
                current = self.generations.current().value(),
                "ignoring stale attendance fetch"
            );
            return false;
        }
        self.reconciliation = reconcile(&roster, leaves, self.date(), self.today);
        self.roster = roster;
        true
    }

    /// Mark one employee, replacing any earlier unsaved mark for them.
    pub fn mark(
        &mut self,
        employee_id: &str,
        status: AttendanceStatus,
        actor: &CurrentUser,
        at: DateTime<Utc>,
    ) -> Result<&AttendanceRecord> {
        let record = override_status(employee_id, status, &self.reconciliation, actor, at)?;
        let slot = match self.overrides.entry(employee_id.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(record);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(record),
        };
        Ok(slot)
    }

    /// Unsaved marks, in employee id order.
    pub fn pending(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.overrides.values()
    }

    /// Hand unsaved marks to a save collaborator.
    pub fn take_pending(&mut self) -> Vec<AttendanceRecord> {
        std::mem::take(&mut self.overrides).into_values().collect()
    }

    /// Roster rows with unsaved marks applied, ready for the pipeline.
    pub fn rows(&self) -> Vec<AttendanceRow> {
        self.roster
            .iter()
            .filter_map(|employee| {
                let default = self.reconciliation.get(&employee.id)?;
                let mark = self.overrides.get(&employee.id);
                Some(AttendanceRow {
                    employee_id: employee.id.clone(),
                    employee_name: employee.name.clone(),
                    department: employee.department.clone(),
                    date: default.date,
                    status: mark.map_or(default.status, |m| m.status),
                    editable: default.editable,
                    marked_by: mark.map(|m| m.marked_by.clone()),
                    marked_at: mark.map(|m| m.marked_at),
                })
            })
            .collect()
    }

    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::from_rows(self.rows().iter().map(|row| (row.status, row.editable)))
    }

    fn discard_overrides(&mut self, reason: &str) {
        if !self.overrides.is_empty() {
            warn!(
                count = self.overrides.len(),
                date = %self.date(),
                reason,
                "discarding unsaved attendance marks"
            );
            self.overrides.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{date, roster};
    use crate::screens::{ATTENDANCE, EXPENSES};
    use crate::view::{SortOrder, ALL};

    fn today() -> NaiveDate {
        date(2024, 2, 17)
    }

    fn e1_leave() -> Vec<LeaveWindow> {
        vec![LeaveWindow::approved("E1", date(2024, 2, 15), date(2024, 2, 20))]
    }

    fn hr() -> CurrentUser {
        CurrentUser::new("U1", "Grace", "hr")
    }

    fn at() -> DateTime<Utc> {
        today().and_hms_opt(9, 30, 0).unwrap().and_utc()
    }

    fn loaded_board() -> AttendanceBoard {
        let mut board = AttendanceBoard::new(today());
        let generation = board.begin_refresh();
        assert!(board.apply_leaves(generation, roster(), &e1_leave()));
        board
    }

    #[test]
    fn list_state_starts_from_screen_defaults() {
        let config = HrdeskConfig {
            page_size: 25,
            ..Default::default()
        };
        let state = ListState::for_screen(&EXPENSES, &config);
        assert_eq!(state.sort().field, "date");
        assert_eq!(state.sort().order, SortOrder::Desc);
        assert_eq!(state.page().page_size().get(), 25);
        assert_eq!(state.page().page(), 1);
        assert_eq!(state.filter().date_field.as_deref(), Some("date"));
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut state = ListState::for_screen(&EXPENSES, &HrdeskConfig::default());

        state.set_page(3);
        state.set_search("fuel");
        assert_eq!(state.page().page(), 1);

        state.set_page(3);
        state.set_category("category", "travel");
        assert_eq!(state.page().page(), 1);

        state.set_page(3);
        state.set_date_bucket(DateBucket::ThisMonth);
        assert_eq!(state.page().page(), 1);

        state.set_page(3);
        state.set_page_size(PageSize::new(50).unwrap());
        assert_eq!(state.page().page(), 1);

        state.set_page(3);
        state.clear_categories();
        assert_eq!(state.page().page(), 1);
    }

    #[test]
    fn unchanged_filter_keeps_page() {
        let mut state = ListState::for_screen(&EXPENSES, &HrdeskConfig::default());
        state.set_search("fuel");
        state.set_category("category", ALL);
        state.set_page(2);

        state.set_search("fuel");
        state.set_category("category", ALL);
        state.set_date_bucket(DateBucket::All);
        state.toggle_sort("amount");
        assert_eq!(state.page().page(), 2);
    }

    #[test]
    fn view_remembers_clamped_page() {
        let board = loaded_board();
        let rows = board.rows();
        let mut state = ListState::for_screen(&ATTENDANCE, &HrdeskConfig::default());
        state.set_page(9);

        let result = state.view(&ATTENDANCE.pipeline(), &rows, today());
        assert_eq!(result.page, 1);
        assert_eq!(state.page().page(), 1);
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn board_rows_reflect_reconciliation() {
        let board = loaded_board();
        let rows = board.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].status, AttendanceStatus::OnLeave);
        assert!(!rows[0].editable);
        assert!(rows[1].editable && rows[2].editable);

        let summary = board.summary();
        assert_eq!(summary.on_leave, 1);
        assert_eq!(summary.present, 2);
    }

    #[test]
    fn marks_apply_to_rows_until_taken() {
        let mut board = loaded_board();
        board.mark("E2", AttendanceStatus::Absent, &hr(), at()).unwrap();
        board.mark("E2", AttendanceStatus::Late, &hr(), at()).unwrap();

        let e2 = board.rows().into_iter().find(|r| r.employee_id == "E2").unwrap();
        assert_eq!(e2.status, AttendanceStatus::Late);
        assert_eq!(e2.marked_by.as_deref(), Some("Grace"));
        assert_eq!(board.summary().late, 1);

        let saved = board.take_pending();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, "E2@2024-02-17");
        assert_eq!(board.pending().count(), 0);
    }

    #[test]
    fn rejected_mark_leaves_board_unchanged() {
        let mut board = loaded_board();
        let before = board.rows();
        assert!(board.mark("E1", AttendanceStatus::Absent, &hr(), at()).is_err());
        assert_eq!(board.rows(), before);
        assert_eq!(board.pending().count(), 0);
    }

    #[test]
    fn date_change_discards_marks_and_stale_fetches() {
        let mut board = loaded_board();
        board.mark("E3", AttendanceStatus::HalfDay, &hr(), at()).unwrap();

        let d1 = board.select_date(date(2024, 2, 10));
        assert_eq!(board.pending().count(), 0);
        let d2 = board.select_date(date(2024, 2, 12));

        assert!(board.apply_leaves(d2, roster(), &[]));
        assert!(!board.apply_leaves(d1, Vec::new(), &[]));
        assert_eq!(board.date(), date(2024, 2, 12));
        assert_eq!(board.rows().len(), 3);
        assert!(board.rows().iter().all(|r| !r.editable));
    }
}
