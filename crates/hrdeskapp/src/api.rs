//! # API Facade
//!
//! The single entry point for UI clients. It wires providers, configuration
//! and session state to the pipeline and the reconciler, and returns
//! structured values. It prints nothing and formats nothing.
//!
//! ## Generic Over Providers
//!
//! `HrdeskApi<P>` works with any `P` implementing the provider traits a call
//! needs:
//! - Command line: `HrdeskApi<Dataset>` loaded from a JSON file.
//! - Tests: `HrdeskApi<Dataset>` built from fixtures, or a failing provider.
//!
//! ## Failure Handling
//!
//! Fetch failures are not errors at this level. The affected list comes back
//! empty with a [`ProviderNotice`] attached, so one unreachable backend does
//! not blank the whole dashboard. Errors are reserved for requests the rules
//! refuse, like marking attendance on a locked row.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::config::HrdeskConfig;
use crate::error::{HrdeskError, Result};
use crate::generation::Generation;
use crate::ids::{format_id, IdTemplate, SequenceCounter};
use crate::model::{AttendanceRecord, AttendanceRow, AttendanceStatus, Employee, Record};
use crate::provider::{
    load_or_empty, CurrentUser, LeaveProvider, PermissionCheck, ProviderNotice, RecordProvider,
    StaticPermissions, MARK_ATTENDANCE,
};
use crate::screens::{get_screen, Screen, ATTENDANCE};
use crate::session::{AttendanceBoard, ListState};
use crate::view::ViewResult;

/// One rendered page, plus a notice when the records could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<T> {
    pub result: ViewResult<T>,
    pub notice: Option<ProviderNotice>,
}

pub struct HrdeskApi<P> {
    provider: P,
    config: HrdeskConfig,
}

impl<P> HrdeskApi<P> {
    pub fn new(provider: P, config: HrdeskConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &HrdeskConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Fresh list state for the named screen.
    pub fn list_state(&self, screen: &str) -> Result<ListState> {
        let screen = get_screen(screen)?;
        Ok(ListState::for_screen(screen, &self.config))
    }

    /// Fetch `T` and run it through `screen`'s pipeline.
    pub fn view<T>(&self, screen: &Screen, state: &mut ListState, today: NaiveDate) -> ListView<T>
    where
        P: RecordProvider<T>,
        T: Record + Clone,
    {
        let (records, notice) = load_or_empty(screen.name, self.provider.fetch_all());
        let result = state.view(&screen.pipeline(), &records, today);
        ListView { result, notice }
    }

    /// A board for `today`, loaded with today's roster and leave.
    pub fn attendance_board(&self, today: NaiveDate) -> (AttendanceBoard, Vec<ProviderNotice>)
    where
        P: RecordProvider<Employee> + LeaveProvider,
    {
        let mut board = AttendanceBoard::new(today);
        let notices = self.refresh_attendance(&mut board);
        (board, notices)
    }

    /// Reload roster and leave for the board's current date.
    pub fn refresh_attendance(&self, board: &mut AttendanceBoard) -> Vec<ProviderNotice>
    where
        P: RecordProvider<Employee> + LeaveProvider,
    {
        let generation = board.begin_refresh();
        self.load_attendance(board, generation)
    }

    /// Move the board to `date` and load it.
    pub fn select_attendance_date(
        &self,
        board: &mut AttendanceBoard,
        date: NaiveDate,
    ) -> Vec<ProviderNotice>
    where
        P: RecordProvider<Employee> + LeaveProvider,
    {
        let generation = board.select_date(date);
        self.load_attendance(board, generation)
    }

    fn load_attendance(
        &self,
        board: &mut AttendanceBoard,
        generation: Generation,
    ) -> Vec<ProviderNotice>
    where
        P: RecordProvider<Employee> + LeaveProvider,
    {
        let (roster, roster_notice) = load_or_empty("employees", self.provider.fetch_all());
        let (leaves, leave_notice) = load_or_empty(
            "leave",
            self.provider.fetch_approved_leaves(board.date()),
        );
        board.apply_leaves(generation, roster, &leaves);
        roster_notice.into_iter().chain(leave_notice).collect()
    }

    /// The board's roster rows through the attendance screen's pipeline.
    pub fn view_attendance(
        &self,
        board: &AttendanceBoard,
        state: &mut ListState,
    ) -> ViewResult<AttendanceRow> {
        state.view(&ATTENDANCE.pipeline(), &board.rows(), board.today())
    }

    /// Mark attendance as `actor`, who needs the mark permission.
    pub fn mark_attendance(
        &self,
        board: &mut AttendanceBoard,
        employee_id: &str,
        status: AttendanceStatus,
        actor: &CurrentUser,
        at: DateTime<Utc>,
    ) -> Result<AttendanceRecord> {
        if !StaticPermissions::for_user(actor).has_permission(MARK_ATTENDANCE) {
            return Err(HrdeskError::InvalidOperation(format!(
                "{} ({}) may not mark attendance",
                actor.name, actor.role
            )));
        }
        board
            .mark(employee_id, status, actor, at)
            .map(AttendanceRecord::clone)
    }

    /// A sequence counter using the configured scope.
    pub fn sequence_counter(&self) -> SequenceCounter {
        SequenceCounter::new(self.config.sequence_scope())
    }

    pub fn next_id(&self, date: NaiveDate, sequence: u32, template: &IdTemplate) -> String {
        format_id(date, sequence, template)
    }
}
