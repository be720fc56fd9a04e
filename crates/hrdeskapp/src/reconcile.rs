//! # Attendance Reconciliation
//!
//! Attendance is not stored per day for everyone. Instead, the roster for a
//! date is derived from two inputs:
//!
//! 1. The active employees.
//! 2. Approved leave windows.
//!
//! An employee whose approved leave covers the date (inclusive on both ends)
//! defaults to `on_leave`; everyone else defaults to `present`.
//!
//! A default is editable only on the current day, and only while it is
//! `present`. Past and future dates are read-only, and so is leave, which is
//! changed through the leave workflow instead.
//!
//! [`override_status`] validates a manual mark against a [`Reconciliation`]
//! and produces an [`AttendanceRecord`]. The reconciliation itself is never
//! mutated; a fresh one is computed whenever the date, roster or leave set
//! changes.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{HrdeskError, Result};
use crate::model::{AttendanceRecord, AttendanceStatus, Employee, LeaveRequest, LeaveStatus};
use crate::provider::CurrentUser;

/// The part of a leave request reconciliation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveWindow {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

impl LeaveWindow {
    pub fn approved(
        employee_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            start_date,
            end_date,
            status: LeaveStatus::Approved,
        }
    }

    /// Approved and `start_date <= date <= end_date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved && self.start_date <= date && date <= self.end_date
    }
}

impl From<&LeaveRequest> for LeaveWindow {
    fn from(request: &LeaveRequest) -> Self {
        Self {
            employee_id: request.employee_id.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            status: request.status,
        }
    }
}

/// Derived status for one employee on one date. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceDefault {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub editable: bool,
}

/// Counts shown above the attendance roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub half_day: usize,
    pub on_leave: usize,
    pub editable: usize,
}

impl AttendanceSummary {
    fn add(&mut self, status: AttendanceStatus, editable: bool) {
        self.total += 1;
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::HalfDay => self.half_day += 1,
            AttendanceStatus::OnLeave => self.on_leave += 1,
        }
        if editable {
            self.editable += 1;
        }
    }

    /// Tally `(status, editable)` pairs, e.g. roster rows after overrides.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (AttendanceStatus, bool)>,
    {
        let mut summary = Self::default();
        for (status, editable) in rows {
            summary.add(status, editable);
        }
        summary
    }
}

/// `employee_id → AttendanceDefault` for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub date: NaiveDate,
    pub today: NaiveDate,
    defaults: BTreeMap<String, AttendanceDefault>,
}

impl Reconciliation {
    /// A reconciliation with nobody in it, used before the first fetch lands.
    pub fn empty(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            today,
            defaults: BTreeMap::new(),
        }
    }

    pub fn get(&self, employee_id: &str) -> Option<&AttendanceDefault> {
        self.defaults.get(employee_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttendanceDefault> {
        self.defaults.values()
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::from_rows(self.iter().map(|d| (d.status, d.editable)))
    }
}

/// Compute attendance defaults for `date`.
///
/// Inactive employees are left out. Windows that are not approved, belong to
/// someone else, or do not cover `date` have no effect.
pub fn reconcile(
    roster: &[Employee],
    leaves: &[LeaveWindow],
    date: NaiveDate,
    today: NaiveDate,
) -> Reconciliation {
    let is_today = date == today;
    let defaults: BTreeMap<_, _> = roster
        .iter()
        .filter(|employee| employee.is_active())
        .map(|employee| {
            let on_leave = leaves
                .iter()
                .any(|w| w.employee_id == employee.id && w.covers(date));
            let status = if on_leave {
                AttendanceStatus::OnLeave
            } else {
                AttendanceStatus::Present
            };
            let default = AttendanceDefault {
                employee_id: employee.id.clone(),
                date,
                status,
                editable: is_today && status == AttendanceStatus::Present,
            };
            (employee.id.clone(), default)
        })
        .collect();

    let reconciliation = Reconciliation {
        date,
        today,
        defaults,
    };
    debug!(
        %date,
        %today,
        employees = reconciliation.len(),
        on_leave = reconciliation.summary().on_leave,
        "reconciled attendance"
    );
    reconciliation
}

/// Validate a manual mark and build the record to save.
pub fn override_status(
    employee_id: &str,
    new_status: AttendanceStatus,
    reconciliation: &Reconciliation,
    actor: &CurrentUser,
    at: DateTime<Utc>,
) -> Result<AttendanceRecord> {
    let default = reconciliation.get(employee_id).ok_or_else(|| {
        HrdeskError::InvalidOperation(format!(
            "employee {} is not on the roster for {}",
            employee_id, reconciliation.date
        ))
    })?;

    if new_status == AttendanceStatus::OnLeave {
        return Err(HrdeskError::InvalidOperation(
            "on_leave comes from approved leave and cannot be marked".to_string(),
        ));
    }

    if !default.editable {
        let reason = if default.status == AttendanceStatus::OnLeave {
            "is on approved leave"
        } else {
            "can only be marked on the current day"
        };
        return Err(HrdeskError::InvalidOperation(format!(
            "attendance for {} on {} {}",
            employee_id, reconciliation.date, reason
        )));
    }

    info!(
        employee = employee_id,
        date = %reconciliation.date,
        status = new_status.as_str(),
        by = %actor.name,
        "attendance marked"
    );
    Ok(AttendanceRecord {
        id: AttendanceRecord::record_id(employee_id, reconciliation.date),
        employee_id: employee_id.to_string(),
        date: reconciliation.date,
        status: new_status,
        marked_by: actor.name.clone(),
        marked_at: at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{date, roster};
    use crate::model::EmployeeStatus;

    fn today() -> NaiveDate {
        date(2024, 2, 17)
    }

    fn e1_leave() -> Vec<LeaveWindow> {
        vec![LeaveWindow::approved("E1", date(2024, 2, 15), date(2024, 2, 20))]
    }

    fn hr() -> CurrentUser {
        CurrentUser::new("U1", "Grace", "hr")
    }

    fn noon() -> DateTime<Utc> {
        today().and_hms_opt(12, 0, 0).unwrap().and_utc()
    }

    #[test]
    fn leave_today_is_locked() {
        let rec = reconcile(&roster(), &e1_leave(), today(), today());

        let e1 = rec.get("E1").unwrap();
        assert_eq!(e1.status, AttendanceStatus::OnLeave);
        assert!(!e1.editable);

        for id in ["E2", "E3"] {
            let row = rec.get(id).unwrap();
            assert_eq!(row.status, AttendanceStatus::Present);
            assert!(row.editable);
        }
    }

    #[test]
    fn other_days_are_read_only() {
        let rec = reconcile(&roster(), &e1_leave(), date(2024, 2, 10), today());
        assert_eq!(rec.len(), 3);
        assert!(rec.iter().all(|d| !d.editable));
        assert!(rec.iter().all(|d| d.status == AttendanceStatus::Present));
    }

    #[test]
    fn leave_bounds_are_inclusive() {
        let leaves = e1_leave();
        for (day, expected) in [
            (date(2024, 2, 14), AttendanceStatus::Present),
            (date(2024, 2, 15), AttendanceStatus::OnLeave),
            (date(2024, 2, 20), AttendanceStatus::OnLeave),
            (date(2024, 2, 21), AttendanceStatus::Present),
        ] {
            let rec = reconcile(&roster(), &leaves, day, day);
            assert_eq!(rec.get("E1").unwrap().status, expected, "{day}");
        }
    }

    #[test]
    fn only_approved_windows_count() {
        let mut pending = LeaveWindow::approved("E2", date(2024, 2, 1), date(2024, 2, 29));
        pending.status = LeaveStatus::Pending;
        let mut rejected = pending.clone();
        rejected.employee_id = "E3".to_string();
        rejected.status = LeaveStatus::Rejected;

        let rec = reconcile(&roster(), &[pending, rejected], today(), today());
        assert_eq!(rec.summary().on_leave, 0);
        assert_eq!(rec.summary().editable, 3);
    }

    #[test]
    fn inactive_employees_are_skipped() {
        let mut staff = roster();
        staff[1].status = EmployeeStatus::Inactive;
        let rec = reconcile(&staff, &[], today(), today());
        assert!(rec.get("E2").is_none());
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn override_on_leave_employee_fails() {
        let rec = reconcile(&roster(), &e1_leave(), today(), today());
        let before = rec.clone();

        let err = override_status("E1", AttendanceStatus::Absent, &rec, &hr(), noon());
        assert!(matches!(err, Err(HrdeskError::InvalidOperation(_))));
        assert_eq!(rec, before);
    }

    #[test]
    fn override_editable_employee() {
        let rec = reconcile(&roster(), &e1_leave(), today(), today());
        let record = override_status("E2", AttendanceStatus::Late, &rec, &hr(), noon()).unwrap();

        assert_eq!(record.id, "E2@2024-02-17");
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.marked_by, "Grace");
        assert_eq!(record.marked_at, noon());
        assert_eq!(rec.get("E2").unwrap().status, AttendanceStatus::Present);
    }

    #[test]
    fn override_rejects_unknown_past_and_leave_target() {
        let rec = reconcile(&roster(), &[], today(), today());
        assert!(override_status("E9", AttendanceStatus::Absent, &rec, &hr(), noon()).is_err());
        assert!(override_status("E2", AttendanceStatus::OnLeave, &rec, &hr(), noon()).is_err());

        let past = reconcile(&roster(), &[], date(2024, 2, 10), today());
        assert!(override_status("E2", AttendanceStatus::Absent, &past, &hr(), noon()).is_err());
    }

    #[test]
    fn window_from_leave_request_keeps_status() {
        let request = LeaveRequest::new("L1", "E1", "annual", date(2024, 2, 15), date(2024, 2, 20));
        let window = LeaveWindow::from(&request);
        assert_eq!(window.status, LeaveStatus::Pending);
        assert!(!window.covers(date(2024, 2, 16)));
    }
}
