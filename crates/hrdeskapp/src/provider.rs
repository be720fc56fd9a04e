//! # Providers
//!
//! Records and leave windows come from outside the library: a remote API in
//! the dashboard, a JSON file for the command line, fixtures in tests. The
//! traits here are the seams:
//!
//! - [`RecordProvider<T>`]: everything of one record type.
//! - [`LeaveProvider`]: approved leave relevant to a date.
//! - [`PermissionCheck`]: whether the current user may perform an action.
//!
//! A failed fetch never takes a screen down. [`load_or_empty`] turns the
//! error into an empty collection and a [`ProviderNotice`] the client can
//! show.
//!
//! [`Dataset`] is the in-memory implementation of every provider, loadable
//! from a JSON document with one array per record type.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{HrdeskError, Result};
use crate::model::{
    AttendanceRecord, Employee, Expense, LeaveRequest, LeaveStatus, Trip, Vehicle,
};
use crate::reconcile::LeaveWindow;

/// Whoever is acting; stamped into `marked_by` and `approved_by`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

pub trait RecordProvider<T> {
    fn fetch_all(&self) -> Result<Vec<T>>;
}

pub trait LeaveProvider {
    /// Approved leave windows that may cover `date`.
    fn fetch_approved_leaves(&self, date: NaiveDate) -> Result<Vec<LeaveWindow>>;
}

pub trait PermissionCheck {
    fn has_permission(&self, action: &str) -> bool;
}

pub const VIEW_RECORDS: &str = "records.view";
pub const MARK_ATTENDANCE: &str = "attendance.mark";
pub const APPROVE_LEAVE: &str = "leave.approve";
pub const MANAGE_FLEET: &str = "fleet.manage";

/// Role-keyed permission table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPermissions {
    actions: &'static [&'static str],
}

impl StaticPermissions {
    pub fn for_role(role: &str) -> Self {
        let actions: &'static [&'static str] = match role {
            "admin" => &[VIEW_RECORDS, MARK_ATTENDANCE, APPROVE_LEAVE, MANAGE_FLEET],
            "hr" | "manager" => &[VIEW_RECORDS, MARK_ATTENDANCE, APPROVE_LEAVE],
            "fleet" => &[VIEW_RECORDS, MANAGE_FLEET],
            "staff" => &[VIEW_RECORDS],
            _ => &[],
        };
        Self { actions }
    }

    pub fn for_user(user: &CurrentUser) -> Self {
        Self::for_role(&user.role)
    }
}

impl PermissionCheck for StaticPermissions {
    fn has_permission(&self, action: &str) -> bool {
        self.actions.contains(&action)
    }
}

/// Shown in place of a list whose fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderNotice {
    pub domain: String,
    pub message: String,
}

/// Unwrap a fetch, degrading failure to an empty collection and a notice.
pub fn load_or_empty<T>(domain: &str, result: Result<Vec<T>>) -> (Vec<T>, Option<ProviderNotice>) {
    match result {
        Ok(items) => (items, None),
        Err(err) => {
            warn!(domain, error = %err, "fetch failed, showing empty list");
            let notice = ProviderNotice {
                domain: domain.to_string(),
                message: format!("Could not load {}: {}", domain, err),
            };
            (Vec::new(), Some(notice))
        }
    }
}

/// Every record type, held in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub leave_requests: Vec<LeaveRequest>,
    pub expenses: Vec<Expense>,
    pub trips: Vec<Trip>,
    pub vehicles: Vec<Vehicle>,
    /// Saved attendance marks, one per employee per date.
    pub attendance: Vec<AttendanceRecord>,
}

impl Dataset {
    /// Read a JSON dataset. Missing sections are empty.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            employees = dataset.employees.len(),
            leave_requests = dataset.leave_requests.len(),
            expenses = dataset.expenses.len(),
            trips = dataset.trips.len(),
            vehicles = dataset.vehicles.len(),
            attendance = dataset.attendance.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Store marks, replacing any earlier mark for the same employee and
    /// date. Returns how many were stored.
    pub fn record_attendance(&mut self, records: Vec<AttendanceRecord>) -> usize {
        let stored = records.len();
        for record in records {
            match self.attendance.iter_mut().find(|saved| saved.id == record.id) {
                Some(saved) => *saved = record,
                None => self.attendance.push(record),
            }
        }
        debug!(stored, total = self.attendance.len(), "recorded attendance");
        stored
    }

    /// Fill in leave requests' `employee_name` from the roster where blank.
    pub fn resolve_names(&mut self) {
        for request in &mut self.leave_requests {
            if !request.employee_name.is_empty() {
                continue;
            }
            if let Some(employee) = self.employees.iter().find(|e| e.id == request.employee_id) {
                request.employee_name = employee.name.clone();
            }
        }
    }
}

impl RecordProvider<Employee> for Dataset {
    fn fetch_all(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }
}

impl RecordProvider<LeaveRequest> for Dataset {
    fn fetch_all(&self) -> Result<Vec<LeaveRequest>> {
        Ok(self.leave_requests.clone())
    }
}

impl RecordProvider<Expense> for Dataset {
    fn fetch_all(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }
}

impl RecordProvider<Trip> for Dataset {
    fn fetch_all(&self) -> Result<Vec<Trip>> {
        Ok(self.trips.clone())
    }
}

impl RecordProvider<Vehicle> for Dataset {
    fn fetch_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.vehicles.clone())
    }
}

impl LeaveProvider for Dataset {
    fn fetch_approved_leaves(&self, date: NaiveDate) -> Result<Vec<LeaveWindow>> {
        Ok(self
            .leave_requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Approved && r.covers(date))
            .map(LeaveWindow::from)
            .collect())
    }
}

/// A provider that always fails; stands in for an unreachable backend.
#[derive(Debug, Clone, Default)]
pub struct Unavailable;

impl<T> RecordProvider<T> for Unavailable {
    fn fetch_all(&self) -> Result<Vec<T>> {
        Err(HrdeskError::Provider("backend unavailable".to_string()))
    }
}

impl LeaveProvider for Unavailable {
    fn fetch_approved_leaves(&self, _date: NaiveDate) -> Result<Vec<LeaveWindow>> {
        Err(HrdeskError::Provider("backend unavailable".to_string()))
    }
}
