use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hrdesk", bin_name = "hrdesk", version, disable_help_subcommand = true)]
#[command(about = "Browse HR, leave, attendance and fleet records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON dataset to read (defaults to hrdesk.json in the data directory)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Config file (defaults to hrdesk.toml in the config directory)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records of one screen
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the attendance roster for a date, optionally marking employees
    Attendance(AttendanceArgs),

    /// Format an identifier for a new record
    NextId(NextIdArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListScreen {
    Employees,
    Leave,
    Expenses,
    Trips,
    Vehicles,
}

impl ListScreen {
    pub fn name(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Leave => "leave",
            Self::Expenses => "expenses",
            Self::Trips => "trips",
            Self::Vehicles => "vehicles",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Today,
    Week,
    Month,
    Quarter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdKind {
    Employee,
    Expense,
    Trip,
}

/// Options shared by every list-like command.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact-match filter, e.g. --where status=approved ("all" clears it)
    #[arg(long = "where", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub filters: Vec<(String, String)>,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Reference date for relative periods and editability (defaults to the local date)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    pub screen: ListScreen,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Relative date period
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub period: Option<Period>,

    /// Start of a custom date range
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// End of a custom date range (inclusive)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Sort column; repeating a column flips its direction
    #[arg(long, value_name = "FIELD")]
    pub sort: Vec<String>,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// One of 10, 20, 25, 30, 50, 100
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct AttendanceArgs {
    /// Roster date (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Mark an employee, e.g. --mark E2=absent. Marks are saved to the dataset
    #[arg(long, value_name = "EMPLOYEE=STATUS", value_parser = parse_assignment)]
    pub mark: Vec<(String, String)>,

    /// Name recorded as marking attendance
    #[arg(long = "as", value_name = "USER", default_value = "hrdesk")]
    pub user: String,

    /// Role used for the permission check
    #[arg(long, default_value = "hr")]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct NextIdArgs {
    pub kind: IdKind,

    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    #[arg(long)]
    pub sequence: u32,

    /// Unit code for employee ids
    #[arg(long, default_value = "")]
    pub unit: String,
}

/// Split `key=value`; both sides must be present.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
