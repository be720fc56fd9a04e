use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use directories::ProjectDirs;
use hrdeskapp::api::{HrdeskApi, ListView};
use hrdeskapp::config::HrdeskConfig;
use hrdeskapp::ids::IdTemplate;
use hrdeskapp::model::{
    AttendanceRecord, AttendanceRow, AttendanceStatus, Employee, Expense, LeaveRequest, Record,
    Trip, Vehicle,
};
use hrdeskapp::provider::{CurrentUser, Dataset, RecordProvider};
use hrdeskapp::reconcile::AttendanceSummary;
use hrdeskapp::screens::{get_screen, Screen, ATTENDANCE};
use hrdeskapp::session::{AttendanceBoard, ListState};
use hrdeskapp::view::{DateBucket, PageSize, ViewResult};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::render;
use super::setup::{
    AttendanceArgs, Cli, Commands, FilterArgs, IdKind, ListArgs, ListScreen, NextIdArgs, Period,
};

const CONFIG_FILE: &str = "hrdesk.toml";
const DATA_FILE: &str = "hrdesk.json";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().or_else(|| default_path(CONFIG_FILE, true));
    let config = HrdeskConfig::load(config_path.as_deref())?;
    debug!(?config_path, ?config, "configuration loaded");

    match cli.command {
        Commands::NextId(args) => {
            // formatting ids reads no records
            let api = HrdeskApi::new(Dataset::default(), config);
            handle_next_id(&api, &args)
        }
        Commands::List(args) => {
            let path = dataset_path(cli.data.as_deref())?;
            let api = HrdeskApi::new(load_dataset(&path)?, config);
            handle_list(&api, &args)
        }
        Commands::Attendance(args) => {
            let path = dataset_path(cli.data.as_deref())?;
            let mut api = HrdeskApi::new(load_dataset(&path)?, config);
            handle_attendance(&mut api, &args, &path)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("HRDESK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `hrdesk.toml` in the config directory, or `hrdesk.json` in the data
/// directory.
fn default_path(file: &str, config: bool) -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "hrdesk")?;
    let dir = if config {
        dirs.config_dir()
    } else {
        dirs.data_dir()
    };
    Some(dir.join(file))
}

fn dataset_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_path(DATA_FILE, false)
            .context("could not determine the data directory; pass --data"),
    }
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut dataset = Dataset::load(path)
        .with_context(|| format!("could not read dataset {}", path.display()))?;
    dataset.resolve_names();
    Ok(dataset)
}

fn today(filter: &FilterArgs) -> NaiveDate {
    filter.today.unwrap_or_else(|| Local::now().date_naive())
}

/// Search and `--where` filters, in the order given.
fn apply_filters(state: &mut ListState, screen: &Screen, filter: &FilterArgs) -> Result<()> {
    if let Some(search) = &filter.search {
        state.set_search(search.as_str());
    }
    for (field, value) in &filter.filters {
        if !screen.schema.categorical().any(|name| name == field.as_str()) {
            let known: Vec<_> = screen.schema.categorical().collect();
            bail!(
                "{} cannot be filtered by '{}' (try one of: {})",
                screen.name,
                field,
                known.join(", ")
            );
        }
        state.set_category(field.as_str(), value.as_str());
    }
    Ok(())
}

fn bucket(args: &ListArgs) -> DateBucket {
    match args.period {
        Some(Period::Today) => DateBucket::Today,
        Some(Period::Week) => DateBucket::ThisWeek,
        Some(Period::Month) => DateBucket::ThisMonth,
        Some(Period::Quarter) => DateBucket::ThisQuarter,
        None if args.from.is_some() || args.to.is_some() => DateBucket::Custom {
            from: args.from,
            to: args.to,
        },
        None => DateBucket::All,
    }
}

fn handle_list(api: &HrdeskApi<Dataset>, args: &ListArgs) -> Result<()> {
    let screen = get_screen(args.screen.name())?;
    let mut state = api.list_state(screen.name)?;

    apply_filters(&mut state, screen, &args.filter)?;
    state.set_date_bucket(bucket(args));
    if let Some(size) = args.page_size {
        state.set_page_size(PageSize::new(size)?);
    }
    for field in &args.sort {
        if screen.schema.get(field).is_none() {
            bail!("{} has no column '{}'", screen.name, field);
        }
        state.toggle_sort(field);
    }
    state.set_page(args.page);

    let today = today(&args.filter);
    match args.screen {
        ListScreen::Employees => show::<Employee>(api, screen, &mut state, today, args.filter.json),
        ListScreen::Leave => show::<LeaveRequest>(api, screen, &mut state, today, args.filter.json),
        ListScreen::Expenses => show::<Expense>(api, screen, &mut state, today, args.filter.json),
        ListScreen::Trips => show::<Trip>(api, screen, &mut state, today, args.filter.json),
        ListScreen::Vehicles => show::<Vehicle>(api, screen, &mut state, today, args.filter.json),
    }
}

fn show<T>(
    api: &HrdeskApi<Dataset>,
    screen: &Screen,
    state: &mut ListState,
    today: NaiveDate,
    json: bool,
) -> Result<()>
where
    Dataset: RecordProvider<T>,
    T: Record + Clone + Serialize,
{
    let view: ListView<T> = api.view(screen, state, today);
    if json {
        print!("{}", render::render_json(&view)?);
        return Ok(());
    }
    if let Some(notice) = &view.notice {
        eprint!("{}", render::render_notice(notice));
    }
    print!("{}", render::render_table(&screen.schema, &view.result));
    Ok(())
}

fn handle_attendance(
    api: &mut HrdeskApi<Dataset>,
    args: &AttendanceArgs,
    data_path: &Path,
) -> Result<()> {
    let today = today(&args.filter);
    let (mut board, mut notices) = api.attendance_board(today);
    if let Some(date) = args.date.filter(|date| *date != today) {
        notices = api.select_attendance_date(&mut board, date);
    }
    for notice in &notices {
        eprint!("{}", render::render_notice(notice));
    }

    let actor = CurrentUser::new(args.user.as_str(), args.user.as_str(), args.role.as_str());
    let mut marked = Vec::new();
    for (employee_id, raw_status) in &args.mark {
        let Some(status) = AttendanceStatus::parse(raw_status) else {
            bail!("unknown attendance status '{}'", raw_status);
        };
        let record = api.mark_attendance(&mut board, employee_id, status, &actor, Utc::now())?;
        marked.push(record);
    }

    let mut state = api.list_state(ATTENDANCE.name)?;
    apply_filters(&mut state, &ATTENDANCE, &args.filter)?;
    let result = api.view_attendance(&board, &mut state);

    if args.filter.json {
        #[derive(Serialize)]
        struct AttendanceOutput<'a> {
            date: NaiveDate,
            summary: AttendanceSummary,
            marked: &'a [AttendanceRecord],
            roster: &'a ViewResult<AttendanceRow>,
        }
        let output = AttendanceOutput {
            date: board.date(),
            summary: board.summary(),
            marked: &marked,
            roster: &result,
        };
        print!("{}", render::render_json(&output)?);
    } else {
        for record in &marked {
            print!("{}", render::render_mark(record));
        }
        if board.date() != today {
            print!("{}", render::render_locked_date(board.date()));
        }
        print!("{}", render::render_table(&ATTENDANCE.schema, &result));
    }

    save_marks(api, &mut board, data_path)
}

/// Write the board's unsaved marks back to the dataset file.
fn save_marks(
    api: &mut HrdeskApi<Dataset>,
    board: &mut AttendanceBoard,
    path: &Path,
) -> Result<()> {
    let pending = board.take_pending();
    if pending.is_empty() {
        return Ok(());
    }
    let saved = api.provider_mut().record_attendance(pending);
    api.provider()
        .save(path)
        .with_context(|| format!("could not save attendance to {}", path.display()))?;
    eprint!("{}", render::render_saved(saved, path));
    Ok(())
}

fn handle_next_id(api: &HrdeskApi<Dataset>, args: &NextIdArgs) -> Result<()> {
    let template = match args.kind {
        IdKind::Employee => IdTemplate::employee(args.unit.as_str()),
        IdKind::Expense => IdTemplate::Expense,
        IdKind::Trip => IdTemplate::Trip,
    };
    println!("{}", api.next_id(args.date, args.sequence, &template));
    Ok(())
}
