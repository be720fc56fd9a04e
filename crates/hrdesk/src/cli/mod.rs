//! # CLI Layer
//!
//! This module is **one possible UI client** for hrdesk. It is the only place
//! that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Commands
//!
//! - `hrdesk list <screen>`: one page of a list screen, with search
//!   (`--search`), dropdown filters (`--where field=value`), date periods
//!   (`--period`, `--from`, `--to`), sorting (`--sort`, repeat to flip) and
//!   paging (`--page`, `--page-size`).
//! - `hrdesk attendance`: the roster for a date with approved leave applied.
//!   `--mark EMP=STATUS` marks employees, which only succeeds for today's
//!   editable rows.
//! - `hrdesk next-id <kind>`: format a new record identifier.
//!
//! Every list command accepts `--json` for machine-readable output and
//! `--today` to pin the reference date.
//!
//! ## Logging
//!
//! Library diagnostics go to stderr. The level defaults to `warn`, `-v`
//! raises it to `debug`, and `HRDESK_LOG` takes any `EnvFilter` directive.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Tables, footers, notices and JSON
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
