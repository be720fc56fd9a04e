//! # hrdesk CLI
//!
//! A command-line client for the `hrdeskapp` library. The binary is thin: the
//! CLI lives in `src/cli/`, and this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/hrdeskapp/`: UI-agnostic library (pipeline, reconciliation, ids)
//! - `crates/hrdesk/`: this CLI, depending on `hrdeskapp`
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/hrdesk/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Tables and JSON (render.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/hrdeskapp/src/api.rs)                    │
//! │  - Providers, permission checks, session state              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are read from a JSON dataset (`--data`, or `hrdesk.json` in the
//! platform data directory) with one array per record type:
//! `employees`, `leave_requests`, `expenses`, `trips`, `vehicles`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
