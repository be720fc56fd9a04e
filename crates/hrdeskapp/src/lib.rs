//! # hrdesk Architecture
//!
//! hrdesk is a **UI-agnostic records library** for an administrative
//! dashboard: employees, leave, attendance, expenses, trips and vehicles. The
//! command-line client is one consumer; a web frontend would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the hrdesk CLI, or any UI)                         │
//! │  - Parses input, renders ViewResults, owns stdout/stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Fetches through providers, degrades failures to notices  │
//! │  - Checks permissions before edits                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (view/, reconcile.rs, ids.rs, session.rs)             │
//! │  - Filter → sort → paginate, attendance reconciliation      │
//! │  - Pure functions over Rust types                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Providers (provider.rs)                                    │
//! │  - RecordProvider / LeaveProvider traits                    │
//! │  - Dataset (in-memory, loadable from JSON)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Pipeline, Six Screens
//!
//! Every list screen runs the same [`view::ViewPipeline`]. Screens differ only
//! in their [`fields::Schema`] and defaults, registered in [`screens`]. Field
//! kinds are declared, never guessed, so `"10"` sorts after `"9"` on a number
//! column and before it on a text column.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the client decides whether
//! and where to print them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for clients
//! - [`view`]: Filtering, sorting, pagination and their composition
//! - [`fields`]: Field kinds, schemas and runtime values
//! - [`model`]: Record types and the [`model::Record`] trait
//! - [`screens`]: The six screen configurations
//! - [`reconcile`]: Attendance defaults from roster and approved leave
//! - [`session`]: Per-screen state and the attendance board
//! - [`generation`]: Latest-request-wins guarding for fetches
//! - [`ids`]: Date-encoded identifiers
//! - [`provider`]: External collaborator traits and the JSON dataset
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod fields;
pub mod generation;
pub mod ids;
pub mod model;
pub mod provider;
pub mod reconcile;
pub mod screens;
pub mod session;
pub mod view;

#[cfg(test)]
mod fixtures;
