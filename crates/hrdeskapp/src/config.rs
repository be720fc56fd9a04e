//! # Configuration
//!
//! hrdesk configuration is loaded with [`confique`], layered in priority
//! order:
//!
//! 1. **Environment variables**: `HRDESK_PAGE_SIZE`.
//! 2. **Config file**: `hrdesk.toml`, found by the client (the CLI looks in
//!    the OS config directory unless `--config` is given).
//! 3. **Compiled defaults**: `#[config(default = ...)]` and the accessors
//!    below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `10` | Rows per page; one of 10, 20, 25, 30, 50, 100 |
//! | `week_start` | `monday` | First day of the "this week" bucket |
//! | `sequence_scope` | `daily` | Whether id sequences restart each day |

use std::path::Path;

use chrono::Weekday;
use confique::Config;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{HrdeskError, Result};
use crate::ids::SequenceScope;
use crate::view::PageSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Sunday,
    Saturday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

/// Configuration for hrdesk, stored in `hrdesk.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HrdeskConfig {
    /// Rows per page when a list is first opened.
    #[config(default = 10, env = "HRDESK_PAGE_SIZE")]
    pub page_size: usize,

    /// First day of the week for the "this week" date bucket.
    /// When absent, weeks start on Monday.
    pub week_start: Option<WeekStart>,

    /// Whether generated id sequences restart daily or run globally.
    pub sequence_scope: Option<SequenceScope>,
}

impl Default for HrdeskConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            week_start: None,
            sequence_scope: None,
        }
    }
}

impl HrdeskConfig {
    /// Load from the environment and, if given, a TOML file.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|err| HrdeskError::Config(err.to_string()))
    }

    /// Configured page size, falling back to the default when the value is
    /// not one of the allowed sizes.
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.page_size).unwrap_or_else(|err| {
            warn!(page_size = self.page_size, error = %err, "ignoring configured page size");
            PageSize::default()
        })
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start.unwrap_or(WeekStart::Monday).into()
    }

    pub fn sequence_scope(&self) -> SequenceScope {
        self.sequence_scope.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HrdeskConfig::default();
        assert_eq!(config.page_size().get(), 10);
        assert_eq!(config.week_start(), Weekday::Mon);
        assert_eq!(config.sequence_scope(), SequenceScope::Daily);
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        let config = HrdeskConfig {
            page_size: 15,
            ..Default::default()
        };
        assert_eq!(config.page_size(), PageSize::default());
    }

    #[test]
    fn test_week_start_mapping() {
        let config = HrdeskConfig {
            week_start: Some(WeekStart::Sunday),
            ..Default::default()
        };
        assert_eq!(config.week_start(), Weekday::Sun);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hrdesk.toml");
        std::fs::write(
            &path,
            "page_size = 25\nweek_start = \"sunday\"\nsequence_scope = \"global\"\n",
        )
        .unwrap();

        let config = HrdeskConfig::load(Some(&path)).unwrap();
        assert_eq!(config.page_size().get(), 25);
        assert_eq!(config.week_start(), Weekday::Sun);
        assert_eq!(config.sequence_scope(), SequenceScope::Global);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HrdeskConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.week_start(), Weekday::Mon);
        assert_eq!(config.sequence_scope(), SequenceScope::Daily);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hrdesk.toml");
        std::fs::write(&path, "week_start = \"someday\"\n").unwrap();
        assert!(matches!(
            HrdeskConfig::load(Some(&path)),
            Err(HrdeskError::Config(_))
        ));
    }
}
