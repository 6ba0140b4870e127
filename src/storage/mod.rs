//! # Storage Layer
//!
//! Persistence for task lists and user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Task lists | JSON array, 4-space indent | `<data dir>/<list>.json` |
//! | Config | TOML | `~/.config/tasklist/config.toml` or `--config` |
//!
//! ## Concurrency
//!
//! There is no file locking. Writes go to a temp file that is then renamed
//! over the list file, so readers never see a partial list.
//!
//! ## Key Types
//!
//! - [`ListStore`] - Read/write task lists as JSON files
//! - [`Config`] - User configuration

mod config;
mod list_store;

pub use config::{Config, ConfigError, DEFAULT_TTL_DAYS};
pub use list_store::{ListStore, StoreError, LIST_EXTENSION};
