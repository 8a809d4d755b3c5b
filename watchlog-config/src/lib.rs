//! Configuration for the watchlog tools.
//!
//! Settings come from `$WATCHLOG_CONFIG_PATH`, inline `$WATCHLOG_CONFIG_JSON`,
//! a `watchlog.toml`/`watchlog.json` in the working directory, or the
//! built-in defaults, in that order. Loaded settings pass through guard rails
//! that reject unusable values and collect warnings for questionable ones.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigSource, FilterConfig, ScheduleConfig, WatchlogConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails};
