pub mod error;

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::{ConfigSource, WatchlogConfig};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

/// Validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: WatchlogConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

/// Resolves, parses and guard-rails the configuration.
///
/// An explicit path (e.g. `--config`) bypasses the environment lookup.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    root: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Directory searched for the default candidate files.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) = match &self.path {
            Some(path) => {
                let config =
                    WatchlogConfig::load_from_file(path).map_err(ConfigLoadError::Source)?;
                (config, ConfigSource::File(path.clone()))
            }
            None => {
                let root = self.root.as_deref().unwrap_or(Path::new("."));
                WatchlogConfig::load_with(|key| std::env::var(key).ok(), root)
                    .map_err(ConfigLoadError::Source)?
            }
        };

        let warnings = apply_guard_rails(&config)?;
        info!(source = %source, "watchlog configuration loaded");
        for warning in warnings.iter() {
            match &warning.hint {
                Some(hint) => warn!(hint = %hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }
}
