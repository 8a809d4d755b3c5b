use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};
use watchlog_core::query::FilterEngine;
use watchlog_core::schedule::{FeasibilityLimits, ScheduleGenerator};
use watchlog_model::{DEFAULT_EPISODE_MINUTES, Weekday};

pub const CONFIG_PATH_VAR: &str = "WATCHLOG_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "WATCHLOG_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "watchlog.toml",
    "watchlog.json",
    "config/watchlog.toml",
    "config/watchlog.json",
];

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (via {CONFIG_PATH_VAR})", path.display())
            }
            ConfigSource::EnvInline => f.write_str(CONFIG_JSON_VAR),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Top-level settings for the watchlog tools.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchlogConfig {
    pub schedule: ScheduleConfig,
    pub filter: FilterConfig,
}

/// Viewing plan settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Assumed length of one episode in minutes. Raise it for shows with
    /// double-length episodes; per-day and total durations scale with it.
    pub episode_minutes: u32,
    /// Daily quota used when the caller does not name one.
    pub default_episodes_per_day: u32,
    /// Weekdays that never receive episodes. They still count toward the
    /// seven-day week boundary, so a plan with rest days spans more weeks.
    pub rest_days: Vec<Weekday>,
    /// Print rest days inside the plan as empty entries.
    pub show_rest_days: bool,
    /// Advisory ceilings; plans above them are generated with a warning.
    pub limits: FeasibilityLimits,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            episode_minutes: DEFAULT_EPISODE_MINUTES,
            default_episodes_per_day: 2,
            rest_days: Vec::new(),
            show_rest_days: false,
            limits: FeasibilityLimits::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn generator(&self) -> ScheduleGenerator {
        ScheduleGenerator::new()
            .with_episode_minutes(self.episode_minutes)
            .with_rest_days(self.rest_days.iter().copied())
            .with_rest_day_placeholders(self.show_rest_days)
            .with_limits(self.limits)
    }
}

/// Catalog filter settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Catalog size at which filtering fans out across the rayon pool.
    pub parallel_threshold: usize,
    /// Limit applied when the caller does not pass one.
    pub default_limit: Option<i64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: FilterEngine::DEFAULT_PARALLEL_THRESHOLD,
            default_limit: None,
        }
    }
}

impl FilterConfig {
    pub fn engine(&self) -> FilterEngine {
        FilterEngine::with_parallel_threshold(self.parallel_threshold)
    }
}

impl WatchlogConfig {
    pub fn schedule_generator(&self) -> ScheduleGenerator {
        self.schedule.generator()
    }

    pub fn filter_engine(&self) -> FilterEngine {
        self.filter.engine()
    }

    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$WATCHLOG_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$WATCHLOG_CONFIG_JSON` (inline JSON),
    /// 3) the first candidate file found in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`Self::load_from_env`] with an explicit variable lookup and search root.
    pub fn load_with<F>(lookup: F, root: &Path) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read watchlog config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid watchlog config {}", path.display())),
            Some("toml") | Some("tml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid watchlog config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse watchlog config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid watchlog config json: {err}"))
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}
