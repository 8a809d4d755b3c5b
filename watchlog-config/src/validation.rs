use std::collections::BTreeSet;
use thiserror::Error;
use watchlog_model::Weekday;

use super::models::{FilterConfig, ScheduleConfig, WatchlogConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("schedule.episode_minutes must be positive")]
    ZeroEpisodeMinutes,
    #[error("schedule.default_episodes_per_day must be positive")]
    ZeroDefaultQuota,
    #[error("feasibility limit {field} must be positive")]
    ZeroLimit { field: &'static str },
    #[error("every weekday is listed in schedule.rest_days; no day is left for viewing")]
    NoViewingDays,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(&mut self, message: S, hint: H) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(config: &WatchlogConfig) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    warnings.extend(check_schedule(&config.schedule)?);
    warnings.extend(check_filter(&config.filter));
    Ok(warnings)
}

fn check_schedule(schedule: &ScheduleConfig) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if schedule.episode_minutes == 0 {
        return Err(ConfigGuardRailError::ZeroEpisodeMinutes);
    }
    if schedule.default_episodes_per_day == 0 {
        return Err(ConfigGuardRailError::ZeroDefaultQuota);
    }
    if schedule.limits.max_episodes_per_day == 0 {
        return Err(ConfigGuardRailError::ZeroLimit {
            field: "schedule.limits.max_episodes_per_day",
        });
    }
    if schedule.limits.max_viewing_days == 0 {
        return Err(ConfigGuardRailError::ZeroLimit {
            field: "schedule.limits.max_viewing_days",
        });
    }

    let rest: BTreeSet<Weekday> = schedule.rest_days.iter().copied().collect();
    if rest.len() == Weekday::COUNT {
        return Err(ConfigGuardRailError::NoViewingDays);
    }
    if rest.len() < schedule.rest_days.len() {
        warnings.push("schedule.rest_days lists the same weekday more than once");
    }

    if schedule.default_episodes_per_day > schedule.limits.max_episodes_per_day {
        warnings.push_with_hint(
            format!(
                "default of {} episodes per day exceeds the feasibility limit of {}",
                schedule.default_episodes_per_day, schedule.limits.max_episodes_per_day
            ),
            "Every plan without an explicit --per-day will be reported as infeasible",
        );
    }

    Ok(warnings)
}

fn check_filter(filter: &FilterConfig) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if filter.parallel_threshold == 0 {
        warnings.push_with_hint(
            "filter.parallel_threshold is 0; every filter call runs on the thread pool",
            "Small catalogs are usually faster sequentially; the default is 10000",
        );
    }
    if let Some(limit) = filter.default_limit
        && limit <= 0
    {
        warnings.push_with_hint(
            format!("filter.default_limit is {limit}; filters without --limit return nothing"),
            "Remove default_limit or set it to a positive number",
        );
    }

    warnings
}
