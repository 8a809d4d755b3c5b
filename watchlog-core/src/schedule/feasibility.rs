//! Advisory limits on how aggressive a viewing plan may be.
//!
//! A plan that breaks a limit is still generated; the report lets the caller
//! warn before committing to it.

use super::generator::validate_request;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use watchlog_model::ScheduleRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeasibilityLimits {
    pub max_episodes_per_day: u32,
    pub max_viewing_days: u32,
}

impl Default for FeasibilityLimits {
    fn default() -> Self {
        Self {
            max_episodes_per_day: 10,
            max_viewing_days: 365,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeasibilityViolation {
    QuotaTooHigh { requested: u32, max: u32 },
    TooManyDays { days: u32, max: u32 },
}

impl fmt::Display for FeasibilityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeasibilityViolation::QuotaTooHigh { requested, max } => write!(
                f,
                "{requested} episodes per day exceeds the limit of {max}"
            ),
            FeasibilityViolation::TooManyDays { days, max } => {
                write!(f, "plan needs {days} viewing days, limit is {max}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeasibilityReport {
    pub viewing_days: u32,
    pub violations: Vec<FeasibilityViolation>,
}

impl FeasibilityReport {
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }
}

impl FeasibilityLimits {
    /// Check `request` against these limits.
    ///
    /// Fails only for requests the generator itself would reject.
    pub fn check(&self, request: &ScheduleRequest) -> Result<FeasibilityReport> {
        validate_request(request)?;

        let viewing_days = request.total_episodes.div_ceil(request.episodes_per_day);
        let mut violations = Vec::new();

        if request.episodes_per_day > self.max_episodes_per_day {
            violations.push(FeasibilityViolation::QuotaTooHigh {
                requested: request.episodes_per_day,
                max: self.max_episodes_per_day,
            });
        }
        if viewing_days > self.max_viewing_days {
            violations.push(FeasibilityViolation::TooManyDays {
                days: viewing_days,
                max: self.max_viewing_days,
            });
        }

        Ok(FeasibilityReport {
            viewing_days,
            violations,
        })
    }
}
