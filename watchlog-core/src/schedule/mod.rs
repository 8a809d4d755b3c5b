//! Episode viewing plans.

pub mod cycle;
pub mod feasibility;
pub mod generator;

pub use cycle::{WeekdayCycle, sequence_from};
pub use feasibility::{FeasibilityLimits, FeasibilityReport, FeasibilityViolation};
pub use generator::{ScheduleGenerator, validate_request};
