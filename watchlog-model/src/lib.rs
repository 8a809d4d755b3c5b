//! Core data model definitions shared across watchlog crates.
#![allow(missing_docs)]

pub mod duration;
pub mod error;
pub mod ids;
pub mod item;
pub mod schedule;
pub mod weekday;

// Intentionally curated re-exports for downstream consumers.
pub use duration::{DEFAULT_EPISODE_MINUTES, ViewingDuration};
pub use error::{ModelError, Result as ModelResult};
pub use ids::WorkId;
pub use item::CatalogItem;
pub use schedule::{Schedule, ScheduleEntry, ScheduleRequest, ScheduleSummary};
pub use weekday::Weekday;
