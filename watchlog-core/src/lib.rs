//! # watchlog core
//!
//! Catalog filtering and episode schedule planning for a personal anime/manga
//! tracker.
//!
//! ## Overview
//!
//! - **Query System**: multi-criteria filtering over catalog snapshots
//!   (type, title, numeric comparisons, tag membership, result limit)
//! - **Schedules**: deterministic distribution of episodes across weekdays,
//!   with per-day viewing time and plan statistics
//!
//! Both engines are pure functions of their inputs. They never touch storage
//! and hold no state between calls, so one instance can serve any number of
//! threads.
//!
//! ## Architecture
//!
//! - [`query`]: comparison operators, tag matching, criteria and the filter engine
//! - [`schedule`]: weekday cycle, schedule generator and feasibility limits
//! - [`error`]: the error type shared by both
//!
//! ## Examples
//!
//! ```
//! use watchlog_core::{
//!     query::{ComparisonOperator, FilterCriteria, FilterEngine, TagMode},
//!     schedule::ScheduleGenerator,
//!     CatalogItem, ScheduleRequest, Weekday,
//! };
//!
//! let catalog = vec![
//!     CatalogItem::new(1, "Frieren", "anime", 28)?
//!         .with_rating(9.3)
//!         .with_tags(["Fantasy", "Drama"]),
//!     CatalogItem::new(2, "Nichijou", "anime", 26)?
//!         .with_rating(8.4)
//!         .with_tags(["Comedy"]),
//! ];
//!
//! let criteria = FilterCriteria::builder()
//!     .anime_only()
//!     .rating(ComparisonOperator::GreaterOrEqual, 8.5)
//!     .tags(["fantasy", "action"], TagMode::Any)
//!     .build();
//! let hits = FilterEngine::new().apply(&catalog, &criteria);
//! assert_eq!(hits.len(), 1);
//!
//! let request = ScheduleRequest::new(hits[0].episodes, 4).starting_on(Weekday::Friday);
//! let schedule = ScheduleGenerator::new().generate(&request)?;
//! assert_eq!(schedule.summary.viewing_days, 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Error types
pub mod error;

/// Catalog filtering with typed criteria
pub mod query;

/// Episode viewing schedules
pub mod schedule;

pub use error::{Result, WatchlogError};
pub use watchlog_model::{
    CatalogItem, ModelError, Schedule, ScheduleEntry, ScheduleRequest, ScheduleSummary,
    ViewingDuration, Weekday, WorkId,
};
