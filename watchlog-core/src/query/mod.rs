pub mod builder;
pub mod comparison;
pub mod engine;
pub mod entry;
pub mod stats;
pub mod tags;
pub mod types;

pub use builder::FilterCriteriaBuilder;
pub use comparison::{ComparisonOperator, NumericCondition, evaluate};
pub use engine::FilterEngine;
pub use entry::CatalogEntry;
pub use stats::CatalogStats;
pub use tags::TagMode;
pub use types::*;
