use super::comparison::{ComparisonOperator, NumericCondition};
use super::tags::TagMode;
use super::types::{FilterCriteria, TagCriteria, normalize_text};

/// Fluent API for building filter criteria
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    criteria: FilterCriteria,
}

impl FilterCriteriaBuilder {
    /// Create a builder with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    // === Text filters ===

    /// Filter by title substring (case-insensitive)
    pub fn title_contains(mut self, text: impl Into<String>) -> Self {
        self.criteria.title = normalize_text(Some(text.into()));
        self
    }

    /// Filter by type category (case-insensitive equality)
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.criteria.kind = normalize_text(Some(kind.into()));
        self
    }

    /// Convenience for `kind("anime")`
    pub fn anime_only(self) -> Self {
        self.kind("anime")
    }

    /// Convenience for `kind("manga")`
    pub fn manga_only(self) -> Self {
        self.kind("manga")
    }

    // === Numeric filters ===

    pub fn rating(mut self, operator: ComparisonOperator, threshold: f64) -> Self {
        self.criteria.rating = Some(NumericCondition::new(operator, threshold));
        self
    }

    pub fn episodes(mut self, operator: ComparisonOperator, threshold: f64) -> Self {
        self.criteria.episodes = Some(NumericCondition::new(operator, threshold));
        self
    }

    pub fn year(mut self, operator: ComparisonOperator, threshold: f64) -> Self {
        self.criteria.year = Some(NumericCondition::new(operator, threshold));
        self
    }

    // === Tag filters ===

    /// Require tags under the given mode; an empty list clears the tag filter
    pub fn tags<I, S>(mut self, tags: I, mode: TagMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.tags = TagCriteria::new(tags, mode);
        self
    }

    /// Require a single tag
    pub fn tag(self, tag: impl Into<String>) -> Self {
        self.tags([tag.into()], TagMode::All)
    }

    // === Result size ===

    pub fn limit(mut self, limit: i64) -> Self {
        self.criteria.limit = Some(limit);
        self
    }

    /// Build the final criteria
    pub fn build(self) -> FilterCriteria {
        self.criteria
    }
}

impl FilterCriteria {
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::new()
    }
}
