use super::comparison::{ComparisonOperator, NumericCondition};
use super::tags::{TagMode, fold_tag};
use crate::error::{Result, WatchlogError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Fully validated filter description.
///
/// Every field is independently optional; an absent field imposes no
/// constraint. Specified fields combine with logical AND. Deserialized
/// criteria are normalized the same way as [`FilterRequest`] conversions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CriteriaRecord")]
pub struct FilterCriteria {
    /// Case-insensitive title substring
    pub title: Option<String>,
    /// Case-insensitive type category equality
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub rating: Option<NumericCondition>,
    pub episodes: Option<NumericCondition>,
    pub year: Option<NumericCondition>,
    pub tags: Option<TagCriteria>,
    /// Keep only the first `limit` matches; zero or negative keeps none
    pub limit: Option<i64>,
}

/// Stored form of [`FilterCriteria`] before normalization
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CriteriaRecord {
    title: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    rating: Option<NumericCondition>,
    episodes: Option<NumericCondition>,
    year: Option<NumericCondition>,
    tags: Option<TagRecord>,
    limit: Option<i64>,
}

impl From<CriteriaRecord> for FilterCriteria {
    fn from(record: CriteriaRecord) -> Self {
        FilterCriteria {
            title: normalize_text(record.title),
            kind: normalize_text(record.kind),
            rating: record.rating,
            episodes: record.episodes,
            year: record.year,
            // an empty stored tag list means no tag constraint
            tags: record
                .tags
                .and_then(|stored| TagCriteria::new(stored.tags, stored.mode)),
            limit: record.limit,
        }
    }
}

/// Required tags and how they combine; never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TagRecord")]
pub struct TagCriteria {
    tags: Vec<String>,
    mode: TagMode,
}

#[derive(Debug, Deserialize)]
struct TagRecord {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    mode: TagMode,
}

impl TryFrom<TagRecord> for TagCriteria {
    type Error = WatchlogError;

    fn try_from(record: TagRecord) -> Result<Self> {
        TagCriteria::new(record.tags, record.mode).ok_or_else(|| {
            WatchlogError::InvalidRequest("tag criteria need at least one non-blank tag".into())
        })
    }
}

impl TagCriteria {
    /// Returns `None` when no usable tag remains after normalization.
    pub fn new<I, S>(tags: I, mode: TagMode) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = normalize_tags(tags.into_iter().map(Into::into));
        if tags.is_empty() {
            None
        } else {
            Some(Self { tags, mode })
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn mode(&self) -> TagMode {
        self.mode
    }
}

impl FilterCriteria {
    /// No constraint of any kind, including the limit.
    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0 && self.limit.is_none()
    }

    /// Number of specified predicate dimensions (the limit is not a predicate).
    pub fn active_count(&self) -> usize {
        [
            self.title.is_some(),
            self.kind.is_some(),
            self.rating.is_some(),
            self.episodes.is_some(),
            self.year.is_some(),
            self.tags.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// One human-readable line per specified criterion.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(format!("Title contains: {title}"));
        }
        if let Some(kind) = &self.kind {
            lines.push(format!("Type: {kind}"));
        }
        if let Some(rating) = &self.rating {
            lines.push(format!("Rating {rating}"));
        }
        if let Some(episodes) = &self.episodes {
            lines.push(format!("Episodes {episodes}"));
        }
        if let Some(year) = &self.year {
            lines.push(format!("Year {year}"));
        }
        if let Some(tags) = &self.tags {
            lines.push(format!("Tags ({}): {}", tags.mode, tags.tags.join(", ")));
        }
        if let Some(limit) = self.limit {
            lines.push(format!("Limit: {limit}"));
        }
        lines
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.describe();
        if lines.is_empty() {
            f.write_str("no filters applied")
        } else {
            f.write_str(&lines.join("\n"))
        }
    }
}

/// Filter state as a UI form or saved search holds it: operators are raw
/// tokens and text fields may be blank.
///
/// Convert with `FilterCriteria::try_from`. A value without an operator uses
/// the field's default operator (`>=` for rating, `=` otherwise); an operator
/// without a value is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub rating_operator: Option<String>,
    pub rating_value: Option<f64>,
    pub episodes_operator: Option<String>,
    pub episodes_value: Option<f64>,
    pub year_operator: Option<String>,
    pub year_value: Option<f64>,
    pub tags: Vec<String>,
    pub tag_mode: TagMode,
    pub limit: Option<i64>,
}

impl TryFrom<FilterRequest> for FilterCriteria {
    type Error = WatchlogError;

    fn try_from(request: FilterRequest) -> Result<Self> {
        Ok(FilterCriteria {
            title: normalize_text(request.title),
            kind: normalize_text(request.kind),
            rating: condition(
                request.rating_operator.as_deref(),
                request.rating_value,
                ComparisonOperator::GreaterOrEqual,
            )?,
            episodes: condition(
                request.episodes_operator.as_deref(),
                request.episodes_value,
                ComparisonOperator::Equal,
            )?,
            year: condition(
                request.year_operator.as_deref(),
                request.year_value,
                ComparisonOperator::Equal,
            )?,
            tags: TagCriteria::new(request.tags, request.tag_mode),
            limit: request.limit,
        })
    }
}

fn condition(
    operator: Option<&str>,
    value: Option<f64>,
    default: ComparisonOperator,
) -> Result<Option<NumericCondition>> {
    let Some(threshold) = value else {
        return Ok(None);
    };
    let operator = match operator.map(str::trim).filter(|op| !op.is_empty()) {
        Some(raw) => raw.parse()?,
        None => default,
    };
    Ok(Some(NumericCondition::new(operator, threshold)))
}

/// Trim, and treat blank text as absent.
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Trim, drop blanks, and deduplicate case-insensitively keeping the first
/// spelling seen.
pub(crate) fn normalize_tags(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.filter_map(|tag| {
        let trimmed = tag.trim();
        if trimmed.is_empty() || !seen.insert(fold_tag(trimmed)) {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
    .collect()
}
