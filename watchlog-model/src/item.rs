use crate::{
    error::{ModelError, Result},
    ids::WorkId,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One cataloged work (anime, manga, ...) as handed out by the store.
///
/// `kind` and `tags` are free text; matching against them is
/// case-insensitive, but the original spelling is preserved for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogItem {
    pub id: WorkId,
    pub title: String,
    /// Type category such as "anime" or "manga"
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
    /// Episode count for anime, chapter/volume count for manga
    #[cfg_attr(feature = "serde", serde(default))]
    pub episodes: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<WorkId>,
        title: impl Into<String>,
        kind: impl Into<String>,
        episodes: u32,
    ) -> Result<Self> {
        let item = Self {
            id: id.into(),
            title: title.into(),
            kind: kind.into(),
            year: None,
            rating: None,
            episodes,
            tags: Vec::new(),
        };
        item.validate()?;
        Ok(item)
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check the invariants the store is expected to uphold.
    ///
    /// Deserialized snapshots bypass [`CatalogItem::new`], so loaders call this
    /// explicitly.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::InvalidItem(format!(
                "work {} has an empty title",
                self.id
            )));
        }
        Ok(())
    }

    pub fn has_rating(&self) -> bool {
        self.rating.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_title() {
        let err = CatalogItem::new(1, "   ", "anime", 12).unwrap_err();
        assert!(matches!(err, ModelError::InvalidItem(_)));
    }

    #[test]
    fn builder_methods_fill_optional_fields() {
        let item = CatalogItem::new(7, "Mushishi", "anime", 26)
            .unwrap()
            .with_year(2005)
            .with_rating(8.7)
            .with_tags(["Mystery", "Slice of Life"]);

        assert_eq!(item.id.value(), 7);
        assert_eq!(item.year, Some(2005));
        assert_eq!(item.rating, Some(8.7));
        assert_eq!(item.tags, vec!["Mystery", "Slice of Life"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_snapshot_with_missing_optionals() {
        let raw = r#"{"id": 3, "title": "Berserk", "type": "manga"}"#;
        let item: CatalogItem = serde_json::from_str(raw).unwrap();

        assert_eq!(item.kind, "manga");
        assert_eq!(item.rating, None);
        assert_eq!(item.episodes, 0);
        assert!(item.tags.is_empty());
    }
}
