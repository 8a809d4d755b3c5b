//! Catalog filtering.
//!
//! A [`FilterCriteria`] is compiled once per call into case-folded needles,
//! then tested against every entry in catalog order. Each specified dimension
//! is an independent predicate and an entry must pass all of them, so adding a
//! dimension never changes how the others behave.
//!
//! Large catalogs are tested in parallel with rayon. Results are collected in
//! input order either way, and the limit is applied afterwards, so both paths
//! return the same slice of the catalog.

use super::comparison::NumericCondition;
use super::entry::CatalogEntry;
use super::tags::{self, TagMode, fold_tag};
use super::types::FilterCriteria;
use rayon::prelude::*;
use tracing::debug;

/// Stateless filter over catalog snapshots
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine {
    parallel_threshold: usize,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterEngine {
    /// Catalog size from which filtering runs on the rayon pool
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

    pub fn new() -> Self {
        Self::with_parallel_threshold(Self::DEFAULT_PARALLEL_THRESHOLD)
    }

    /// `usize::MAX` keeps every call sequential.
    pub fn with_parallel_threshold(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Select the entries of `catalog` that satisfy `criteria`, in catalog
    /// order, truncated to `criteria.limit`.
    pub fn apply<'a, T: CatalogEntry>(
        &self,
        catalog: &'a [T],
        criteria: &FilterCriteria,
    ) -> Vec<&'a T> {
        let limit = match criteria.limit {
            Some(limit) if limit <= 0 => {
                debug!(limit, "non-positive filter limit, returning no entries");
                return Vec::new();
            }
            Some(limit) => usize::try_from(limit).unwrap_or(usize::MAX),
            None => usize::MAX,
        };

        let compiled = CompiledFilter::new(criteria);
        let parallel = catalog.len() >= self.parallel_threshold;

        let selected: Vec<&'a T> = if parallel {
            let mut hits: Vec<&'a T> = catalog
                .par_iter()
                .filter(|entry| compiled.test(*entry))
                .collect();
            hits.truncate(limit);
            hits
        } else {
            catalog
                .iter()
                .filter(|entry| compiled.test(*entry))
                .take(limit)
                .collect()
        };

        debug!(
            catalog = catalog.len(),
            matched = selected.len(),
            active_filters = criteria.active_count(),
            parallel,
            "catalog filter applied"
        );

        selected
    }

    /// Like [`apply`](Self::apply) but returns owned copies.
    pub fn apply_cloned<T: CatalogEntry + Clone>(
        &self,
        catalog: &[T],
        criteria: &FilterCriteria,
    ) -> Vec<T> {
        self.apply(catalog, criteria).into_iter().cloned().collect()
    }

    /// Test a single entry against every specified criterion (ignores limit).
    pub fn matches<T: CatalogEntry>(&self, entry: &T, criteria: &FilterCriteria) -> bool {
        CompiledFilter::new(criteria).test(entry)
    }
}

/// Criteria with text needles folded up front
#[derive(Debug)]
struct CompiledFilter {
    title: Option<String>,
    kind: Option<String>,
    rating: Option<NumericCondition>,
    episodes: Option<NumericCondition>,
    year: Option<NumericCondition>,
    tags: Option<(Vec<String>, TagMode)>,
}

impl CompiledFilter {
    fn new(criteria: &FilterCriteria) -> Self {
        Self {
            title: criteria.title.as_deref().map(str::to_lowercase),
            kind: criteria.kind.as_deref().map(str::to_lowercase),
            rating: criteria.rating,
            episodes: criteria.episodes,
            year: criteria.year,
            tags: criteria.tags.as_ref().map(|tags| {
                let folded = tags.tags().iter().map(|tag| fold_tag(tag)).collect();
                (folded, tags.mode())
            }),
        }
    }

    fn test<T: CatalogEntry>(&self, entry: &T) -> bool {
        if let Some(needle) = &self.title
            && !entry.title().to_lowercase().contains(needle.as_str())
        {
            return false;
        }

        if let Some(kind) = &self.kind
            && entry.kind().to_lowercase() != *kind
        {
            return false;
        }

        if let Some(rating) = &self.rating
            && !rating.matches(entry.rating())
        {
            return false;
        }

        if let Some(episodes) = &self.episodes
            && !episodes.matches(Some(entry.episodes() as f64))
        {
            return false;
        }

        if let Some(year) = &self.year
            && !year.matches(entry.year().map(f64::from))
        {
            return false;
        }

        if let Some((required, mode)) = &self.tags
            && !tags::matches(entry.tags(), required.as_slice(), *mode)
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ComparisonOperator, TagMode};
    use watchlog_model::CatalogItem;

    fn work(id: i64, title: &str, kind: &str, rating: Option<f64>, episodes: u32, tags: &[&str]) -> CatalogItem {
        let item = CatalogItem::new(id, title, kind, episodes)
            .unwrap()
            .with_tags(tags.iter().copied());
        match rating {
            Some(rating) => item.with_rating(rating),
            None => item,
        }
    }

    fn sample_catalog() -> Vec<CatalogItem> {
        vec![
            work(1, "Fullmetal Alchemist", "Anime", Some(9.1), 64, &["Action", "Fantasy"]),
            work(2, "Nichijou", "anime", Some(8.4), 26, &["Comedy"]),
            work(3, "Vagabond", "Manga", Some(9.2), 37, &["Action", "Drama"]),
            work(4, "Unrated Pilot", "anime", None, 1, &["Action"]),
            work(5, "Frieren", "ANIME", Some(9.3), 28, &["Fantasy", "Drama"]),
        ]
    }

    fn ids(result: &[&CatalogItem]) -> Vec<i64> {
        result.iter().map(|item| item.id.value()).collect()
    }

    #[test]
    fn empty_criteria_returns_whole_catalog_in_order() {
        let catalog = sample_catalog();
        let result = FilterEngine::new().apply(&catalog, &FilterCriteria::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let catalog: Vec<CatalogItem> = Vec::new();
        let criteria = FilterCriteria::builder().anime_only().build();
        assert!(FilterEngine::new().apply(&catalog, &criteria).is_empty());
    }

    #[test]
    fn kind_matches_case_insensitively() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::builder().kind("anime").build();
        assert_eq!(ids(&FilterEngine::new().apply(&catalog, &criteria)), vec![1, 2, 4, 5]);
    }

    #[test]
    fn missing_rating_is_filtered_out() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::builder()
            .rating(ComparisonOperator::NotEqual, 100.0)
            .build();
        assert_eq!(ids(&FilterEngine::new().apply(&catalog, &criteria)), vec![1, 2, 3, 5]);
    }

    #[test]
    fn combined_criteria_intersect() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::builder()
            .anime_only()
            .rating(ComparisonOperator::GreaterOrEqual, 8.5)
            .episodes(ComparisonOperator::LessOrEqual, 50.0)
            .tags(["fantasy"], TagMode::All)
            .build();
        assert_eq!(ids(&FilterEngine::new().apply(&catalog, &criteria)), vec![5]);
    }

    #[test]
    fn tag_mode_only_governs_listed_tags() {
        let catalog = sample_catalog();
        let any = FilterCriteria::builder()
            .tags(["comedy", "drama"], TagMode::Any)
            .build();
        let all = FilterCriteria::builder()
            .tags(["fantasy", "drama"], TagMode::All)
            .build();

        let engine = FilterEngine::new();
        assert_eq!(ids(&engine.apply(&catalog, &any)), vec![2, 3, 5]);
        assert_eq!(ids(&engine.apply(&catalog, &all)), vec![5]);
    }

    #[test]
    fn title_search_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::builder().title_contains("ALCHEM").build();
        assert_eq!(ids(&FilterEngine::new().apply(&catalog, &criteria)), vec![1]);
    }

    #[test]
    fn year_filter_skips_items_without_year() {
        let catalog = vec![
            work(1, "Cowboy Bebop", "anime", Some(8.9), 26, &[]).with_year(1998),
            work(2, "Unknown", "anime", Some(7.0), 12, &[]),
            work(3, "Mob Psycho 100", "anime", Some(8.5), 12, &[]).with_year(2016),
        ];
        let criteria = FilterCriteria::builder()
            .year(ComparisonOperator::GreaterOrEqual, 2000.0)
            .build();
        assert_eq!(ids(&FilterEngine::new().apply(&catalog, &criteria)), vec![3]);
    }

    #[test]
    fn limit_truncates_after_filtering() {
        let catalog = sample_catalog();
        let engine = FilterEngine::new();

        let two = FilterCriteria::builder().anime_only().limit(2).build();
        assert_eq!(ids(&engine.apply(&catalog, &two)), vec![1, 2]);

        let oversized = FilterCriteria::builder().limit(50).build();
        assert_eq!(engine.apply(&catalog, &oversized).len(), 5);
    }

    #[test]
    fn non_positive_limit_yields_nothing() {
        let catalog = sample_catalog();
        let engine = FilterEngine::new();
        for limit in [0, -3] {
            let criteria = FilterCriteria::builder().limit(limit).build();
            assert!(engine.apply(&catalog, &criteria).is_empty());
        }
    }

    #[test]
    fn parallel_path_preserves_order_and_limit() {
        let catalog: Vec<CatalogItem> = (0..500)
            .map(|i| {
                let kind = if i % 3 == 0 { "manga" } else { "anime" };
                work(i, &format!("Work {i}"), kind, Some((i % 10) as f64), i as u32, &[])
            })
            .collect();
        let criteria = FilterCriteria::builder()
            .anime_only()
            .rating(ComparisonOperator::Greater, 4.0)
            .limit(40)
            .build();

        let sequential = FilterEngine::with_parallel_threshold(usize::MAX).apply(&catalog, &criteria);
        let parallel = FilterEngine::with_parallel_threshold(1).apply(&catalog, &criteria);

        assert_eq!(ids(&sequential), ids(&parallel));
        assert_eq!(parallel.len(), 40);
    }

    #[test]
    fn apply_cloned_leaves_catalog_untouched() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let criteria = FilterCriteria::builder().manga_only().build();

        let owned = FilterEngine::new().apply_cloned(&catalog, &criteria);

        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].title, "Vagabond");
        assert_eq!(catalog, before);
    }
}
