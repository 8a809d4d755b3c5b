use super::entry::CatalogEntry;
use serde::Serialize;

/// Aggregate figures shown next to a (filtered) catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CatalogStats {
    pub count: usize,
    /// Mean over entries that have a rating; 0.0 when none do
    pub average_rating: f64,
    pub rated: usize,
    /// Mean over all entries; 0.0 for an empty set
    pub average_episodes: f64,
}

impl CatalogStats {
    pub fn from_entries<'a, T, I>(entries: I) -> Self
    where
        T: CatalogEntry + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut count = 0usize;
        let mut rated = 0usize;
        let mut rating_sum = 0.0;
        let mut episode_sum = 0u64;

        for entry in entries {
            count += 1;
            episode_sum += entry.episodes() as u64;
            if let Some(rating) = entry.rating() {
                rated += 1;
                rating_sum += rating;
            }
        }

        Self {
            count,
            average_rating: if rated == 0 {
                0.0
            } else {
                rating_sum / rated as f64
            },
            rated,
            average_episodes: if count == 0 {
                0.0
            } else {
                episode_sum as f64 / count as f64
            },
        }
    }
}
