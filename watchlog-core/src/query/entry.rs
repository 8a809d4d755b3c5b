//! Read-only view of a catalog entry as seen by the filter engine.
//!
//! Store types implement [`CatalogEntry`] to be filtered in place, without
//! first copying into [`CatalogItem`].

use watchlog_model::CatalogItem;

pub trait CatalogEntry: Send + Sync {
    fn title(&self) -> &str;

    /// Type category ("anime", "manga", ...)
    fn kind(&self) -> &str;

    fn year(&self) -> Option<i32>;

    fn rating(&self) -> Option<f64>;

    /// Episode or chapter count
    fn episodes(&self) -> u32;

    fn tags(&self) -> &[String];
}

impl CatalogEntry for CatalogItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn episodes(&self) -> u32 {
        self.episodes
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl<T: CatalogEntry> CatalogEntry for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn year(&self) -> Option<i32> {
        (**self).year()
    }

    fn rating(&self) -> Option<f64> {
        (**self).rating()
    }

    fn episodes(&self) -> u32 {
        (**self).episodes()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }
}
