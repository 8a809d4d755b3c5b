use anyhow::{Context, bail};
use std::{fs, path::Path};
use tracing::debug;
use watchlog_model::CatalogItem;

/// Read a catalog snapshot: a JSON array of items.
///
/// Every item is validated; the first invalid one fails the whole load.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<CatalogItem>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let items = parse_catalog(&contents)
        .with_context(|| format!("invalid catalog {}", path.display()))?;
    debug!(path = %path.display(), items = items.len(), "catalog loaded");
    Ok(items)
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Vec<CatalogItem>> {
    let items: Vec<CatalogItem> = serde_json::from_str(raw)?;
    for (index, item) in items.iter().enumerate() {
        if let Err(err) = item.validate() {
            bail!("item {index} (id {}): {err}", item.id);
        }
    }
    Ok(items)
}
