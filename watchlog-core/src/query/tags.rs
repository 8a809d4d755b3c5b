//! Tag membership checks.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How a list of required tags combines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Every listed tag must be present
    #[default]
    #[serde(alias = "and")]
    All,
    /// At least one listed tag must be present
    #[serde(alias = "or")]
    Any,
}

impl TagMode {
    pub fn label(&self) -> &'static str {
        match self {
            TagMode::All => "all",
            TagMode::Any => "any",
        }
    }
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-folded form used for every tag comparison.
#[inline]
pub(crate) fn fold_tag(tag: &str) -> String {
    tag.to_lowercase()
}

/// Decide whether `item_tags` satisfies `required` under `mode`.
///
/// Labels compare case-insensitively but otherwise exactly: "action" matches
/// "Action" and never "action-comedy". An empty `required` list is no
/// constraint.
pub fn matches<T, R>(item_tags: &[T], required: &[R], mode: TagMode) -> bool
where
    T: AsRef<str>,
    R: AsRef<str>,
{
    if required.is_empty() {
        return true;
    }

    let present: HashSet<String> = item_tags
        .iter()
        .map(|tag| fold_tag(tag.as_ref()))
        .collect();
    let mut wanted = required.iter().map(|tag| fold_tag(tag.as_ref()));

    match mode {
        TagMode::All => wanted.all(|tag| present.contains(&tag)),
        TagMode::Any => wanted.any(|tag| present.contains(&tag)),
    }
}
