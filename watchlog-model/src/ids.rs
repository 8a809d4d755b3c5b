use std::fmt;

/// Store-assigned identifier of a cataloged work
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorkId(i64);

impl WorkId {
    pub fn new(id: i64) -> Self {
        WorkId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for WorkId {
    fn from(id: i64) -> Self {
        WorkId(id)
    }
}
