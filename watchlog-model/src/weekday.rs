use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Canonical weekday enumeration, Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Number of days in one full cycle
    pub const COUNT: usize = 7;

    pub fn all() -> &'static [Weekday] {
        use Weekday::*;
        &[Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Weekday> {
        Self::all().get(index as usize).copied()
    }

    /// The following day, wrapping Sunday back to Monday.
    pub fn succ(self) -> Weekday {
        Self::all()[(self.index() as usize + 1) % Self::COUNT]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn short_label(&self) -> &'static str {
        &self.label()[..3]
    }

    /// Current weekday in the local timezone.
    #[cfg(feature = "chrono")]
    pub fn today() -> Weekday {
        use chrono::Datelike;
        chrono::Local::now().weekday().into()
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Weekday {
    type Err = ModelError;

    /// Accepts full English names and three-letter abbreviations in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|day| {
                let label = day.label().to_ascii_lowercase();
                needle == label || needle == label[..3]
            })
            .ok_or_else(|| ModelError::InvalidWeekday(s.to_string()))
    }
}

impl TryFrom<String> for Weekday {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Lowercase full name, the form written to config and JSON.
impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.label().to_ascii_lowercase()
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        // chrono also counts from Monday = 0
        Self::all()[value.num_days_from_monday() as usize]
    }
}

#[cfg(feature = "chrono")]
impl From<Weekday> for chrono::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}
