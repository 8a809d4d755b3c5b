use std::fmt;

/// Typical runtime of one anime episode, in minutes.
pub const DEFAULT_EPISODE_MINUTES: u32 = 24;

/// Whole-minute viewing time.
///
/// Renders as `"48m"` below an hour and `"1h 12m"` from an hour up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ViewingDuration {
    minutes: u64,
}

impl ViewingDuration {
    pub fn from_minutes(minutes: u64) -> Self {
        Self { minutes }
    }

    pub fn for_episodes(episodes: u32, minutes_per_episode: u32) -> Self {
        Self::from_minutes(episodes as u64 * minutes_per_episode as u64)
    }

    pub fn total_minutes(&self) -> u64 {
        self.minutes
    }

    pub fn hours(&self) -> u64 {
        self.minutes / 60
    }

    /// Minutes left over after whole hours
    pub fn minutes(&self) -> u64 {
        self.minutes % 60
    }
}

impl fmt::Display for ViewingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours() > 0 {
            write!(f, "{}h {}m", self.hours(), self.minutes())
        } else {
            write!(f, "{}m", self.minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_below_and_above_an_hour() {
        assert_eq!(ViewingDuration::for_episodes(2, 24).to_string(), "48m");
        assert_eq!(ViewingDuration::for_episodes(3, 24).to_string(), "1h 12m");
        assert_eq!(ViewingDuration::for_episodes(5, 24).to_string(), "2h 0m");
        assert_eq!(ViewingDuration::default().to_string(), "0m");
    }

    #[test]
    fn splits_hours_and_minutes() {
        let total = ViewingDuration::for_episodes(12, DEFAULT_EPISODE_MINUTES);
        assert_eq!(total.total_minutes(), 288);
        assert_eq!(total.hours(), 4);
        assert_eq!(total.minutes(), 48);
    }
}
