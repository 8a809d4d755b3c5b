use crate::{duration::ViewingDuration, weekday::Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input for one schedule generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleRequest {
    pub total_episodes: u32,
    pub episodes_per_day: u32,
    /// `None` means "start today"
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_day: Option<Weekday>,
}

impl ScheduleRequest {
    pub fn new(total_episodes: u32, episodes_per_day: u32) -> Self {
        Self {
            total_episodes,
            episodes_per_day,
            start_day: None,
        }
    }

    pub fn starting_on(mut self, day: Weekday) -> Self {
        self.start_day = Some(day);
        self
    }
}

/// One day of a viewing plan
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleEntry {
    /// 1-based week of the plan
    pub week: u32,
    pub weekday: Weekday,
    /// Consecutive episode numbers; empty only for a rest-day placeholder
    pub episodes: Vec<u32>,
    pub duration: ViewingDuration,
}

impl ScheduleEntry {
    pub fn episode_count(&self) -> u32 {
        self.episodes.len() as u32
    }

    pub fn is_rest_day(&self) -> bool {
        self.episodes.is_empty()
    }

    /// `"4, 5, 6"` for a viewing day, `"-"` for a rest day.
    pub fn episodes_label(&self) -> String {
        if self.episodes.is_empty() {
            return "-".to_string();
        }
        self.episodes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Derived statistics for a whole plan
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleSummary {
    pub total_duration: ViewingDuration,
    /// Days that received at least one episode
    pub viewing_days: u32,
    pub weeks: u32,
    pub average_per_day: f64,
}

/// A generated plan: ordered entries plus summary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    pub summary: ScheduleSummary,
}

impl Schedule {
    /// Number of episodes distributed across all entries.
    pub fn episode_count(&self) -> u32 {
        self.entries.iter().map(ScheduleEntry::episode_count).sum()
    }

    /// Whether every episode from 1 to `total_episodes` was assigned.
    pub fn is_complete(&self, total_episodes: u32) -> bool {
        !self.entries.is_empty() && self.episode_count() == total_episodes
    }

    pub fn viewing_entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|entry| !entry.is_rest_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(week: u32, weekday: Weekday, episodes: Vec<u32>) -> ScheduleEntry {
        let duration = ViewingDuration::for_episodes(episodes.len() as u32, 24);
        ScheduleEntry {
            week,
            weekday,
            episodes,
            duration,
        }
    }

    #[test]
    fn episodes_label_uses_dash_for_rest_days() {
        assert_eq!(entry(1, Weekday::Monday, vec![1, 2, 3]).episodes_label(), "1, 2, 3");
        assert_eq!(entry(1, Weekday::Tuesday, vec![]).episodes_label(), "-");
    }

    #[test]
    fn completeness_counts_only_assigned_episodes() {
        let schedule = Schedule {
            entries: vec![
                entry(1, Weekday::Monday, vec![1, 2]),
                entry(1, Weekday::Tuesday, vec![]),
                entry(1, Weekday::Wednesday, vec![3]),
            ],
            summary: ScheduleSummary {
                total_duration: ViewingDuration::for_episodes(3, 24),
                viewing_days: 2,
                weeks: 1,
                average_per_day: 1.5,
            },
        };

        assert!(schedule.is_complete(3));
        assert!(!schedule.is_complete(4));
        assert_eq!(schedule.viewing_entries().count(), 2);
    }
}
