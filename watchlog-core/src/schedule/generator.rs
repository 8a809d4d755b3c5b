use super::cycle::WeekdayCycle;
use super::feasibility::FeasibilityLimits;
use crate::error::{Result, WatchlogError};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use watchlog_model::{
    DEFAULT_EPISODE_MINUTES, Schedule, ScheduleEntry, ScheduleRequest, ScheduleSummary,
    ViewingDuration, Weekday,
};

/// Builds day-by-day viewing plans.
///
/// Episodes are handed out in order, `episodes_per_day` at a time, walking
/// the weekdays from the start day. Every seven visited days start a new week.
/// Rest days take part in that count but receive no episodes; they appear in
/// the plan as empty entries only when placeholders are enabled.
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    episode_minutes: u32,
    rest_days: BTreeSet<Weekday>,
    show_rest_days: bool,
    limits: FeasibilityLimits,
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleGenerator {
    pub fn new() -> Self {
        Self {
            episode_minutes: DEFAULT_EPISODE_MINUTES,
            rest_days: BTreeSet::new(),
            show_rest_days: false,
            limits: FeasibilityLimits::default(),
        }
    }

    pub fn with_episode_minutes(mut self, minutes: u32) -> Self {
        self.episode_minutes = minutes;
        self
    }

    pub fn with_rest_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.rest_days = days.into_iter().collect();
        self
    }

    /// Emit an empty entry for each rest day inside the plan.
    pub fn with_rest_day_placeholders(mut self, enabled: bool) -> Self {
        self.show_rest_days = enabled;
        self
    }

    pub fn with_limits(mut self, limits: FeasibilityLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn episode_minutes(&self) -> u32 {
        self.episode_minutes
    }

    pub fn limits(&self) -> &FeasibilityLimits {
        &self.limits
    }

    /// Generate a plan; an unset start day means today.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<Schedule> {
        let start = request.start_day.unwrap_or_else(Weekday::today);
        self.generate_from(request, start)
    }

    /// Generate a plan starting on `start`, ignoring `request.start_day`.
    pub fn generate_from(&self, request: &ScheduleRequest, start: Weekday) -> Result<Schedule> {
        validate_request(request)?;
        if self.episode_minutes == 0 {
            return Err(WatchlogError::InvalidRequest(
                "episode length must be at least one minute".to_string(),
            ));
        }
        if self.rest_days.len() >= Weekday::COUNT {
            return Err(WatchlogError::InvalidRequest(
                "every weekday is marked as a rest day".to_string(),
            ));
        }

        let report = self.limits.check(request)?;
        for violation in &report.violations {
            warn!(%violation, "viewing plan exceeds feasibility limits");
        }

        let total = u64::from(request.total_episodes);
        let per_day = u64::from(request.episodes_per_day);

        let mut entries = Vec::new();
        let mut next_episode: u64 = 1;
        let mut week: u32 = 1;

        for (visited, weekday) in WeekdayCycle::starting_at(start).enumerate() {
            if next_episode > total {
                break;
            }
            if visited > 0 && visited % Weekday::COUNT == 0 {
                week += 1;
            }

            if self.rest_days.contains(&weekday) {
                if self.show_rest_days {
                    entries.push(ScheduleEntry {
                        week,
                        weekday,
                        episodes: Vec::new(),
                        duration: ViewingDuration::default(),
                    });
                }
                continue;
            }

            let assigned = per_day.min(total - next_episode + 1);
            let episodes: Vec<u32> = (next_episode..next_episode + assigned)
                .map(|episode| episode as u32)
                .collect();
            next_episode += assigned;

            entries.push(ScheduleEntry {
                week,
                weekday,
                duration: ViewingDuration::for_episodes(
                    episodes.len() as u32,
                    self.episode_minutes,
                ),
                episodes,
            });
        }

        let summary = self.summarize(request, &entries);
        let schedule = Schedule { entries, summary };

        if !schedule.is_complete(request.total_episodes) {
            warn!(
                expected = request.total_episodes,
                assigned = schedule.episode_count(),
                "not every episode was assigned a day"
            );
        }

        debug!(
            total = request.total_episodes,
            per_day = request.episodes_per_day,
            start = %start,
            entries = schedule.entries.len(),
            weeks = schedule.summary.weeks,
            "viewing schedule generated"
        );

        Ok(schedule)
    }

    fn summarize(&self, request: &ScheduleRequest, entries: &[ScheduleEntry]) -> ScheduleSummary {
        let viewing_days = request.total_episodes.div_ceil(request.episodes_per_day);
        // Same as ceil(viewing_days / 7) unless rest days stretch the plan.
        let weeks = entries
            .last()
            .map(|entry| entry.week)
            .unwrap_or_else(|| viewing_days.div_ceil(Weekday::COUNT as u32));

        ScheduleSummary {
            total_duration: ViewingDuration::for_episodes(
                request.total_episodes,
                self.episode_minutes,
            ),
            viewing_days,
            weeks,
            average_per_day: f64::from(request.total_episodes) / f64::from(viewing_days),
        }
    }
}

/// Reject requests with a zero episode count or daily quota.
pub fn validate_request(request: &ScheduleRequest) -> Result<()> {
    if request.total_episodes == 0 {
        return Err(WatchlogError::InvalidRequest(
            "total episode count must be positive".to_string(),
        ));
    }
    if request.episodes_per_day == 0 {
        return Err(WatchlogError::InvalidRequest(
            "episodes per day must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Weekday::*;

    fn plan(total: u32, per_day: u32, start: Weekday) -> Schedule {
        ScheduleGenerator::new()
            .generate(&ScheduleRequest::new(total, per_day).starting_on(start))
            .unwrap()
    }

    fn days(schedule: &Schedule) -> Vec<(Weekday, Vec<u32>)> {
        schedule
            .entries
            .iter()
            .map(|entry| (entry.weekday, entry.episodes.clone()))
            .collect()
    }

    #[test]
    fn seven_episodes_two_per_day_from_wednesday() {
        let schedule = plan(7, 2, Wednesday);

        assert_eq!(
            days(&schedule),
            vec![
                (Wednesday, vec![1, 2]),
                (Thursday, vec![3, 4]),
                (Friday, vec![5, 6]),
                (Saturday, vec![7]),
            ]
        );
        assert_eq!(schedule.summary.viewing_days, 4);
        assert_eq!(schedule.summary.weeks, 1);
        assert!((schedule.summary.average_per_day - 1.75).abs() < f64::EPSILON);
        assert_eq!(schedule.summary.total_duration.total_minutes(), 7 * 24);
    }

    #[test]
    fn ten_episodes_three_per_day_from_monday() {
        let schedule = plan(10, 3, Monday);

        assert_eq!(
            days(&schedule),
            vec![
                (Monday, vec![1, 2, 3]),
                (Tuesday, vec![4, 5, 6]),
                (Wednesday, vec![7, 8, 9]),
                (Thursday, vec![10]),
            ]
        );
        assert_eq!(schedule.entries.last().unwrap().episode_count(), 1);
    }

    #[test]
    fn whole_show_in_one_day() {
        let schedule = plan(5, 5, Monday);

        assert_eq!(days(&schedule), vec![(Monday, vec![1, 2, 3, 4, 5])]);
        assert_eq!(schedule.summary.viewing_days, 1);
        assert_eq!(schedule.summary.weeks, 1);
        assert_eq!(schedule.entries[0].duration.to_string(), "2h 0m");
    }

    #[test]
    fn week_number_advances_every_seven_days() {
        let schedule = plan(24, 2, Saturday);

        let weeks: Vec<u32> = schedule.entries.iter().map(|entry| entry.week).collect();
        assert_eq!(weeks, vec![1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
        assert_eq!(schedule.entries[7].weekday, Saturday);
        assert_eq!(schedule.summary.weeks, 2);
        assert_eq!(schedule.summary.viewing_days, 12);
    }

    #[test]
    fn per_day_duration_uses_configured_minutes() {
        let generator = ScheduleGenerator::new().with_episode_minutes(45);
        let schedule = generator
            .generate(&ScheduleRequest::new(3, 2).starting_on(Sunday))
            .unwrap();

        assert_eq!(schedule.entries[0].duration.to_string(), "1h 30m");
        assert_eq!(schedule.entries[1].duration.to_string(), "45m");
        assert_eq!(schedule.summary.total_duration.to_string(), "2h 15m");
    }

    #[test]
    fn zero_episodes_or_quota_is_rejected() {
        let generator = ScheduleGenerator::new();
        for request in [ScheduleRequest::new(0, 1), ScheduleRequest::new(12, 0)] {
            let err = generator.generate(&request.starting_on(Monday)).unwrap_err();
            assert!(matches!(err, WatchlogError::InvalidRequest(_)));
        }
    }

    #[test]
    fn rest_days_are_skipped_by_default() {
        let generator = ScheduleGenerator::new().with_rest_days([Saturday, Sunday]);
        let schedule = generator
            .generate(&ScheduleRequest::new(8, 2).starting_on(Friday))
            .unwrap();

        assert_eq!(
            days(&schedule),
            vec![
                (Friday, vec![1, 2]),
                (Monday, vec![3, 4]),
                (Tuesday, vec![5, 6]),
                (Wednesday, vec![7, 8]),
            ]
        );
        assert_eq!(schedule.summary.viewing_days, 4);
    }

    #[test]
    fn rest_day_placeholders_stop_after_last_episode() {
        let generator = ScheduleGenerator::new()
            .with_rest_days([Sunday])
            .with_rest_day_placeholders(true);
        let schedule = generator
            .generate(&ScheduleRequest::new(14, 2).starting_on(Monday))
            .unwrap();

        // six viewing days fill week one, Sunday rests, Monday of week two ends it
        assert_eq!(schedule.entries.len(), 8);
        let sunday = &schedule.entries[6];
        assert_eq!(sunday.weekday, Sunday);
        assert!(sunday.is_rest_day());
        assert_eq!(sunday.episodes_label(), "-");

        let last = schedule.entries.last().unwrap();
        assert_eq!((last.week, last.weekday, last.episodes.clone()), (2, Monday, vec![13, 14]));
        assert_eq!(schedule.summary.weeks, 2);
        assert!(schedule.is_complete(14));
    }

    #[test]
    fn zero_minute_episodes_are_rejected() {
        let err = ScheduleGenerator::new()
            .with_episode_minutes(0)
            .generate(&ScheduleRequest::new(3, 2).starting_on(Monday))
            .unwrap_err();
        assert!(matches!(err, WatchlogError::InvalidRequest(_)));
    }

    #[test]
    fn all_rest_days_is_rejected() {
        let generator = ScheduleGenerator::new().with_rest_days(Weekday::all().iter().copied());
        let err = generator
            .generate(&ScheduleRequest::new(3, 1).starting_on(Monday))
            .unwrap_err();
        assert!(matches!(err, WatchlogError::InvalidRequest(_)));
    }

    #[test]
    fn infeasible_plan_is_still_generated() {
        let schedule = plan(30, 15, Thursday);
        assert_eq!(schedule.entries.len(), 2);
        assert!(schedule.is_complete(30));
    }

    #[test]
    fn missing_start_day_defaults_to_today() {
        let schedule = ScheduleGenerator::new()
            .generate(&ScheduleRequest::new(2, 1))
            .unwrap();
        let first = schedule.entries.first().unwrap().weekday;
        // tolerate a midnight rollover between the two calls
        assert!(first == Weekday::today() || first.succ() == Weekday::today());
    }
}
