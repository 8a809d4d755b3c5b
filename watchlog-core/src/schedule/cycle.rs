use std::iter::FusedIterator;
use watchlog_model::Weekday;

/// Endless weekday sequence starting at a chosen day.
///
/// Each value is an independent cursor: cloning or creating another cycle from
/// the same start yields the same sequence, unaffected by what was consumed
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayCycle {
    next: Weekday,
}

impl WeekdayCycle {
    pub fn starting_at(start: Weekday) -> Self {
        Self { next: start }
    }

    /// One full pass of seven days from `start`.
    pub fn week_from(start: Weekday) -> [Weekday; Weekday::COUNT] {
        let mut cycle = Self::starting_at(start);
        std::array::from_fn(|_| cycle.advance())
    }

    #[inline]
    fn advance(&mut self) -> Weekday {
        let day = self.next;
        self.next = day.succ();
        day
    }
}

impl Iterator for WeekdayCycle {
    type Item = Weekday;

    #[inline]
    fn next(&mut self) -> Option<Weekday> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for WeekdayCycle {}

/// Free-function form of [`WeekdayCycle::starting_at`].
pub fn sequence_from(start: Weekday) -> WeekdayCycle {
    WeekdayCycle::starting_at(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Weekday::*;

    #[test]
    fn wraps_from_friday() {
        let days: Vec<_> = sequence_from(Friday).take(9).collect();
        assert_eq!(
            days,
            vec![Friday, Saturday, Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday]
        );
    }

    #[test]
    fn cycles_are_independent() {
        let mut first = sequence_from(Tuesday);
        first.by_ref().take(5).for_each(drop);

        let fresh: Vec<_> = sequence_from(Tuesday).take(3).collect();
        assert_eq!(fresh, vec![Tuesday, Wednesday, Thursday]);
        assert_eq!(first.next(), Some(Sunday));
    }

    #[test]
    fn clone_restarts_from_current_position() {
        let mut cycle = sequence_from(Monday);
        cycle.next();
        let snapshot = cycle.clone();

        assert_eq!(cycle.take(3).collect::<Vec<_>>(), snapshot.take(3).collect::<Vec<_>>());
    }

    #[test]
    fn week_from_covers_each_day_once() {
        let week = WeekdayCycle::week_from(Sunday);
        assert_eq!(week, [Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday]);
    }
}
