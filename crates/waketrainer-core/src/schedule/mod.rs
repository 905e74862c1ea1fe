//! Wake-up-time progression schedule.
//!
//! Given the current and target wake times, the schedule computes the
//! day-by-day migration between them in fixed-size daily steps. The journey
//! always moves the wake time *earlier* through the clock, wrapping past
//! midnight: a target even one minute later than the current time is reached
//! by walking almost a full day backwards, never by shifting later. That
//! directional bias is deliberate product behavior.
//!
//! All operations are pure, total arithmetic over [`TimeOfDay`] values; the
//! calendar-day bookkeeping lives in [`crate::journey`].

use chrono::Utc;

use crate::error::ValidationError;
use crate::events::Event;
use crate::time::{TimeOfDay, MINUTES_PER_DAY};

/// Default per-day adjustment quantum in minutes.
pub const DEFAULT_STEP_MINUTES: u16 = 15;

/// The two endpoints of a wake-time journey plus the daily step size.
///
/// Immutable value type; construct a fresh one whenever the settings change.
/// The step is always at least one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeSchedule {
    current: TimeOfDay,
    target: TimeOfDay,
    step_minutes: u16,
}

impl WakeSchedule {
    /// Create a schedule with the default 15-minute daily step.
    pub fn new(current: TimeOfDay, target: TimeOfDay) -> Self {
        Self {
            current,
            target,
            step_minutes: DEFAULT_STEP_MINUTES,
        }
    }

    /// Create a schedule with a custom daily step.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStep`] if `step_minutes` is zero.
    pub fn with_step(
        current: TimeOfDay,
        target: TimeOfDay,
        step_minutes: u16,
    ) -> Result<Self, ValidationError> {
        if step_minutes == 0 {
            return Err(ValidationError::InvalidStep);
        }
        Ok(Self {
            current,
            target,
            step_minutes,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current(&self) -> TimeOfDay {
        self.current
    }

    pub fn target(&self) -> TimeOfDay {
        self.target
    }

    pub fn step_minutes(&self) -> u16 {
        self.step_minutes
    }

    /// Minute-distance from current to target, stepping backward (earlier)
    /// through the clock and wrapping at midnight.
    ///
    /// Not a shortest-path distance: a target later in the clock than the
    /// current time yields `1440 - difference`, close to a full day.
    pub fn distance_minutes(&self) -> u16 {
        let current = i32::from(self.current.minutes_since_midnight());
        let target = i32::from(self.target.minutes_since_midnight());
        let raw = target - current;
        let distance = if raw > 0 {
            i32::from(MINUTES_PER_DAY) - raw
        } else {
            -raw
        };
        distance as u16
    }

    /// Smallest number of daily steps that covers [`Self::distance_minutes`].
    ///
    /// Zero when the target is already reached.
    pub fn days_needed(&self) -> u32 {
        u32::from(self.distance_minutes()).div_ceil(u32::from(self.step_minutes))
    }

    /// True iff current and target denote the same minute of the day.
    pub fn is_target_reached(&self) -> bool {
        self.current == self.target
    }

    /// The wake time to schedule for tomorrow: one step earlier than the
    /// current time, clamped to the remaining distance so the final partial
    /// step lands exactly on the target.
    ///
    /// Returns the current time unchanged once the target is reached.
    pub fn next_wake_up(&self) -> TimeOfDay {
        let distance = self.distance_minutes();
        if distance == 0 {
            return self.current;
        }
        let adjustment = self.step_minutes.min(distance);
        TimeOfDay::from_minutes(
            i64::from(self.current.minutes_since_midnight()) - i64::from(adjustment),
        )
    }

    /// Wake time for a zero-based day index into the journey. Day 0 is the
    /// current wake time.
    ///
    /// This is a direct linear projection with no clamping at the target:
    /// day `days_needed()` can overshoot the target by anything less than
    /// one full step, and larger indexes keep extrapolating. Callers must bound
    /// `day` by [`Self::days_needed`] themselves; [`crate::journey::Journey`]
    /// does this for date-based lookups.
    ///
    /// # Preconditions
    ///
    /// `day <= days_needed()`.
    pub fn wake_time_for_day(&self, day: u32) -> TimeOfDay {
        debug_assert!(
            day <= self.days_needed(),
            "day {day} is past the end of the journey"
        );
        let total_adjustment = i64::from(day) * i64::from(self.step_minutes);
        TimeOfDay::from_minutes(
            i64::from(self.current.minutes_since_midnight()) - total_adjustment,
        )
    }

    /// The schedule after one firing: `current` re-assigned to
    /// [`Self::next_wake_up`]. Applying this `days_needed()` times reaches
    /// the target exactly.
    #[must_use]
    pub fn advanced(&self) -> WakeSchedule {
        Self {
            current: self.next_wake_up(),
            ..*self
        }
    }

    /// Day-by-day wake times for the whole journey, day 0 through
    /// `days_needed()`.
    ///
    /// Follows the firing path, so the final partial step is clamped onto
    /// the target rather than projected past it.
    pub fn plan(&self) -> Vec<TimeOfDay> {
        let days = self.days_needed();
        let mut times = Vec::with_capacity(days as usize + 1);
        let mut schedule = *self;
        times.push(schedule.current);
        for _ in 0..days {
            schedule = schedule.advanced();
            times.push(schedule.current);
        }
        times
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            current: self.current,
            target: self.target,
            step_minutes: self.step_minutes,
            distance_minutes: self.distance_minutes(),
            days_needed: self.days_needed(),
            next_wake_up: self.next_wake_up(),
            target_reached: self.is_target_reached(),
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tod(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn two_hours_earlier_takes_eight_days() {
        let schedule = WakeSchedule::new(tod(8, 0), tod(6, 0));
        assert_eq!(schedule.distance_minutes(), 120);
        assert_eq!(schedule.days_needed(), 8);
        assert_eq!(schedule.next_wake_up(), tod(7, 45));
        assert!(!schedule.is_target_reached());
    }

    #[test]
    fn equal_times_mean_journey_complete() {
        let schedule = WakeSchedule::new(tod(6, 0), tod(6, 0));
        assert_eq!(schedule.distance_minutes(), 0);
        assert_eq!(schedule.days_needed(), 0);
        assert_eq!(schedule.next_wake_up(), tod(6, 0));
        assert!(schedule.is_target_reached());
    }

    #[test]
    fn later_target_walks_the_long_way_backward() {
        // 06:10 is ten minutes later than 06:00, but the journey only ever
        // moves earlier: the distance wraps nearly a full day.
        let schedule = WakeSchedule::new(tod(6, 0), tod(6, 10));
        assert_eq!(schedule.distance_minutes(), 1430);
        assert_eq!(schedule.days_needed(), 96);
        assert_eq!(schedule.next_wake_up(), tod(5, 45));
    }

    #[test]
    fn single_step_before_midnight() {
        let schedule = WakeSchedule::new(tod(23, 50), tod(23, 35));
        assert_eq!(schedule.distance_minutes(), 15);
        assert_eq!(schedule.days_needed(), 1);
        assert_eq!(schedule.next_wake_up(), tod(23, 35));
    }

    #[test]
    fn day_three_projects_three_steps_back() {
        let schedule = WakeSchedule::new(tod(8, 0), tod(6, 0));
        assert_eq!(schedule.wake_time_for_day(3), tod(7, 15));
    }

    #[test]
    fn projection_wraps_across_midnight() {
        let schedule = WakeSchedule::new(tod(0, 10), tod(23, 40));
        assert_eq!(schedule.distance_minutes(), 30);
        assert_eq!(schedule.days_needed(), 2);
        assert_eq!(schedule.wake_time_for_day(1), tod(23, 55));
        assert_eq!(schedule.wake_time_for_day(2), tod(23, 40));
    }

    #[test]
    fn final_partial_step_clamps_to_target() {
        let schedule = WakeSchedule::new(tod(8, 0), tod(7, 50));
        assert_eq!(schedule.distance_minutes(), 10);
        assert_eq!(schedule.days_needed(), 1);
        assert_eq!(schedule.next_wake_up(), tod(7, 50));
    }

    #[test]
    fn advancing_walks_the_firing_path_to_the_target() {
        let mut schedule = WakeSchedule::new(tod(8, 0), tod(6, 35));
        let days = schedule.days_needed();
        assert_eq!(days, 6); // 85 minutes in 15-minute steps
        for _ in 0..days {
            assert!(!schedule.is_target_reached());
            schedule = schedule.advanced();
        }
        assert!(schedule.is_target_reached());
        assert_eq!(schedule.current(), tod(6, 35));
    }

    #[test]
    fn plan_covers_every_day_and_ends_on_target() {
        let schedule = WakeSchedule::new(tod(8, 0), tod(6, 0));
        let plan = schedule.plan();
        assert_eq!(plan.len(), 9);
        assert_eq!(plan[0], tod(8, 0));
        assert_eq!(plan[3], tod(7, 15));
        assert_eq!(plan[8], tod(6, 0));
    }

    #[test]
    fn custom_step_changes_day_count() {
        let schedule = WakeSchedule::with_step(tod(8, 0), tod(6, 0), 30).unwrap();
        assert_eq!(schedule.days_needed(), 4);
        assert_eq!(schedule.next_wake_up(), tod(7, 30));
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(WakeSchedule::with_step(tod(8, 0), tod(6, 0), 0).is_err());
    }

    proptest! {
        #[test]
        fn day_zero_is_always_current(
            current in 0u16..1440,
            target in 0u16..1440,
            step in 1u16..=240,
        ) {
            let schedule = WakeSchedule::with_step(
                TimeOfDay::from_minutes(i64::from(current)),
                TimeOfDay::from_minutes(i64::from(target)),
                step,
            ).unwrap();
            prop_assert_eq!(schedule.wake_time_for_day(0), schedule.current());
        }

        #[test]
        fn days_needed_is_the_smallest_covering_count(
            current in 0u16..1440,
            target in 0u16..1440,
            step in 1u16..=240,
        ) {
            let schedule = WakeSchedule::with_step(
                TimeOfDay::from_minutes(i64::from(current)),
                TimeOfDay::from_minutes(i64::from(target)),
                step,
            ).unwrap();
            let distance = u32::from(schedule.distance_minutes());
            let days = schedule.days_needed();
            prop_assert!(days * u32::from(step) >= distance);
            if days > 0 {
                prop_assert!((days - 1) * u32::from(step) < distance);
            } else {
                prop_assert_eq!(distance, 0);
            }
        }

        #[test]
        fn final_day_overshoots_by_less_than_one_step(
            current in 0u16..1440,
            target in 0u16..1440,
            step in 1u16..=240,
        ) {
            let schedule = WakeSchedule::with_step(
                TimeOfDay::from_minutes(i64::from(current)),
                TimeOfDay::from_minutes(i64::from(target)),
                step,
            ).unwrap();
            let distance = schedule.distance_minutes();
            let landing = schedule.wake_time_for_day(schedule.days_needed());
            let overshoot = (i64::from(schedule.target().minutes_since_midnight())
                - i64::from(landing.minutes_since_midnight()))
                .rem_euclid(i64::from(MINUTES_PER_DAY));
            prop_assert!(overshoot < i64::from(step));
            if distance % step == 0 {
                prop_assert_eq!(landing, schedule.target());
            }
        }

        #[test]
        fn next_wake_up_matches_day_one_while_a_full_step_remains(
            current in 0u16..1440,
            target in 0u16..1440,
            step in 1u16..=240,
        ) {
            let schedule = WakeSchedule::with_step(
                TimeOfDay::from_minutes(i64::from(current)),
                TimeOfDay::from_minutes(i64::from(target)),
                step,
            ).unwrap();
            if schedule.distance_minutes() >= step {
                prop_assert_eq!(schedule.next_wake_up(), schedule.wake_time_for_day(1));
            } else {
                prop_assert_eq!(schedule.next_wake_up(), schedule.target());
            }
        }
    }
}
