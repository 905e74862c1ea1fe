//! Calendar anchoring for a wake schedule.
//!
//! The schedule itself is pure minute arithmetic; a [`Journey`] pins it to
//! the day training began so callers can ask "which wake time applies on
//! this date". Day indexes are clamped to the valid range of the schedule,
//! so a date past the end of the journey keeps returning the target rather
//! than extrapolating beyond it.

use chrono::NaiveDate;

use crate::schedule::WakeSchedule;
use crate::time::TimeOfDay;

/// A wake schedule anchored to its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Journey {
    schedule: WakeSchedule,
    started_on: NaiveDate,
}

impl Journey {
    pub fn new(schedule: WakeSchedule, started_on: NaiveDate) -> Self {
        Self {
            schedule,
            started_on,
        }
    }

    pub fn schedule(&self) -> &WakeSchedule {
        &self.schedule
    }

    pub fn started_on(&self) -> NaiveDate {
        self.started_on
    }

    /// Zero-based journey day for a calendar date, clamped to
    /// `[0, days_needed]`. Dates before the start count as day 0; dates past
    /// the end stay pinned to the final day.
    pub fn day_index(&self, on: NaiveDate) -> u32 {
        let elapsed = (on - self.started_on).num_days();
        elapsed.clamp(0, i64::from(self.schedule.days_needed())) as u32
    }

    /// The wake time that applies on a calendar date.
    ///
    /// Intermediate days follow the linear projection; the final day (and
    /// every day after it) is the target itself, matching what successive
    /// firings produce.
    pub fn wake_time_on(&self, date: NaiveDate) -> TimeOfDay {
        let day = self.day_index(date);
        if day == self.schedule.days_needed() {
            self.schedule.target()
        } else {
            self.schedule.wake_time_for_day(day)
        }
    }

    /// Days left until the target, as seen from a calendar date.
    pub fn remaining_days(&self, on: NaiveDate) -> u32 {
        self.schedule.days_needed() - self.day_index(on)
    }

    /// True once the date has reached the final journey day.
    pub fn is_complete(&self, on: NaiveDate) -> bool {
        self.day_index(on) == self.schedule.days_needed()
    }
}
