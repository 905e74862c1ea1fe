use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Every state change in the journey produces an Event.
/// The CLI prints them; a GUI front end would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    JourneyStarted {
        started_on: NaiveDate,
        current: TimeOfDay,
        target: TimeOfDay,
        days_needed: u32,
        at: DateTime<Utc>,
    },
    /// The day-over-day re-assignment fired: the current wake time moved
    /// one step toward the target.
    WakeTimeAdvanced {
        previous: TimeOfDay,
        current: TimeOfDay,
        next_wake_up: TimeOfDay,
        remaining_days: u32,
        at: DateTime<Utc>,
    },
    /// The current wake time now equals the target.
    TargetReached {
        target: TimeOfDay,
        at: DateTime<Utc>,
    },
    JourneyReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        current: TimeOfDay,
        target: TimeOfDay,
        step_minutes: u16,
        distance_minutes: u16,
        days_needed: u32,
        next_wake_up: TimeOfDay,
        target_reached: bool,
        at: DateTime<Utc>,
    },
}
