//! Time-of-day values for the wake schedule.
//!
//! The schedule only ever reasons about hour and minute. Calendar dates are
//! deliberately absent from [`TimeOfDay`]; they are re-attached at the
//! display edge via [`TimeOfDay::on`].

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Minutes in a full day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A point in the 24-hour cycle, stored as minutes since midnight.
///
/// Construction always succeeds or is validated up front, so every value
/// holds `0 <= minutes < 1440` and all downstream arithmetic is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Create from an hour/minute pair on the 24-hour clock.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] if `hour >= 24` or
    /// `minute >= 60`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour >= 24 || minute >= 60 {
            return Err(ValidationError::InvalidTime { hour, minute });
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Create from a minute count, wrapping into `[0, 1440)`.
    ///
    /// Negative values wrap backwards across midnight, so `-15` is 23:45.
    #[must_use]
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes.rem_euclid(i64::from(MINUTES_PER_DAY)) as u16)
    }

    /// Minutes since midnight, in `[0, 1440)`.
    #[must_use]
    pub const fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    /// Hour on the 24-hour clock.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute within the hour.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Attach this time to a calendar day, for display and alarm-scheduling
    /// output only. The schedule arithmetic never consults dates.
    #[must_use]
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or(NaiveTime::MIN);
        date.and_time(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || ValidationError::ParseTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(parse_err)?;
        let hour: u8 = hour.trim().parse().map_err(|_| parse_err())?;
        let minute: u8 = minute.trim().parse().map_err(|_| parse_err())?;
        Self::new(hour, minute).map_err(|_| parse_err())
    }
}

// Serialized as the "HH:MM" display form so config files and JSON output
// stay human-editable.
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
