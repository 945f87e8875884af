//! Clock arithmetic for day planning.
//!
//! Times are carried as minutes since 00:00. A day span may run past
//! midnight, in which case its end is expressed as more than 1440 minutes
//! and folded back into a 24-hour clock only when rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock time of day in "HH:MM" form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Build a clock time from hour and minute components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::InvalidClock {
                value: format!("{hour}:{minute:02}"),
            });
        }
        Ok(Self {
            minutes: hour as u16 * 60 + minute as u16,
        })
    }

    /// Minutes since 00:00.
    pub fn minutes(&self) -> i64 {
        self.minutes as i64
    }

    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time_to_minutes(s).map(|minutes| Self {
            minutes: minutes as u16,
        })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse an "HH:MM" clock string into minutes since 00:00.
///
/// The hour may be one or two digits (0-23); the minute must be two digits
/// (00-59).
pub fn time_to_minutes(clock: &str) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidClock {
        value: clock.to_string(),
    };

    let (hours, minutes) = clock.trim().split_once(':').ok_or_else(invalid)?;
    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Render any minute offset as a 24-hour "HH:MM" clock string.
///
/// Negative offsets and offsets past midnight wrap around the day.
pub fn minutes_to_time(total_minutes: i64) -> String {
    let normalized = ((total_minutes % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY;
    format!("{:02}:{:02}", normalized / 60, normalized % 60)
}

/// The waking span of a day, from wake time to sleep time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    /// Minutes since 00:00 at wake.
    pub start: i64,
    /// Minutes since 00:00 of the wake day at sleep; above 1440 when sleep
    /// falls after midnight.
    pub end: i64,
}

impl DaySpan {
    /// Compute the span between wake and sleep.
    ///
    /// A sleep time that is not strictly after the wake time is taken to be
    /// on the next calendar day.
    pub fn from_clocks(wake: ClockTime, sleep: ClockTime) -> Self {
        let start = wake.minutes();
        let mut end = sleep.minutes();
        if end <= start {
            end += MINUTES_PER_DAY;
        }
        Self { start, end }
    }

    pub fn total_minutes(&self) -> i64 {
        self.end - self.start
    }
}
