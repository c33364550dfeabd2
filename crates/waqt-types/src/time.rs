//! Time of day without a calendar date.

use chrono::{Local, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WaqtError;

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Hour and minute within a single day (00:00 to 23:59).
///
/// Seconds are always zero, so ordering and equality are by minute. Serde
/// goes through the same strict `HH:MM` text as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a time of day, failing if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, WaqtError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| {
                WaqtError::invalid_time(
                    format!("{:02}:{:02}", hour, minute),
                    "hour must be 00-23 and minute 00-59",
                )
            })
    }

    /// 00:00.
    pub fn midnight() -> Self {
        Self(NaiveTime::MIN)
    }

    /// Builds a time from minutes since midnight, wrapping past one day.
    pub fn from_minutes(minutes: u32) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        Self::midnight().add_minutes(i64::from(m))
    }

    /// Truncates a `NaiveTime` to the minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self::midnight().add_minutes(i64::from(time.hour() * 60 + time.minute()))
    }

    /// Current local wall-clock time, truncated to the minute.
    pub fn now() -> Self {
        Self::from_naive_time(Local::now().time())
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Adds (or subtracts) minutes, wrapping around midnight.
    ///
    /// `23:30 + 60` gives `00:30`; the day change is discarded.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let minutes = minutes.rem_euclid(i64::from(MINUTES_PER_DAY));
        let (time, _days) = self.0.overflowing_add_signed(TimeDelta::minutes(minutes));
        Self(time)
    }

    /// Forward distance in minutes to `other`, wrapping to the next day when
    /// `other` is earlier. Zero when both are equal.
    pub fn minutes_until(&self, other: TimeOfDay) -> u32 {
        let from = self.minutes_since_midnight() as i64;
        let to = other.minutes_since_midnight() as i64;
        (to - from).rem_euclid(MINUTES_PER_DAY as i64) as u32
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive_time(time)
    }
}

/// Zero-padded 24-hour `HH:MM`, nothing else.
impl FromStr for TimeOfDay {
    type Err = WaqtError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(WaqtError::invalid_time(text, "expected HH:MM"));
        }

        let hour = two_digits(&bytes[0..2])
            .ok_or_else(|| WaqtError::invalid_time(text, "hour is not two digits"))?;
        let minute = two_digits(&bytes[3..5])
            .ok_or_else(|| WaqtError::invalid_time(text, "minute is not two digits"))?;

        Self::new(hour, minute)
            .map_err(|_| WaqtError::invalid_time(text, "hour must be 00-23 and minute 00-59"))
    }
}

fn two_digits(pair: &[u8]) -> Option<u32> {
    match pair {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = WaqtError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
