//! Calendar date and time of day with an optional UTC offset.

use std::fmt;
use std::str::FromStr;

use crate::error::DateTimeParseError;
use crate::util::datetime::{
    date_to_days, days_in_month, days_to_date, format_datetime, parse_datetime,
    MICROSECONDS_PER_DAY,
};

/// A date and time as written, with the offset it was written in.
///
/// `local_us` counts wall-clock microseconds from 1970-01-01T00:00:00.
/// `offset_min` is `None` when the source carried no offset; the value is then
/// neither local time nor UTC, just a wall-clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    local_us: i64,
    offset_min: Option<i16>,
}

impl DateTime {
    /// 0001-01-01T00:00:00 without offset, the earliest representable value.
    pub const MIN: DateTime = DateTime {
        local_us: -719_162 * MICROSECONDS_PER_DAY,
        offset_min: None,
    };

    /// Creates a date at midnight, or `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<DateTime> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        if day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(DateTime {
            local_us: date_to_days(year, month, day) * MICROSECONDS_PER_DAY,
            offset_min: None,
        })
    }

    /// Returns this value with the time of day set, or `None` if out of range.
    pub fn with_hms_micro(self, hour: u32, minute: u32, second: u32, micro: u32) -> Option<DateTime> {
        if hour > 23 || minute > 59 || second > 59 || micro > 999_999 {
            return None;
        }
        let midnight = self.local_us - self.time_micros();
        let time = ((i64::from(hour) * 60 + i64::from(minute)) * 60 + i64::from(second)) * 1_000_000
            + i64::from(micro);
        Some(DateTime { local_us: midnight + time, offset_min: self.offset_min })
    }

    /// Returns this value tagged with `offset_min`, leaving the wall clock unchanged.
    pub fn with_offset(self, offset_min: Option<i16>) -> DateTime {
        DateTime { offset_min, ..self }
    }

    /// Wall-clock microseconds since 1970-01-01T00:00:00.
    pub fn local_micros(&self) -> i64 {
        self.local_us
    }

    /// The UTC offset in minutes, if one was given.
    pub fn offset_minutes(&self) -> Option<i16> {
        self.offset_min
    }

    /// Microseconds since the Unix epoch in UTC, if the offset is known.
    pub fn to_utc_micros(&self) -> Option<i64> {
        self.offset_min
            .map(|offset| self.local_us - i64::from(offset) * 60 * 1_000_000)
    }

    fn ymd(&self) -> (i32, u32, u32) {
        days_to_date(self.local_us.div_euclid(MICROSECONDS_PER_DAY))
    }

    fn time_micros(&self) -> i64 {
        self.local_us.rem_euclid(MICROSECONDS_PER_DAY)
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// The month, 1 to 12.
    pub fn month(&self) -> u32 {
        self.ymd().1
    }

    /// The day of the month, from 1.
    pub fn day(&self) -> u32 {
        self.ymd().2
    }

    /// The hour of the day, 0 to 23.
    pub fn hour(&self) -> u32 {
        (self.time_micros() / 3_600_000_000) as u32
    }

    /// The minute, 0 to 59.
    pub fn minute(&self) -> u32 {
        (self.time_micros() / 60_000_000 % 60) as u32
    }

    /// The second, 0 to 59.
    pub fn second(&self) -> u32 {
        (self.time_micros() / 1_000_000 % 60) as u32
    }

    /// The sub-second part in microseconds.
    pub fn microsecond(&self) -> u32 {
        (self.time_micros() % 1_000_000) as u32
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_datetime(self.local_us, self.offset_min))
    }
}

impl FromStr for DateTime {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (local_us, offset_min) = parse_datetime(s)?;
        Ok(DateTime { local_us, offset_min })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
