//! Lenient, culture-invariant date/time parsing and formatting.
//!
//! Accepted input, after trimming, is an optional date followed by an
//! optional time and an optional offset. Date layouts are tried in order:
//! - `YYYY-M-D`, `YYYY/M/D` or `YYYY.M.D`; `YYYY-M` and `YYYY/M` mean day 1
//! - `M/D/YYYY`
//! - `D MonthName YYYY`
//! - `MonthName D[,] YYYY`
//!
//! Month names are English, full or three-letter, in any case. A leading
//! day name (`Fri, 15 Mar 2024`) is allowed and must match the date.
//!
//! - Time after `T` or spaces: `H:M`, `H:M:S` or `H:M:S.fffffff`, optionally
//!   followed by `AM`/`PM`. Text with a time and no date lands on 0001-01-01.
//! - Offset: `Z`, `GMT`, `UTC`, `+HH:MM`, `+HHMM` or `+HH` (and `-` forms),
//!   at most 14 hours either way.
//!
//! Values are returned as wall-clock microseconds since 1970-01-01T00:00:00
//! plus the offset as written. No timezone normalization is applied.

use crate::error::DateTimeParseError;
use crate::limits::MAX_FRACTION_DIGITS;

const MAX_OFFSET_HOURS: i16 = 14;

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Indexed by weekday, Sunday first.
const DAY_NAMES: [&str; 7] = [
    "sunday", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
];

const MICROSECONDS_PER_SECOND: i64 = 1_000_000;
const MICROSECONDS_PER_MINUTE: i64 = 60 * MICROSECONDS_PER_SECOND;
const MICROSECONDS_PER_HOUR: i64 = 60 * MICROSECONDS_PER_MINUTE;
pub(crate) const MICROSECONDS_PER_DAY: i64 = 24 * MICROSECONDS_PER_HOUR;

/// Byte cursor over ASCII date text.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { data: text.as_bytes(), pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Consumes `b` if it is next.
    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) -> usize {
        let start = self.pos;
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Reads between `min` and `max` ASCII digits, returning the digits read.
    fn read_digits(&mut self, min: usize, max: usize) -> Option<&'a [u8]> {
        let start = self.pos;
        while self.pos - start < max && self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let len = self.pos - start;
        if len < min {
            self.pos = start;
            return None;
        }
        Some(&self.data[start..self.pos])
    }

    fn read_number(&mut self, min: usize, max: usize) -> Option<u32> {
        self.read_digits(min, max)
            .map(|digits| digits.iter().fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0')))
    }

    /// Reads a run of ASCII letters.
    fn read_word(&mut self) -> Option<&'a [u8]> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        Some(&self.data[start..self.pos])
    }

    /// Reads an English month name and returns the month number.
    fn read_month(&mut self) -> Option<u32> {
        let word = self.read_word()?;
        lookup_name(word, &MONTH_NAMES).map(|index| index as u32 + 1)
    }

    fn expect(&mut self, b: u8) -> Option<()> {
        self.eat(b).then_some(())
    }

    fn expect_spaces(&mut self) -> Option<()> {
        (self.skip_spaces() > 0).then_some(())
    }
}

fn invalid(kind: &str, text: &str) -> DateTimeParseError {
    DateTimeParseError::new(format!("Invalid {} in date: {}", kind, text))
}

/// Matches a full name or its three-letter abbreviation, ignoring case.
fn lookup_name(word: &[u8], names: &[&str]) -> Option<usize> {
    let word = word.to_ascii_lowercase();
    names.iter().position(|name| {
        let name = name.as_bytes();
        word == name || (word.len() == 3 && name.starts_with(&word))
    })
}

/// Day of week for days since the Unix epoch, Sunday being 0.
fn weekday(days: i64) -> usize {
    // 1970-01-01 was a Thursday
    (days + 4).rem_euclid(7) as usize
}

/// Parses a timezone offset (`Z`, `GMT`, `UTC`, `±HH:MM`, `±HHMM`, `±HH`) and
/// returns it in minutes.
fn parse_timezone_offset(cursor: &mut Cursor<'_>, text: &str) -> Result<i16, DateTimeParseError> {
    if let Some(word) = cursor.read_word() {
        return match word.to_ascii_lowercase().as_slice() {
            b"z" | b"gmt" | b"utc" => Ok(0),
            _ => Err(invalid("timezone offset", text)),
        };
    }

    let sign = if cursor.eat(b'+') {
        1i16
    } else if cursor.eat(b'-') {
        -1i16
    } else {
        return Err(invalid("timezone offset", text));
    };

    let hours = cursor
        .read_number(2, 2)
        .ok_or_else(|| invalid("timezone offset", text))? as i16;
    let colon = cursor.eat(b':');
    let minutes = match cursor.read_number(2, 2) {
        Some(m) => m as i16,
        None if colon => return Err(invalid("timezone offset", text)),
        None => 0,
    };

    if hours > MAX_OFFSET_HOURS || (hours == MAX_OFFSET_HOURS && minutes != 0) || minutes > 59 {
        return Err(invalid("timezone offset", text));
    }

    Ok(sign * (hours * 60 + minutes))
}

/// Formats an offset in minutes as a timezone string (Z, +HH:MM, -HH:MM).
fn format_timezone_offset(offset_min: i16) -> String {
    if offset_min == 0 {
        return "Z".to_string();
    }

    let sign = if offset_min >= 0 { '+' } else { '-' };
    let abs_offset = offset_min.abs();
    let hours = abs_offset / 60;
    let minutes = abs_offset % 60;

    format!("{}{:02}:{:02}", sign, hours, minutes)
}

/// Converts fractional-second digits to microseconds, truncating past six digits.
fn fraction_to_micros(frac: &[u8]) -> i64 {
    let mut micros = 0i64;
    for i in 0..6 {
        let digit = frac.get(i).map_or(0, |d| i64::from(d - b'0'));
        micros = micros * 10 + digit;
    }
    micros
}

/// Formats microseconds as fractional seconds string, omitting if zero.
fn format_fractional_seconds(us: i64) -> String {
    if us == 0 {
        return String::new();
    }

    let str = format!("{:06}", us);
    let trimmed = str.trim_end_matches('0');
    format!(".{}", trimmed)
}

/// Returns true if the given year is a leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calculates days since Unix epoch for a given date (Howard Hinnant's algorithm).
pub(crate) fn date_to_days(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let m = if month <= 2 { month as i64 + 9 } else { month as i64 - 3 };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as u32; // year of era
    let doy = (153 * m as u32 + 2) / 5 + day - 1; // day of year
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    era * 146097 + doe as i64 - 719468
}

/// Converts days since Unix epoch to (year, month, day).
pub(crate) fn days_to_date(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32; // day of era
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // year of era
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year
    let mp = (5 * doy + 2) / 153; // month index
    let d = doy - (153 * mp + 2) / 5 + 1; // day
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // month

    let year = if m <= 2 { y + 1 } else { y } as i32;
    (year, m, d)
}

/// Result of trying one date layout: `Ok(None)` when the text does not have
/// that layout's shape, an error when it does but names no real date.
type DateMatch = Result<Option<i64>, DateTimeParseError>;

/// A layout reads `(year, month, day)` or gives up without consuming input.
type DateLayout = for<'a> fn(&mut Cursor<'a>) -> Option<(u32, u32, u32)>;

const DATE_LAYOUTS: [DateLayout; 3] = [read_month_day_year, read_day_month_name, read_month_name_day];

/// Checks the components and returns days since the Unix epoch.
fn validated_days(year: u32, month: u32, day: u32, text: &str) -> Result<i64, DateTimeParseError> {
    let year = year as i32;
    if year < 1 {
        return Err(invalid("year", text));
    }
    if !(1..=12).contains(&month) {
        return Err(invalid("month", text));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(invalid("day", text));
    }
    Ok(date_to_days(year, month, day))
}

/// Parses `YYYY-M-D`, the separator being `-`, `/` or `.`.
///
/// With `-` or `/` the day may be left out and defaults to 1.
fn parse_year_first(cursor: &mut Cursor<'_>, text: &str) -> DateMatch {
    let start = cursor.pos;
    let Some(year) = cursor.read_number(4, 4) else {
        return Ok(None);
    };
    let sep = match cursor.peek() {
        Some(b @ (b'-' | b'/' | b'.')) => b,
        _ => {
            cursor.pos = start;
            return Ok(None);
        }
    };
    cursor.eat(sep);

    let month = cursor.read_number(1, 2).ok_or_else(|| invalid("month", text))?;
    let day = if cursor.eat(sep) {
        cursor.read_number(1, 2).ok_or_else(|| invalid("day", text))?
    } else if sep == b'.' {
        return Err(invalid("date separator", text));
    } else {
        1
    };

    validated_days(year, month, day, text).map(Some)
}

/// `M/D/YYYY`
fn read_month_day_year(cursor: &mut Cursor<'_>) -> Option<(u32, u32, u32)> {
    let month = cursor.read_number(1, 2)?;
    cursor.expect(b'/')?;
    let day = cursor.read_number(1, 2)?;
    cursor.expect(b'/')?;
    let year = cursor.read_number(4, 4)?;
    Some((year, month, day))
}

/// `D MonthName YYYY`
fn read_day_month_name(cursor: &mut Cursor<'_>) -> Option<(u32, u32, u32)> {
    let day = cursor.read_number(1, 2)?;
    cursor.expect_spaces()?;
    let month = cursor.read_month()?;
    cursor.expect_spaces()?;
    let year = cursor.read_number(4, 4)?;
    Some((year, month, day))
}

/// `MonthName D[,] YYYY`
fn read_month_name_day(cursor: &mut Cursor<'_>) -> Option<(u32, u32, u32)> {
    let month = cursor.read_month()?;
    cursor.expect_spaces()?;
    let day = cursor.read_number(1, 2)?;
    cursor.eat(b',');
    cursor.expect_spaces()?;
    let year = cursor.read_number(4, 4)?;
    Some((year, month, day))
}

/// Tries each date layout in order.
fn parse_date_part(cursor: &mut Cursor<'_>, text: &str) -> DateMatch {
    if let Some(days) = parse_year_first(cursor, text)? {
        return Ok(Some(days));
    }
    let start = cursor.pos;
    for layout in DATE_LAYOUTS {
        match layout(cursor) {
            Some((year, month, day)) => return validated_days(year, month, day, text).map(Some),
            None => cursor.pos = start,
        }
    }
    Ok(None)
}

/// Consumes a leading day name (`Fri,`) and returns its weekday.
fn parse_weekday_prefix(cursor: &mut Cursor<'_>) -> Option<usize> {
    let start = cursor.pos;
    let found = cursor.read_word().and_then(|word| lookup_name(word, &DAY_NAMES));
    match found {
        Some(_) => {
            cursor.eat(b',');
            cursor.skip_spaces();
        }
        None => cursor.pos = start,
    }
    found
}

/// Consumes an `AM`/`PM` designator and returns true for `PM`.
fn parse_meridiem(cursor: &mut Cursor<'_>) -> Option<bool> {
    let start = cursor.pos;
    cursor.skip_spaces();
    let designator = cursor.read_word().map(|word| word.to_ascii_lowercase());
    match designator.as_deref() {
        Some(b"am") => Some(false),
        Some(b"pm") => Some(true),
        _ => {
            cursor.pos = start;
            None
        }
    }
}

/// Parses `H:M[:S[.fffffff]][ AM|PM]` and returns microseconds since midnight.
fn parse_time_part(cursor: &mut Cursor<'_>, text: &str) -> Result<i64, DateTimeParseError> {
    let hours = cursor.read_number(1, 2).ok_or_else(|| invalid("hours", text))?;
    if !cursor.eat(b':') {
        return Err(invalid("time", text));
    }
    let minutes = cursor.read_number(1, 2).ok_or_else(|| invalid("minutes", text))?;
    let seconds = if cursor.eat(b':') {
        cursor.read_number(1, 2).ok_or_else(|| invalid("seconds", text))?
    } else {
        0
    };
    let micros = if cursor.eat(b'.') {
        let frac = cursor
            .read_digits(1, MAX_FRACTION_DIGITS)
            .ok_or_else(|| invalid("fractional seconds", text))?;
        if cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(invalid("fractional seconds", text));
        }
        fraction_to_micros(frac)
    } else {
        0
    };

    let hours = match parse_meridiem(cursor) {
        Some(_) if !(1..=12).contains(&hours) => return Err(invalid("hours", text)),
        Some(pm) => hours % 12 + if pm { 12 } else { 0 },
        None => hours,
    };

    if hours > 23 {
        return Err(invalid("hours", text));
    }
    if minutes > 59 {
        return Err(invalid("minutes", text));
    }
    if seconds > 59 {
        return Err(invalid("seconds", text));
    }

    Ok(i64::from(hours) * MICROSECONDS_PER_HOUR
        + i64::from(minutes) * MICROSECONDS_PER_MINUTE
        + i64::from(seconds) * MICROSECONDS_PER_SECOND
        + micros)
}

/// Parses a date with optional time and offset, or a time alone.
///
/// Returns wall-clock microseconds since the Unix epoch and the offset in
/// minutes, or `None` when the text carries no offset.
pub fn parse_datetime(text: &str) -> Result<(i64, Option<i16>), DateTimeParseError> {
    let text = text.trim();
    let mut cursor = Cursor::new(text);

    let weekday_given = parse_weekday_prefix(&mut cursor);
    let (days, has_time) = match parse_date_part(&mut cursor, text)? {
        Some(days) => {
            if weekday_given.is_some_and(|w| w != weekday(days)) {
                return Err(invalid("day of week", text));
            }
            let spaced = cursor.skip_spaces() > 0;
            let has_time = if cursor.eat(b'T') || cursor.eat(b't') {
                true
            } else {
                spaced && cursor.peek().is_some_and(|b| b.is_ascii_digit())
            };
            (days, has_time)
        }
        None if weekday_given.is_some() => return Err(invalid("date", text)),
        None => (date_to_days(1, 1, 1), true),
    };

    let time_micros = if has_time {
        parse_time_part(&mut cursor, text)?
    } else {
        0
    };

    cursor.skip_spaces();
    let offset_min = if cursor.is_empty() {
        None
    } else {
        Some(parse_timezone_offset(&mut cursor, text)?)
    };

    if !cursor.is_empty() {
        return Err(DateTimeParseError::new(format!("Unexpected trailing text in date: {}", text)));
    }

    Ok((days * MICROSECONDS_PER_DAY + time_micros, offset_min))
}

/// Formats wall-clock microseconds as `YYYY-MM-DDTHH:MM:SS[.ffffff][offset]`.
///
/// The offset is omitted when `None`.
pub fn format_datetime(local_us: i64, offset_min: Option<i16>) -> String {
    let days = local_us.div_euclid(MICROSECONDS_PER_DAY);
    let time_micros = local_us.rem_euclid(MICROSECONDS_PER_DAY);

    let (year, month, day) = days_to_date(days);

    let hours = time_micros / MICROSECONDS_PER_HOUR;
    let remaining1 = time_micros % MICROSECONDS_PER_HOUR;
    let minutes = remaining1 / MICROSECONDS_PER_MINUTE;
    let remaining2 = remaining1 % MICROSECONDS_PER_MINUTE;
    let seconds = remaining2 / MICROSECONDS_PER_SECOND;
    let microseconds = remaining2 % MICROSECONDS_PER_SECOND;

    let frac = format_fractional_seconds(microseconds);
    let offset = offset_min.map(format_timezone_offset).unwrap_or_default();

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{}",
        year, month, day, hours, minutes, seconds, frac, offset
    )
}
