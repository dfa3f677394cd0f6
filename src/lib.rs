mod anniversary;
mod attributes;
mod consts;
mod elapsed;
mod prelude;

pub use anniversary::{Anniversary, TodayPolicy};
pub use attributes::{DerivedAttributes, Weekday, ZodiacSign};
pub use consts::*;
pub use elapsed::Elapsed;

use std::fmt;
use std::str::FromStr;

/// A naive calendar date: year, month, day, plus an optional time-of-day
/// (defaulting to midnight). No timezone is attached or converted — values
/// are plain local calendar dates, ordered chronologically.
///
/// Construction validates the day against the month and year (including leap
/// years); the arithmetic built on top never re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year:   u16,
    month:  u8,
    day:    u8,
    hour:   u8,
    minute: u8,
    second: u8,
}

/// Error type for calendar date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid year: {0} (must be 1-{MAX_YEAR})")]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[error("Invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
}

impl CalendarDate {
    /// Creates a date at midnight, validating every component.
    ///
    /// # Errors
    /// Returns `DateError` if the year is 0 or > `MAX_YEAR`, the month is
    /// outside 1-12, or the day does not exist in that month and year.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if year == 0 || year > MAX_YEAR {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        })
    }

    /// Returns a copy of this date carrying the given time-of-day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if hour > 23 or minute/second > 59.
    pub fn at(self, hour: u8, minute: u8, second: u8) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(DateError::InvalidTime { hour, minute, second });
        }
        Ok(Self {
            hour,
            minute,
            second,
            ..self
        })
    }

    /// Builds a date from components that may overflow the month, rolling
    /// excess days forward (Feb 29 in a non-leap year becomes Mar 1, day 32
    /// of January becomes Feb 1). The anniversary arithmetic relies on this
    /// to mirror how lenient date primitives normalize.
    pub(crate) fn new_normalized(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MAX_MONTH);
        let mut year = year;
        let mut month = month;
        let mut day = day;
        while day > days_in_month(year, month) {
            day -= days_in_month(year, month);
            if month == DECEMBER {
                year += 1;
                month = JANUARY;
            } else {
                month += 1;
            }
        }
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month component (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day-of-month component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the (hour, minute, second) time-of-day components
    #[inline]
    pub const fn time(self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    /// True when the time-of-day is exactly midnight
    #[inline]
    pub const fn is_midnight(self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }

    /// Returns the same calendar day with the time-of-day cleared
    #[inline]
    pub const fn date_only(self) -> Self {
        Self {
            year:   self.year,
            month:  self.month,
            day:    self.day,
            hour:   0,
            minute: 0,
            second: 0,
        }
    }

    /// Number of whole days between this date and 1970-01-01 (negative
    /// before the epoch). Days-from-civil arithmetic over the proleptic
    /// Gregorian calendar; the time-of-day does not contribute.
    pub fn epoch_days(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= FEBRUARY);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Milliseconds between this value and the epoch, treating the date as a
    /// naive timestamp (midnight unless a time-of-day was supplied).
    pub fn timestamp_millis(self) -> i64 {
        self.epoch_days() * MS_PER_DAY
            + i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * 1000
    }
}

/// Returns `true` if the given year is a leap year under the Gregorian rules.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in the given month of the given year.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if !self.is_midnight() {
            write!(f, "T{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        }
        Ok(())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD` with an optional `THH:MM[:SS]` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (date_part, time_part) = match trimmed.split_once(TIME_DESIGNATOR) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{sep}MM{sep}DD, found {date_part}",
                sep = DATE_SEPARATOR
            )));
        }
        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;
        let date = Self::new(year, month, day)?;

        match time_part {
            None => Ok(date),
            Some(t) => {
                let pieces: Vec<&str> = t.split(TIME_SEPARATOR).map(str::trim).collect();
                let (hour, minute, second) = match pieces.as_slice() {
                    [h, m] => (parse_u8(h)?, parse_u8(m)?, 0),
                    [h, m, s] => (parse_u8(h)?, parse_u8(m)?, parse_u8(s)?),
                    _ => {
                        return Err(DateError::InvalidFormat(format!(
                            "Expected HH{sep}MM or HH{sep}MM{sep}SS, found {t}",
                            sep = TIME_SEPARATOR
                        )));
                    }
                };
                date.at(hour, minute, second)
            }
        }
    }
}

fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
mod clock {
    use super::{CalendarDate, DateError, MAX_YEAR};
    use chrono::{Datelike, Timelike};

    impl TryFrom<chrono::NaiveDate> for CalendarDate {
        type Error = DateError;

        fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
            let year = u16::try_from(date.year())
                .map_err(|_| DateError::InvalidYear(0))?;
            // chrono guarantees month/day validity; only the year range can fail
            let month = date.month() as u8;
            let day = date.day() as u8;
            Self::new(year, month, day)
        }
    }

    impl TryFrom<chrono::NaiveDateTime> for CalendarDate {
        type Error = DateError;

        fn try_from(dt: chrono::NaiveDateTime) -> Result<Self, Self::Error> {
            let date = Self::try_from(dt.date())?;
            date.at(dt.hour() as u8, dt.minute() as u8, dt.second() as u8)
        }
    }

    impl CalendarDate {
        /// Today's local calendar date at midnight. This is the only place
        /// the crate touches the wall clock; the arithmetic itself always
        /// takes an explicit reference date.
        pub fn today() -> Self {
            let date = chrono::Local::now().date_naive();
            // The wall clock sits well inside the supported year range
            Self::try_from(date).unwrap_or_else(|_| Self {
                year: MAX_YEAR,
                month: 12,
                day: 31,
                hour: 0,
                minute: 0,
                second: 0,
            })
        }

        /// The current local moment, with time-of-day
        pub fn now() -> Self {
            let dt = chrono::Local::now().naive_local();
            Self::try_from(dt).unwrap_or_else(|_| Self::today())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let date = CalendarDate::new(2024, 6, 15).expect("valid date should construct");
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
        assert!(date.is_midnight());
    }

    #[test]
    fn test_new_invalid_year() {
        assert!(matches!(
            CalendarDate::new(0, 6, 15),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(10000, 6, 15),
            Err(DateError::InvalidYear(10000))
        ));
        assert!(CalendarDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn test_new_invalid_month() {
        assert!(matches!(
            CalendarDate::new(2024, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_new_invalid_day() {
        // 30-day month
        assert!(matches!(
            CalendarDate::new(2024, 4, 31),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        // February, non-leap
        assert!(CalendarDate::new(2023, 2, 28).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        // February, leap
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2024, 2, 30).is_err());
        // Day zero
        assert!(CalendarDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_at_time() {
        let date = CalendarDate::new(2024, 6, 15).expect("valid date");
        let with_time = date.at(13, 45, 30).expect("valid time");
        assert_eq!(with_time.time(), (13, 45, 30));
        assert!(!with_time.is_midnight());
        assert_eq!(with_time.date_only(), date);

        assert!(date.at(24, 0, 0).is_err());
        assert!(date.at(12, 60, 0).is_err());
        assert!(date.at(12, 0, 60).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2400,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_all() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_ordering() {
        let earlier = CalendarDate::new(2024, 6, 14).expect("valid date");
        let later = CalendarDate::new(2024, 6, 15).expect("valid date");
        assert!(earlier < later);

        let morning = later.at(8, 0, 0).expect("valid time");
        let evening = later.at(20, 30, 0).expect("valid time");
        assert!(later < morning, "midnight sorts before any time-of-day");
        assert!(morning < evening);

        let next_year = CalendarDate::new(2025, 1, 1).expect("valid date");
        assert!(evening < next_year);
    }

    #[test]
    fn test_epoch_days_fixtures() {
        struct TestCase {
            date:     (u16, u8, u8),
            expected: i64,
        }

        let cases = [
            TestCase {
                date:     (1970, 1, 1),
                expected: 0,
            },
            TestCase {
                date:     (1970, 1, 2),
                expected: 1,
            },
            TestCase {
                date:     (1969, 12, 31),
                expected: -1,
            },
            TestCase {
                date:     (2000, 1, 1),
                expected: 10_957,
            },
            TestCase {
                date:     (2024, 6, 15),
                expected: 19_889,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let date = CalendarDate::new(y, m, d).expect("valid fixture date");
            assert_eq!(
                date.epoch_days(),
                case.expected,
                "epoch days for {y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn test_timestamp_millis() {
        let epoch = CalendarDate::new(1970, 1, 1).expect("valid date");
        assert_eq!(epoch.timestamp_millis(), 0);

        let with_time = epoch.at(1, 2, 3).expect("valid time");
        assert_eq!(
            with_time.timestamp_millis(),
            MS_PER_HOUR + 2 * MS_PER_MINUTE + 3000
        );

        let before = CalendarDate::new(1969, 12, 31).expect("valid date");
        assert_eq!(before.timestamp_millis(), -MS_PER_DAY);
    }

    #[test]
    fn test_normalized_rolls_forward() {
        // Feb 29 in a non-leap year becomes Mar 1
        let rolled = CalendarDate::new_normalized(2023, 2, 29);
        assert_eq!(rolled, CalendarDate::new(2023, 3, 1).expect("valid date"));

        // Feb 29 in a leap year is untouched
        let kept = CalendarDate::new_normalized(2024, 2, 29);
        assert_eq!(kept, CalendarDate::new(2024, 2, 29).expect("valid date"));

        // December overflow crosses into the next year
        let crossed = CalendarDate::new_normalized(2023, 12, 32);
        assert_eq!(crossed, CalendarDate::new(2024, 1, 1).expect("valid date"));
    }

    #[test]
    fn test_display() {
        let date = CalendarDate::new(2024, 6, 15).expect("valid date");
        assert_eq!(date.to_string(), "2024-06-15");

        let with_time = date.at(9, 5, 0).expect("valid time");
        assert_eq!(with_time.to_string(), "2024-06-15T09:05:00");
    }

    #[test]
    fn test_parse_date() {
        let date = "2024-06-15".parse::<CalendarDate>().expect("should parse");
        assert_eq!(date, CalendarDate::new(2024, 6, 15).expect("valid date"));

        let with_time = "2024-06-15T09:05".parse::<CalendarDate>().expect("should parse");
        assert_eq!(with_time.time(), (9, 5, 0));

        let with_seconds = "2024-06-15T09:05:42".parse::<CalendarDate>().expect("should parse");
        assert_eq!(with_seconds.time(), (9, 5, 42));
    }

    #[test]
    fn test_parse_whitespace() {
        let date = " 2024-06-15 ".parse::<CalendarDate>().expect("should parse");
        assert_eq!(date, CalendarDate::new(2024, 6, 15).expect("valid date"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!("".parse::<CalendarDate>(), Err(DateError::EmptyInput)));
        assert!(matches!(
            "   ".parse::<CalendarDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "2024-06".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-06-XX".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-30".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            "2024-06-15T25:00".parse::<CalendarDate>(),
            Err(DateError::InvalidTime { .. })
        ));
        assert!(matches!(
            "2024-06-15T09".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let date = CalendarDate::new(2024, 6, 15).expect("valid date");
        let json = serde_json::to_string(&date).expect("should serialize");
        assert_eq!(json, r#""2024-06-15""#);

        let parsed: CalendarDate = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-13-01""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }
}
