/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Milliseconds in one minute
pub const MS_PER_MINUTE: i64 = 60_000;
/// Milliseconds in one hour
pub const MS_PER_HOUR: i64 = 3_600_000;
/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;
/// Days in one week
pub const DAYS_PER_WEEK: i64 = 7;

/// 1970-01-01 was a Thursday; offset maps epoch day 0 to weekday index 4
/// (0 = Sunday)
pub(crate) const EPOCH_WEEKDAY: i64 = 4;

/// Months per year, used when borrowing in the calendar breakdown
pub(crate) const MONTHS_PER_YEAR: i32 = 12;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and time-of-day parts (ISO 8601)
pub const TIME_DESIGNATOR: char = 'T';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
