use serde::{Deserialize, Serialize};

use crate::consts::{DECEMBER, EPOCH_WEEKDAY, JANUARY};
use crate::prelude::*;
use crate::CalendarDate;

/// The twelve western zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[display(fmt = "Capricorn")]
    Capricorn,
    #[display(fmt = "Aquarius")]
    Aquarius,
    #[display(fmt = "Pisces")]
    Pisces,
    #[display(fmt = "Aries")]
    Aries,
    #[display(fmt = "Taurus")]
    Taurus,
    #[display(fmt = "Gemini")]
    Gemini,
    #[display(fmt = "Cancer")]
    Cancer,
    #[display(fmt = "Leo")]
    Leo,
    #[display(fmt = "Virgo")]
    Virgo,
    #[display(fmt = "Libra")]
    Libra,
    #[display(fmt = "Scorpio")]
    Scorpio,
    #[display(fmt = "Sagittarius")]
    Sagittarius,
}

/// Sign date ranges as (sign, start month, start day, end month, end day),
/// inclusive on both ends. Capricorn spans the year boundary, which the
/// lookup predicate handles without a special case.
const ZODIAC_TABLE: [(ZodiacSign, u8, u8, u8, u8); 12] = [
    (ZodiacSign::Capricorn, 12, 22, 1, 19),
    (ZodiacSign::Aquarius, 1, 20, 2, 18),
    (ZodiacSign::Pisces, 2, 19, 3, 20),
    (ZodiacSign::Aries, 3, 21, 4, 19),
    (ZodiacSign::Taurus, 4, 20, 5, 20),
    (ZodiacSign::Gemini, 5, 21, 6, 20),
    (ZodiacSign::Cancer, 6, 21, 7, 22),
    (ZodiacSign::Leo, 7, 23, 8, 22),
    (ZodiacSign::Virgo, 8, 23, 9, 22),
    (ZodiacSign::Libra, 9, 23, 10, 22),
    (ZodiacSign::Scorpio, 10, 23, 11, 21),
    (ZodiacSign::Sagittarius, 11, 22, 12, 21),
];

impl ZodiacSign {
    /// Sign for the given month and day. First matching range wins; the
    /// twelve ranges are exhaustive over valid month/day pairs, so the
    /// year-end fallback (months 12 and 1 belong to Capricorn) can only be
    /// reached with out-of-range input.
    pub fn from_month_day(month: u8, day: u8) -> Self {
        ZODIAC_TABLE
            .iter()
            .find(|(_, start_month, start_day, end_month, end_day)| {
                (month == *start_month && day >= *start_day)
                    || (month == *end_month && day <= *end_day)
            })
            .map_or_else(
                || {
                    debug_assert!(month == DECEMBER || month == JANUARY);
                    Self::Capricorn
                },
                |(sign, ..)| *sign,
            )
    }
}

/// Days of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    /// Weekday of the given date, from its epoch day number (1970-01-01 was
    /// a Thursday). English names only; no locale parameter is exposed.
    pub fn of(date: CalendarDate) -> Self {
        match (date.epoch_days() + EPOCH_WEEKDAY).rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

/// Deterministic lookups derived from a single date: zodiac sign and
/// day-of-week. Pure — no clock involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivedAttributes {
    pub zodiac_sign: ZodiacSign,
    pub weekday:     Weekday,
}

impl DerivedAttributes {
    pub fn of(date: CalendarDate) -> Self {
        Self {
            zodiac_sign: ZodiacSign::from_month_day(date.month(), date.day()),
            weekday:     Weekday::of(date),
        }
    }
}
