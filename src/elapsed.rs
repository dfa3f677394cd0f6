use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, MONTHS_PER_YEAR, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
use crate::CalendarDate;

/// Calendar-aware breakdown of the time between two dates, alongside raw
/// unit totals.
///
/// The two views are computed independently and deliberately do not
/// reconcile: `years`/`months` follow the conventional "completed
/// years and months" rule used for human age, while the totals are plain
/// floors of the millisecond difference. `years * 12 + months` will not in
/// general agree with `total_days / 30`, and callers are expected to treat
/// the fields as separate facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Elapsed {
    /// Whole calendar years between the two dates
    pub years: i32,
    /// Remaining whole months after the years (0-11 when the subject does
    /// not lie in the future)
    pub months: i32,
    /// Floor of the total duration in weeks
    pub total_weeks: i64,
    /// Floor of the total duration in days
    pub total_days: i64,
    /// Floor of the total duration in hours
    pub total_hours: i64,
    /// Floor of the total duration in minutes
    pub total_minutes: i64,
}

impl Elapsed {
    /// Computes the elapsed time from `subject` to `reference`.
    ///
    /// A `reference` earlier than `subject` produces negative values rather
    /// than an error; callers that consider a future subject invalid guard
    /// for it themselves.
    ///
    /// A Feb 29 subject is compared by its literal day (29), so in non-leap
    /// reference years the day comparison always lands in the "not yet
    /// reached" branch. That is the intended behavior, not a gap.
    pub fn between(subject: CalendarDate, reference: CalendarDate) -> Self {
        let mut years = i32::from(reference.year()) - i32::from(subject.year());
        let mut months = i32::from(reference.month()) - i32::from(subject.month());
        if months < 0 {
            years -= 1;
            months += MONTHS_PER_YEAR;
        }
        if reference.day() < subject.day() {
            months -= 1;
            if months < 0 {
                years -= 1;
                months += MONTHS_PER_YEAR;
            }
        }

        // Raw totals come from the millisecond difference alone; each unit
        // is floored independently, none is derived from the breakdown.
        let ms = reference.timestamp_millis() - subject.timestamp_millis();
        let total_minutes = ms.div_euclid(MS_PER_MINUTE);
        let total_hours = ms.div_euclid(MS_PER_HOUR);
        let total_days = ms.div_euclid(MS_PER_DAY);
        let total_weeks = total_days.div_euclid(DAYS_PER_WEEK);

        Self {
            years,
            months,
            total_weeks,
            total_days,
            total_hours,
            total_minutes,
        }
    }

    /// Elapsed time from `subject` up to the current local moment.
    #[cfg(feature = "chrono")]
    pub fn since(subject: CalendarDate) -> Self {
        Self::between(subject, CalendarDate::now())
    }
}
