use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::MS_PER_DAY;
use crate::CalendarDate;

/// How an anniversary falling on the reference day itself is treated.
///
/// The surrounding application needs both rules: the birthday countdown
/// shows "Today!" when the date matches, while the dashboard statistics
/// roll straight over to next year's occurrence. Each call site declares
/// its rule explicitly instead of duplicating the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodayPolicy {
    /// A match on the reference day counts as the occurrence (0 days left)
    Inclusive,
    /// A match on the reference day rolls over to the following year
    Strict,
}

/// The next occurrence of a recurring month/day, with the number of days
/// until it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anniversary {
    next_occurrence: CalendarDate,
    days_remaining:  u32,
}

impl Anniversary {
    /// Computes the next occurrence of `subject`'s month/day on or after
    /// `today` (only the month and day of `subject` are used).
    ///
    /// The candidate is built in `today`'s year and rolled to the next year
    /// once it lies in the past — or also when it is today, under
    /// [`TodayPolicy::Strict`]. A day that does not exist in the candidate
    /// year normalizes forward, so a Feb 29 subject lands on Mar 1 in
    /// non-leap years. Time-of-day on `today` is ignored; occurrences are
    /// whole calendar days.
    pub fn next(subject: CalendarDate, today: CalendarDate, policy: TodayPolicy) -> Self {
        let today = today.date_only();
        let mut candidate = CalendarDate::new_normalized(today.year(), subject.month(), subject.day());

        let rolls_over = match policy {
            TodayPolicy::Inclusive => candidate < today,
            TodayPolicy::Strict => candidate <= today,
        };
        if rolls_over {
            candidate = CalendarDate::new_normalized(today.year() + 1, subject.month(), subject.day());
        }

        let days_remaining = match policy {
            // Whole-calendar-day difference
            TodayPolicy::Inclusive => candidate.epoch_days() - today.epoch_days(),
            // Ceiling of the raw duration in days
            TodayPolicy::Strict => {
                let ms = candidate.timestamp_millis() - today.timestamp_millis();
                (ms + MS_PER_DAY - 1).div_euclid(MS_PER_DAY)
            }
        };
        // The candidate is at most one year ahead of today
        let days_remaining = u32::try_from(days_remaining).unwrap_or(0);

        Self {
            next_occurrence: candidate,
            days_remaining,
        }
    }

    /// Next occurrence of `subject`'s month/day relative to today's local date.
    #[cfg(feature = "chrono")]
    pub fn upcoming(subject: CalendarDate, policy: TodayPolicy) -> Self {
        Self::next(subject, CalendarDate::today(), policy)
    }

    /// The date the anniversary next occurs (in the reference year or the
    /// one after)
    pub const fn next_occurrence(&self) -> CalendarDate {
        self.next_occurrence
    }

    /// Days until the occurrence; 0 means today
    pub const fn days_remaining(&self) -> u32 {
        self.days_remaining
    }
}

impl fmt::Display for Anniversary {
    /// Renders the countdown the way the reminder cards do: "Today!",
    /// "Tomorrow", or "`N` days".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days_remaining {
            0 => write!(f, "Today!"),
            1 => write!(f, "Tomorrow"),
            n => write!(f, "{n} days"),
        }
    }
}
