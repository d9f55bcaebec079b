use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

pub const PROGRAM_WEEKS: u32 = 12;
pub const DAYS_PER_WEEK: u32 = 7;
/// Elapsed days at which the program counts as completed (12 x 7).
pub const PROGRAM_DAYS: u32 = PROGRAM_WEEKS * DAYS_PER_WEEK;

/// How two instants are turned into a whole number of elapsed days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// Both instants are truncated to their UTC calendar date first.
    /// Enrolling at 23:59 and checking at 00:01 is one elapsed day.
    #[default]
    Calendar,
    /// Whole 24-hour periods since the enrollment instant.
    Rolling,
}

impl DayBoundary {
    /// Signed whole days from `from` to `to`.
    pub fn days_between(self, from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
        match self {
            DayBoundary::Calendar => (to.date_naive() - from.date_naive()).num_days(),
            DayBoundary::Rolling => (to - from).num_days(),
        }
    }
}

/// A learner's position in the program, derived from (enrollment, now).
/// Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// 1..=12, clamped once the program is over.
    pub week_number: u32,
    /// 1..=7
    pub day_number: u32,
    /// 1-based program day: enrollment day is 1.
    pub total_elapsed_days: u32,
    pub completed: bool,
}

impl ProgressSnapshot {
    /// Whole days since enrollment (0 on the enrollment day).
    pub fn elapsed_days(&self) -> u32 {
        self.total_elapsed_days - 1
    }

    /// Week/day pair for curriculum lookups.
    pub fn position(&self) -> (u32, u32) {
        (self.week_number, self.day_number)
    }
}

/// Progress with the default calendar-day boundary.
pub fn compute_progress(enrolled_at: DateTime<Utc>, now: DateTime<Utc>) -> ProgressSnapshot {
    compute_progress_with(DayBoundary::Calendar, enrolled_at, now)
}

/// Pure mapping from (enrollment instant, evaluation instant) to a snapshot.
/// Negative elapsed time (clock skew, future enrollment) reads as day one.
pub fn compute_progress_with(
    boundary: DayBoundary,
    enrolled_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ProgressSnapshot {
    let raw = boundary.days_between(enrolled_at, now);
    let elapsed = raw.clamp(0, u32::MAX as i64 - 1) as u32;

    let week_number = (elapsed / DAYS_PER_WEEK + 1).min(PROGRAM_WEEKS);
    let day_number = elapsed % DAYS_PER_WEEK + 1;

    ProgressSnapshot {
        week_number,
        day_number,
        total_elapsed_days: elapsed + 1,
        completed: elapsed >= PROGRAM_DAYS,
    }
}
