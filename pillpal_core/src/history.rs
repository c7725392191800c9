//! Day-history aggregation and streak counting.
//!
//! These folds never read the clock; whether the newest day is still in
//! progress is a fact the caller supplies.

use crate::{DayHistory, DoseEntry, DoseStatus};
use chrono::NaiveDate;

/// Fold one day's dose entries into a [`DayHistory`].
///
/// `all_taken` holds iff the day has at least one entry and every entry
/// was taken; an empty day is never "fully taken".
pub fn aggregate_day(date: NaiveDate, entries: Vec<DoseEntry>) -> DayHistory {
    let all_taken =
        !entries.is_empty() && entries.iter().all(|e| e.status == DoseStatus::Taken);
    DayHistory {
        date,
        entries,
        all_taken,
    }
}

/// Count the streak of consecutive fully-taken days, most-recent-first.
///
/// Walks the sequence from the front and stops at the first day that is
/// not fully taken. When `most_recent_in_progress` is set the first day
/// is skipped entirely: a day still underway neither counts toward nor
/// breaks the streak.
pub fn compute_streak(days: &[DayHistory], most_recent_in_progress: bool) -> u32 {
    let mut iter = days.iter();
    if most_recent_in_progress {
        iter.next();
    }
    iter.take_while(|day| day.all_taken).count() as u32
}
