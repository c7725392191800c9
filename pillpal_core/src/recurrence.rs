//! Recurrence matching: is a medication due on a given date?
//!
//! The rules are evaluated against a caller-supplied target date so every
//! decision is deterministic and testable with fixed dates.

use crate::{Medication, Recurrence, Weekday};
use chrono::{Datelike, NaiveDate};

/// One-off dates travel in this shape, e.g. "Tue, Aug 26, 2025".
const ONE_OFF_FORMAT: &str = "%a, %b %-d, %Y";
const ONE_OFF_PARSE_FORMAT: &str = "%a, %b %d, %Y";

/// Decide whether a medication is due on the target date.
pub fn is_due(medication: &Medication, target: NaiveDate) -> bool {
    match &medication.recurrence {
        Recurrence::Daily => true,

        Recurrence::Weekly { active_days } => {
            let weekday = Weekday::from_chrono(target.weekday());
            active_days.contains(&weekday)
        }

        Recurrence::Custom {
            start_date,
            end_date,
        } => match (start_date, end_date) {
            // Inclusive both ends; an inverted range simply never matches
            (Some(start), Some(end)) => *start <= target && target <= *end,
            _ => false,
        },

        Recurrence::OneOff { date } => one_off_matches(date, target),
    }
}

/// Match a stored one-off date against the target.
///
/// The stored string may arrive pre-formatted from one producer or as a
/// raw parseable string from another, so two paths are tried: a literal
/// case-insensitive compare against the target formatted the same way,
/// then a parse of the stored string as a calendar date. A string that
/// survives neither path is simply not due.
fn one_off_matches(stored: &str, target: NaiveDate) -> bool {
    let stored = stored.trim();
    let formatted = target.format(ONE_OFF_FORMAT).to_string();
    if stored.eq_ignore_ascii_case(&formatted) {
        return true;
    }

    match NaiveDate::parse_from_str(stored, ONE_OFF_PARSE_FORMAT) {
        Ok(parsed) => parsed == target,
        Err(err) => {
            tracing::debug!("Unparseable one-off date '{}': {}", stored, err);
            false
        }
    }
}
