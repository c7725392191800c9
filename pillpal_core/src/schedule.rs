//! Daily schedule expansion and time-of-day bucketing.
//!
//! Expands the medication list into the concrete doses owed on one date,
//! then partitions them into morning/afternoon/evening plan cards.

use crate::{recurrence::is_due, Error, Medication, Result};
use chrono::NaiveDate;
use uuid::Uuid;

/// One concrete (medication, time-of-day) obligation on a specific date.
///
/// Ephemeral: computed per query date, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DueDose {
    pub medication_id: Uuid,
    pub medication_name: String,
    /// "HH:MM", 24-hour.
    pub time: String,
}

/// Doses for one date, partitioned by time of day.
///
/// Morning is hours 5-11, afternoon 12-16, evening 17-23 wrapping through
/// midnight to 4. Each bucket preserves the relative order of its input.
#[derive(Clone, Debug, Default)]
pub struct DailyPlan {
    pub morning: Vec<DueDose>,
    pub afternoon: Vec<DueDose>,
    pub evening: Vec<DueDose>,
}

impl DailyPlan {
    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty() && self.evening.is_empty()
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len() + self.evening.len()
    }
}

/// Expand the medications due on the target date into dose slots.
///
/// Each due medication emits one [`DueDose`] per reminder time, in input
/// order. A due medication with no reminder times emits nothing.
pub fn expand_for_date(medications: &[Medication], target: NaiveDate) -> Vec<DueDose> {
    let mut doses = Vec::new();
    for medication in medications {
        if !is_due(medication, target) {
            continue;
        }
        for time in &medication.reminder_times {
            doses.push(DueDose {
                medication_id: medication.id,
                medication_name: medication.name.clone(),
                time: time.clone(),
            });
        }
    }
    tracing::debug!("Expanded {} doses for {}", doses.len(), target);
    doses
}

/// Partition doses into morning/afternoon/evening buckets.
///
/// A dose with a malformed time string is an error, not a silent drop: a
/// scheduled dose must never vanish from a patient-facing plan without
/// explanation.
pub fn bucket_by_time_of_day(doses: Vec<DueDose>) -> Result<DailyPlan> {
    let mut plan = DailyPlan::default();
    for dose in doses {
        let (hour, _minute) = parse_reminder_time(&dose.time).ok_or_else(|| {
            Error::InvalidScheduleData {
                medication: dose.medication_name.clone(),
                time: dose.time.clone(),
            }
        })?;

        match hour {
            5..=11 => plan.morning.push(dose),
            12..=16 => plan.afternoon.push(dose),
            // 17-23 and 0-4: evening wraps midnight
            _ => plan.evening.push(dose),
        }
    }
    Ok(plan)
}

/// Validate a medication's reminder times at ingestion.
///
/// The same strict parse as [`bucket_by_time_of_day`], applied before a
/// medication enters the store so malformed times are rejected up front.
pub fn validate_reminder_times(medication_name: &str, times: &[String]) -> Result<()> {
    for time in times {
        if parse_reminder_time(time).is_none() {
            return Err(Error::InvalidScheduleData {
                medication: medication_name.to_string(),
                time: time.clone(),
            });
        }
    }
    Ok(())
}

/// Strict "HH:MM" parse: hour 0-23, two-digit minute 0-59.
fn parse_reminder_time(time: &str) -> Option<(u32, u32)> {
    let (hour_part, minute_part) = time.trim().split_once(':')?;
    if hour_part.is_empty()
        || hour_part.len() > 2
        || minute_part.len() != 2
        || !hour_part.chars().all(|c| c.is_ascii_digit())
        || !minute_part.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let hour: u32 = hour_part.parse().ok()?;
    let minute: u32 = minute_part.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}
