//! Core domain types for the PillPal schedule evaluator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Weekdays and their canonical Monday-first order
//! - Medications and their recurrence policies
//! - Dose statuses and per-day history records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Weekday
// ============================================================================

/// Day of the week, Monday-first to match the day-mask layout.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Canonical order, index 0 = Monday. Matches day-mask positions.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Three-letter display label ("Mon" .. "Sun").
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Parse a weekday label leniently.
    ///
    /// Accepts full names and abbreviations in any case; only the first
    /// three letters are significant ("monday", "Mon" and "MON" all match).
    pub fn from_label(label: &str) -> Option<Weekday> {
        let normalized: String = label
            .trim()
            .chars()
            .take(3)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "mon" => Some(Weekday::Mon),
            "tue" => Some(Weekday::Tue),
            "wed" => Some(Weekday::Wed),
            "thu" => Some(Weekday::Thu),
            "fri" => Some(Weekday::Fri),
            "sat" => Some(Weekday::Sat),
            "sun" => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// Convert from chrono's weekday type.
    pub fn from_chrono(day: chrono::Weekday) -> Weekday {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

/// Weekday labels arrive from different producers as full names or
/// abbreviations in any case; deserialization goes through the lenient
/// parse so a stored `"Monday"` loads the same as `"mon"`. Serialization
/// stays canonical lowercase.
impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Weekday::from_label(&label).ok_or_else(|| {
            serde::de::Error::unknown_variant(
                &label,
                &["mon", "tue", "wed", "thu", "fri", "sat", "sun"],
            )
        })
    }
}

// ============================================================================
// Medication and Recurrence
// ============================================================================

/// Recurrence policy deciding which calendar dates a medication is due.
///
/// Exactly one variant applies to a medication at a time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recurrence {
    /// Due on every date.
    Daily,
    /// Due on the listed weekdays. An empty set matches no date.
    Weekly { active_days: Vec<Weekday> },
    /// Due on every date in the inclusive range. A missing bound or an
    /// inverted range matches no date.
    Custom {
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    },
    /// Due on a single date, stored as the producer formatted it
    /// ("Tue, Aug 26, 2025" style).
    OneOff { date: String },
}

/// A recurring or one-off treatment record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    /// Time-of-day slots ("HH:MM", 24-hour), one per daily dose. May be empty.
    pub reminder_times: Vec<String>,
    pub notes: Option<String>,
    pub recurrence: Recurrence,
}

// ============================================================================
// Dose Status and History
// ============================================================================

/// Outcome of a single scheduled dose, attached by the status source.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DoseStatus {
    Taken,
    Missed,
    Upcoming,
}

/// One (medication, time, status) line within a day's history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoseEntry {
    pub medication_name: String,
    pub time: String,
    pub status: DoseStatus,
}

/// Aggregation over one calendar date. Never mutated after construction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayHistory {
    pub date: NaiveDate,
    pub entries: Vec<DoseEntry>,
    /// True iff the day has at least one entry and every entry was taken.
    pub all_taken: bool,
}
