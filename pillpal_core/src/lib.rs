#![forbid(unsafe_code)]

//! Core domain model and schedule logic for PillPal.
//!
//! This crate provides:
//! - Domain types (medications, recurrence policies, dose statuses)
//! - Day-mask codec and recurrence matching
//! - Daily schedule expansion with time-of-day bucketing
//! - Day-history aggregation and streak counting
//! - Persistence (medication store, dose log, config)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod daymask;
pub mod recurrence;
pub mod schedule;
pub mod history;
pub mod store;
pub mod doselog;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use daymask::{decode_day_mask, encode_day_mask};
pub use recurrence::is_due;
pub use schedule::{bucket_by_time_of_day, expand_for_date, validate_reminder_times, DailyPlan, DueDose};
pub use history::{aggregate_day, compute_streak};
pub use store::{add_medication, load_medications, save_medications};
pub use doselog::{append_dose, day_histories, load_dose_log, DoseRecord};
