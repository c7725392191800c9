//! Dose outcome log.
//!
//! Every recorded dose outcome is one CSV row in `doses.csv`. The log is
//! append-only; history screens rebuild day summaries from it on demand.
//! Loading is lenient per row so one bad line never hides the rest of the
//! patient's history.

use crate::history::aggregate_day;
use crate::{DayHistory, DoseEntry, DoseStatus, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::path::Path;
use uuid::Uuid;

/// One recorded dose outcome.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoseRecord {
    pub date: NaiveDate,
    pub medication_id: Uuid,
    pub medication_name: String,
    pub time: String,
    pub status: DoseStatus,
}

/// Append one record to the log, creating the file (with headers) if needed.
pub fn append_dose(path: &Path, record: &DoseRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let write_headers = !path.exists() || std::fs::metadata(path)?.len() == 0;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(write_headers)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;

    tracing::debug!(
        "Logged {} {:?} for '{}' on {}",
        record.time,
        record.status,
        record.medication_name,
        record.date
    );
    Ok(())
}

/// Load every parseable record from the log.
///
/// A missing file is an empty log. Bad rows are warned and skipped.
pub fn load_dose_log(path: &Path) -> Result<Vec<DoseRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize::<DoseRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Failed to deserialize dose log row: {}", e);
            }
        }
    }

    tracing::debug!("Loaded {} dose records from {:?}", records.len(), path);
    Ok(records)
}

/// Group records by date into day summaries, newest first.
///
/// Entries within a day keep their log order. The newest-first ordering is
/// what [`crate::history::compute_streak`] expects.
pub fn day_histories(records: &[DoseRecord]) -> Vec<DayHistory> {
    let mut by_date: BTreeMap<NaiveDate, Vec<DoseEntry>> = BTreeMap::new();
    for record in records {
        by_date.entry(record.date).or_default().push(DoseEntry {
            medication_name: record.medication_name.clone(),
            time: record.time.clone(),
            status: record.status,
        });
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, entries)| aggregate_day(date, entries))
        .collect()
}
