//! Medication list persistence.
//!
//! The medication list lives in a single JSON file under the data
//! directory. Reads take a shared lock; writes go through a locked temp
//! file renamed over the original so a crash never leaves a half-written
//! list. A corrupt file is an error, not an empty list: silently showing
//! a patient an empty schedule is the one failure mode this module must
//! never produce.

use crate::{Error, Medication, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load the medication list, with shared locking.
///
/// A missing file is an empty list.
pub fn load_medications(path: &Path) -> Result<Vec<Medication>> {
    if !path.exists() {
        tracing::info!("No medication file found at {:?}, starting empty", path);
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    let read_result = reader.read_to_string(&mut contents);
    file.unlock()?;
    read_result?;

    let medications: Vec<Medication> = serde_json::from_str(&contents)
        .map_err(|e| Error::Store(format!("corrupt medication file {:?}: {}", path, e)))?;

    tracing::debug!("Loaded {} medications from {:?}", medications.len(), path);
    Ok(medications)
}

/// Save the medication list, atomically.
///
/// Writes to an exclusively-locked temp file in the same directory, syncs,
/// then renames over the original.
pub fn save_medications(path: &Path, medications: &[Medication]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "medication path missing parent")
    })?)?;

    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string_pretty(medications)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {} medications to {:?}", medications.len(), path);
    Ok(())
}

/// Load the list, append a medication, and save it back.
pub fn add_medication(path: &Path, medication: Medication) -> Result<()> {
    let mut medications = load_medications(path)?;
    tracing::info!("Adding medication '{}'", medication.name);
    medications.push(medication);
    save_medications(path, &medications)
}
