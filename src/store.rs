//! Snapshot persistence for the last computed loan.
//!
//! The session lives in a single JSON file, a fixed slot that each save
//! overwrites. Snapshots carry an explicit version tag so a load from an
//! older schema fails cleanly instead of deserializing into the wrong shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::schedule::{AmortizationResult, LoanTerms};

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Default session slot, relative to the working directory.
pub const DEFAULT_SLOT: &str = "loan_session.json";

/// A persisted calculation: the terms it was run with and its full result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLoan {
    pub version: u32,
    pub terms: LoanTerms,
    pub result: AmortizationResult,
}

/// Writes the calculation to the session slot, replacing any previous one.
pub fn save(path: &Path, terms: &LoanTerms, result: &AmortizationResult) -> Result<()> {
    let snapshot = SavedLoan {
        version: SNAPSHOT_VERSION,
        terms: terms.clone(),
        result: result.clone(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads the session slot back.
///
/// # Errors
///
/// [`ScheduleError::SnapshotVersion`] when the slot was written by a
/// different schema version; I/O and JSON errors otherwise.
pub fn load(path: &Path) -> Result<SavedLoan> {
    let json = fs::read_to_string(path)?;
    let snapshot: SavedLoan = serde_json::from_str(&json)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(ScheduleError::SnapshotVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(snapshot)
}

/// Removes the session slot. A slot that does not exist is not an error.
pub fn clear(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
