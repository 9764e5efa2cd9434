//! CSV job-sheet loader.
//!
//! # CSV format
//!
//! One row per parcel:
//!
//! ```csv
//! pickup_x,pickup_y,dropoff_x,dropoff_y,payout,weight,priority,duration_secs,release_secs
//! 1,1,18,12,120.0,2.0,3,180.0,0.0
//! 4,9,2,2,80.0,1.5,1,240.0,30.0
//! ```
//!
//! Rows are posted to a [`JobBoard`][crate::JobBoard] afterwards; the loader
//! itself returns parcels with `ParcelId::INVALID`, since IDs are the board's
//! to assign.  Negative payouts, weights, or durations are rejected at parse
//! time so a loaded sheet never carries nonsense values into scoring.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use courier_core::{Parcel, ParcelId, Tile};

use crate::JobError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct JobRecord {
    pickup_x: i32,
    pickup_y: i32,
    dropoff_x: i32,
    dropoff_y: i32,
    payout: f32,
    weight: f32,
    priority: i32,
    duration_secs: f32,
    release_secs: f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a job sheet from a CSV file.
pub fn load_jobs_csv(path: &Path) -> Result<Vec<Parcel>, JobError> {
    let file = std::fs::File::open(path).map_err(JobError::Io)?;
    load_jobs_reader(file)
}

/// Like [`load_jobs_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_jobs_reader<R: Read>(reader: R) -> Result<Vec<Parcel>, JobError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut parcels = Vec::new();

    for (row, result) in csv_reader.deserialize::<JobRecord>().enumerate() {
        let record = result.map_err(|e| JobError::Parse(e.to_string()))?;
        validate(&record, row)?;

        parcels.push(Parcel {
            id: ParcelId::INVALID, // assigned by the board at post time
            pickup: Tile::new(record.pickup_x, record.pickup_y),
            dropoff: Tile::new(record.dropoff_x, record.dropoff_y),
            payout: record.payout,
            weight: record.weight,
            priority: record.priority,
            duration_secs: record.duration_secs,
            release_secs: record.release_secs,
        });
    }

    Ok(parcels)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate(record: &JobRecord, row: usize) -> Result<(), JobError> {
    for (field, value) in [
        ("payout", record.payout),
        ("weight", record.weight),
        ("duration_secs", record.duration_secs),
        ("release_secs", record.release_secs),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(JobError::Parse(format!(
                "row {row}: {field} must be a finite value >= 0, got {value}"
            )));
        }
    }
    Ok(())
}
