//! Flat CSV export of labeled flight samples
//!
//! One row per sample with the columns
//! `time_min,altitude_m,speed_kmh,climb_rate_mpm,fuel_used_kg,heading_deg,anomaly`.
//! Floats are written in their shortest round-trip form, so reading an
//! exported file gives back exactly the values that were written. The
//! `anomaly` column holds `-1` for anomalies and `1` for normal samples.

use flight_core::{Error, Label, LabeledSample, Result, Sample};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// One CSV row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub time_min: u32,
    pub altitude_m: f64,
    pub speed_kmh: f64,
    pub climb_rate_mpm: f64,
    pub fuel_used_kg: f64,
    pub heading_deg: f64,
    pub anomaly: Label,
}

impl From<&LabeledSample> for FlightRecord {
    fn from(labeled: &LabeledSample) -> Self {
        let s = &labeled.sample;
        Self {
            time_min: s.time,
            altitude_m: s.altitude,
            speed_kmh: s.speed,
            climb_rate_mpm: s.climb_rate,
            fuel_used_kg: s.fuel_used,
            heading_deg: s.heading,
            anomaly: labeled.label,
        }
    }
}

impl From<FlightRecord> for LabeledSample {
    fn from(record: FlightRecord) -> Self {
        LabeledSample::new(
            Sample {
                time: record.time_min,
                altitude: record.altitude_m,
                speed: record.speed_kmh,
                climb_rate: record.climb_rate_mpm,
                fuel_used: record.fuel_used_kg,
                heading: record.heading_deg,
            },
            record.anomaly,
        )
    }
}

fn export_error(e: csv::Error) -> Error {
    Error::Export(e.to_string())
}

/// Write labeled samples with a header row
pub fn write_csv<W: Write>(writer: W, samples: &[LabeledSample]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for labeled in samples {
        wtr.serialize(FlightRecord::from(labeled))
            .map_err(export_error)?;
    }
    // An empty export still carries the header
    if samples.is_empty() {
        wtr.write_record([
            "time_min",
            "altitude_m",
            "speed_kmh",
            "climb_rate_mpm",
            "fuel_used_kg",
            "heading_deg",
            "anomaly",
        ])
        .map_err(export_error)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read samples written by [`write_csv`]
///
/// Rows whose `anomaly` value is not `-1` or `1` are rejected.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<LabeledSample>> {
    let mut rdr = csv::Reader::from_reader(reader);
    rdr.deserialize::<FlightRecord>()
        .map(|record| record.map(LabeledSample::from).map_err(export_error))
        .collect()
}

/// Write labeled samples to a file, replacing it if it exists
pub fn export_to_path<P: AsRef<Path>>(path: P, samples: &[LabeledSample]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(file, samples)?;
    debug!("Wrote {} rows to {}", samples.len(), path.display());
    Ok(())
}
