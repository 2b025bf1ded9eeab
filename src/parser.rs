//! CSV parsing for measurement runs and station reference tables.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::analyzers::types::{Sample, StationRecord};
use crate::error::{InputError, Result};

const SAMPLE_COLUMNS: &[&str] = &["distance", "dB", "speed"];
const STATION_COLUMNS: &[&str] = &["code", "station distance"];

/// Decodes a measurement run with at least `distance`, `dB` and `speed` columns.
///
/// # Errors
///
/// Returns [`InputError::MissingColumn`] if a required column is absent,
/// [`InputError::Csv`] if a row holds a non-numeric value and
/// [`InputError::NonFinite`] for `NaN` or infinite readings.
pub fn parse_samples(bytes: &[u8]) -> Result<Vec<Sample>> {
    let samples: Vec<Sample> = parse_table("samples", SAMPLE_COLUMNS, bytes)?;

    for (index, sample) in samples.iter().enumerate() {
        let fields = [
            ("distance", sample.distance),
            ("dB", sample.decibel),
            ("speed", sample.speed),
        ];
        if let Some(&(column, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InputError::NonFinite {
                table: "samples",
                row: index + 1,
                column,
            });
        }
    }

    Ok(samples)
}

/// Decodes a station table with `code` and `station distance` columns and an
/// optional `station` display name. Blank cells become missing values.
///
/// # Errors
///
/// Returns [`InputError::MissingColumn`] if a required column is absent.
pub fn parse_stations(bytes: &[u8]) -> Result<Vec<StationRecord>> {
    parse_table("stations", STATION_COLUMNS, bytes)
}

fn parse_table<T: DeserializeOwned>(
    table: &'static str,
    required: &'static [&'static str],
    bytes: &[u8],
) -> Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(bytes);

    check_columns(table, required, rdr.headers()?)?;

    let rows = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()?;
    debug!(table, rows = rows.len(), "Parsed CSV table");
    Ok(rows)
}

fn check_columns(
    table: &'static str,
    required: &'static [&'static str],
    headers: &StringRecord,
) -> Result<()> {
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(InputError::MissingColumn { table, column });
        }
    }
    Ok(())
}
