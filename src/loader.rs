//! Reads a city's trip CSV into a [`Dataset`].

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::CitySources;
use crate::dataset::{Dataset, OptionalColumn, TripRecord};
use crate::error::DataSourceError;
use crate::time_utils::parse_timestamp;

const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
];

/// One CSV row as it appears on disk. Unknown columns (such as the unnamed
/// index column some exports carry) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads the configured source table for `city`.
#[tracing::instrument(skip(sources), fields(data_dir = %sources.data_dir().display()))]
pub fn load_city(sources: &CitySources, city: &str) -> Result<Dataset, DataSourceError> {
    let path = sources.resolve(city)?;
    let dataset = load_path(&path, city)?;
    info!(
        city,
        rows = dataset.len(),
        gender = dataset.has_column(OptionalColumn::Gender),
        birth_year = dataset.has_column(OptionalColumn::BirthYear),
        "Trip data loaded"
    );
    Ok(dataset)
}

/// Loads a trip table from a CSV file, labelling the result with `source`.
pub fn load_path(path: &Path, source: &str) -> Result<Dataset, DataSourceError> {
    debug!(path = %path.display(), "Opening trip CSV");
    let file = File::open(path).map_err(|e| DataSourceError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_reader(file, path, source)
}

/// Parses trip rows from any reader. `path` is only used in error messages.
pub fn load_reader<R: Read>(
    reader: R,
    path: &Path,
    source: &str,
) -> Result<Dataset, DataSourceError> {
    let csv_err = |e: csv::Error| DataSourceError::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(column) = REQUIRED_COLUMNS.iter().copied().find(|c| !has(c)) {
        return Err(DataSourceError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }
    let has_gender = has(OptionalColumn::Gender.header());
    let has_birth_year = has(OptionalColumn::BirthYear.header());

    let mut records = Vec::new();
    for (id, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(csv_err)?;
        records.push(to_record(id, raw, path)?);
    }

    Ok(Dataset::new(source, has_gender, has_birth_year, records))
}

fn to_record(id: usize, raw: RawTrip, path: &Path) -> Result<TripRecord, DataSourceError> {
    // 1-based data row, header excluded
    let row = id + 1;
    let path_buf = || PathBuf::from(path);

    let start_time =
        parse_timestamp(&raw.start_time).ok_or_else(|| DataSourceError::InvalidTimestamp {
            path: path_buf(),
            row,
            value: raw.start_time.clone(),
        })?;

    let end_time = match raw.end_time.as_deref() {
        None => None,
        Some(value) => Some(parse_timestamp(value).ok_or_else(|| {
            DataSourceError::InvalidTimestamp {
                path: path_buf(),
                row,
                value: value.to_string(),
            }
        })?),
    };

    if !raw.trip_duration.is_finite() {
        return Err(DataSourceError::InvalidValue {
            path: path_buf(),
            row,
            column: "Trip Duration",
            value: raw.trip_duration.to_string(),
        });
    }

    let birth_year = raw
        .birth_year
        .map(|year| to_year(year).ok_or(year))
        .transpose()
        .map_err(|year| DataSourceError::InvalidValue {
            path: path_buf(),
            row,
            column: "Birth Year",
            value: year.to_string(),
        })?;

    Ok(TripRecord {
        id,
        start_time,
        end_time,
        trip_duration: raw.trip_duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year,
    })
}

/// Birth years are often exported as floats (`1989.0`); only whole values are accepted.
fn to_year(value: f64) -> Option<i32> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}
