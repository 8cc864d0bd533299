//! In-memory trip table for one city.

use chrono::NaiveDateTime;
use std::fmt;

/// One row of a city's trip table.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Position of the row in the source file, starting at 0.
    pub id: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// Optional columns that some cities' tables omit entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalColumn {
    Gender,
    BirthYear,
}

impl OptionalColumn {
    pub fn header(self) -> &'static str {
        match self {
            OptionalColumn::Gender => "Gender",
            OptionalColumn::BirthYear => "Birth Year",
        }
    }
}

/// Ordered trips for one city plus which optional columns its source carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    source: String,
    has_gender: bool,
    has_birth_year: bool,
    records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(
        source: impl Into<String>,
        has_gender: bool,
        has_birth_year: bool,
        records: Vec<TripRecord>,
    ) -> Self {
        Self {
            source: source.into(),
            has_gender,
            has_birth_year,
            records,
        }
    }

    /// Same source and column layout, different rows.
    pub fn with_records(&self, records: Vec<TripRecord>) -> Self {
        Self {
            source: self.source.clone(),
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
            records,
        }
    }

    /// Label of the table this dataset came from (usually the city name).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_column(&self, column: OptionalColumn) -> bool {
        match column {
            OptionalColumn::Gender => self.has_gender,
            OptionalColumn::BirthYear => self.has_birth_year,
        }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pairs `record` with this dataset's column layout for display.
    pub fn view<'a>(&self, record: &'a TripRecord) -> RecordView<'a> {
        RecordView {
            record,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A record together with the column layout of its dataset, for display.
pub struct RecordView<'a> {
    pub record: &'a TripRecord,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl fmt::Display for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        let blank = |v: Option<String>| v.unwrap_or_default();

        writeln!(f, "Trip #{}", r.id)?;
        writeln!(f, "  Start Time:    {}", r.start_time)?;
        writeln!(
            f,
            "  End Time:      {}",
            blank(r.end_time.map(|t| t.to_string()))
        )?;
        writeln!(f, "  Trip Duration: {}", r.trip_duration)?;
        writeln!(f, "  Start Station: {}", blank(r.start_station.clone()))?;
        writeln!(f, "  End Station:   {}", blank(r.end_station.clone()))?;
        write!(f, "  User Type:     {}", blank(r.user_type.clone()))?;
        if self.has_gender {
            write!(f, "\n  Gender:        {}", blank(r.gender.clone()))?;
        }
        if self.has_birth_year {
            write!(
                f,
                "\n  Birth Year:    {}",
                blank(r.birth_year.map(|y| y.to_string()))
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::time_utils::parse_timestamp;

    /// Builds a record with the fields the aggregators look at.
    pub fn trip(id: usize, start: &str, start_station: &str, end_station: &str) -> TripRecord {
        TripRecord {
            id,
            start_time: parse_timestamp(start).unwrap(),
            end_time: None,
            trip_duration: 600.0,
            start_station: Some(start_station.to_string()),
            end_station: Some(end_station.to_string()),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    pub fn dataset(records: Vec<TripRecord>) -> Dataset {
        Dataset::new("test", true, true, records)
    }
}
