//! Report types produced by the aggregators.

use serde::Serialize;

use crate::filter::FilterSummary;

/// Result for an optional column. Both "column absent" and "column present
/// but empty for this selection" are reported, and kept apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ColumnStats<T> {
    Available(T),
    /// The source table has no such column.
    MissingColumn,
    /// The column exists but no row in the selection has a value.
    NoValues,
}

impl<T> ColumnStats<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            ColumnStats::Available(v) => Some(v),
            _ => None,
        }
    }
}

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeReport {
    /// Month number, 1-12.
    pub popular_month: Option<u32>,
    pub popular_day: Option<String>,
    pub popular_hour: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub popular_start_station: Option<String>,
    pub popular_end_station: Option<String>,
    /// `"<start> to <end>"`.
    pub popular_route: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub trip_count: usize,
    /// Seconds.
    pub total_duration: f64,
    /// Seconds; `None` when there are no trips.
    pub mean_duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    /// Count per user type, in order of first appearance.
    pub user_types: Vec<(String, usize)>,
    pub genders: ColumnStats<Vec<(String, usize)>>,
    pub birth_years: ColumnStats<BirthYearStats>,
}

/// All four reports for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct TripSummary {
    pub filter: FilterSummary,
    pub trips: usize,
    pub time: TimeReport,
    pub stations: StationReport,
    pub durations: DurationReport,
    pub users: UserReport,
}
