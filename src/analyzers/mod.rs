//! Descriptive statistics over a filtered trip table.
//!
//! Each aggregator is a pure function of a [`Dataset`](crate::dataset::Dataset)
//! and tolerates an empty selection: "no data" is part of the report types
//! rather than an error.

pub mod duration_stats;
pub mod station_stats;
pub mod time_stats;
pub mod types;
pub mod user_stats;
pub mod utility;

use crate::dataset::Dataset;
use crate::filter::FilterSpec;
use types::TripSummary;

pub use duration_stats::duration_stats;
pub use station_stats::station_stats;
pub use time_stats::time_stats;
pub use user_stats::user_stats;

/// Runs all four aggregators over an already filtered dataset.
pub fn summarize(spec: &FilterSpec, dataset: &Dataset) -> TripSummary {
    TripSummary {
        filter: spec.into(),
        trips: dataset.len(),
        time: time_stats(dataset),
        stations: station_stats(dataset),
        durations: duration_stats(dataset),
        users: user_stats(dataset),
    }
}
