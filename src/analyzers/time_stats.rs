use crate::analyzers::types::TimeReport;
use crate::analyzers::utility::mode;
use crate::dataset::Dataset;
use crate::time_utils::{hour_of, month_of, weekday_name, weekday_of};

/// Most frequent month, day of week and start hour across `dataset`.
pub fn time_stats(dataset: &Dataset) -> TimeReport {
    let starts = || dataset.iter().map(|r| &r.start_time);

    TimeReport {
        popular_month: mode(starts().map(month_of)),
        popular_day: mode(starts().map(|ts| weekday_name(weekday_of(ts)))).map(str::to_string),
        popular_hour: mode(starts().map(hour_of)),
    }
}
