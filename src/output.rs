//! Human-readable and JSON rendering of trip reports.

use anyhow::Result;
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

use crate::analyzers::types::{
    ColumnStats, DurationReport, StationReport, TimeReport, TripSummary, UserReport,
};
use crate::time_utils::{format_duration, month_name};

pub const SEPARATOR_WIDTH: usize = 40;

const NO_TRIPS: &str = "There is no trip data for your selection.";

/// Writes the dashed line that closes each section.
pub fn write_separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// Writes the "This took N seconds." footer and separator for a section.
pub fn write_section_footer(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    write_separator(out)
}

pub fn write_time_report(out: &mut impl Write, report: &TimeReport) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;

    match report.popular_month.and_then(month_name) {
        Some(month) => writeln!(out, "The most popular month is {month}")?,
        None => writeln!(out, "{NO_TRIPS}")?,
    }
    if let Some(day) = &report.popular_day {
        writeln!(out, "The most popular day is {day}")?;
    }
    if let Some(hour) = report.popular_hour {
        writeln!(out, "The most popular hour is {hour}")?;
    }
    Ok(())
}

pub fn write_station_report(out: &mut impl Write, report: &StationReport) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;

    let Some(start) = &report.popular_start_station else {
        return writeln!(out, "{NO_TRIPS}");
    };
    writeln!(out, "The most commonly used start station is {start}")?;
    if let Some(end) = &report.popular_end_station {
        writeln!(out, "The most commonly used end station is {end}")?;
    }
    if let Some(route) = &report.popular_route {
        writeln!(out, "The most common route is {route}")?;
    }
    Ok(())
}

pub fn write_duration_report(out: &mut impl Write, report: &DurationReport) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;

    writeln!(
        out,
        "The total travel time of all rides is {} seconds ({})",
        report.total_duration,
        format_duration(report.total_duration)
    )?;
    match report.mean_duration {
        Some(mean) => writeln!(
            out,
            "The average travel duration is {mean:.2} seconds ({})",
            format_duration(mean)
        ),
        None => writeln!(out, "There is no trip duration data for your selection."),
    }
}

pub fn write_user_report(out: &mut impl Write, report: &UserReport) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;

    if report.user_types.is_empty() {
        writeln!(out, "There is no user type data for your selection.")?;
    }
    for (user_type, count) in &report.user_types {
        writeln!(out, "There are {count} {}s.", user_type.to_lowercase())?;
    }

    match &report.genders {
        ColumnStats::Available(counts) => {
            for (gender, count) in counts {
                writeln!(out, "There are {count} {}s.", gender.to_lowercase())?;
            }
        }
        ColumnStats::MissingColumn | ColumnStats::NoValues => {
            writeln!(out, "There is no gender data for your selection.")?;
        }
    }

    match &report.birth_years {
        ColumnStats::Available(years) => {
            writeln!(out, "The earliest birth year listed is {}", years.earliest)?;
            writeln!(out, "The most recent birth year listed is {}", years.most_recent)?;
            writeln!(out, "The most common birth year listed is {}", years.most_common)?;
        }
        ColumnStats::MissingColumn | ColumnStats::NoValues => {
            writeln!(out, "There is no year of birth data for your selection.")?;
        }
    }
    Ok(())
}

/// Writes every section of `summary`, without timing footers.
pub fn write_summary(out: &mut impl Write, summary: &TripSummary) -> io::Result<()> {
    write_time_report(out, &summary.time)?;
    write_separator(out)?;
    write_station_report(out, &summary.stations)?;
    write_separator(out)?;
    write_duration_report(out, &summary.durations)?;
    write_separator(out)?;
    write_user_report(out, &summary.users)?;
    write_separator(out)
}

/// Writes the summary as pretty-printed JSON.
pub fn write_json(out: &mut impl Write, summary: &TripSummary) -> Result<()> {
    debug!(trips = summary.trips, "Rendering JSON summary");
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}
