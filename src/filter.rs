//! Month / day-of-week selection and the filter stage.

use chrono::{Month, Weekday};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::config::CitySources;
use crate::dataset::{Dataset, TripRecord};
use crate::error::SelectionError;
use crate::time_utils::{month_of, weekday_name, weekday_of};

/// Keyword that disables a month or day filter.
pub const ALL: &str = "all";

/// Months for which trip data is published.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A validated (city, month, day) selection. `None` means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: String,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSpec {
    /// Validates raw answers against the configured cities and the fixed
    /// month/day vocabulary. Matching is case-insensitive.
    pub fn parse(
        sources: &CitySources,
        city: &str,
        month: &str,
        day: &str,
    ) -> Result<Self, SelectionError> {
        Ok(Self {
            city: parse_city(sources, city)?,
            month: parse_month(month)?,
            day: parse_day(day)?,
        })
    }

    /// Selection with no month or day restriction.
    pub fn all(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            month: None,
            day: None,
        }
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        let month_ok = self
            .month
            .is_none_or(|m| month_of(&record.start_time) == m.number_from_month());
        let day_ok = self.day.is_none_or(|d| weekday_of(&record.start_time) == d);
        month_ok && day_ok
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city: {}, month: {}, day: {}",
            self.city,
            self.month.map_or(ALL, |m| m.name()),
            self.day.map_or(ALL, weekday_name)
        )
    }
}

/// Selection echoed in machine-readable summaries.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub city: String,
    pub month: String,
    pub day: String,
}

impl From<&FilterSpec> for FilterSummary {
    fn from(spec: &FilterSpec) -> Self {
        Self {
            city: spec.city.clone(),
            month: spec.month.map_or(ALL, |m| m.name()).to_lowercase(),
            day: spec.day.map_or(ALL, weekday_name).to_lowercase(),
        }
    }
}

pub fn parse_city(sources: &CitySources, value: &str) -> Result<String, SelectionError> {
    let city = value.trim().to_lowercase();
    if sources.contains(&city) {
        Ok(city)
    } else {
        Err(SelectionError::City(value.trim().to_string()))
    }
}

pub fn parse_month(value: &str) -> Result<Option<Month>, SelectionError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    MONTHS
        .iter()
        .copied()
        .find(|m| m.name().eq_ignore_ascii_case(value))
        .map(Some)
        .ok_or_else(|| SelectionError::Month(value.to_string()))
}

pub fn parse_day(value: &str) -> Result<Option<Weekday>, SelectionError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    WEEKDAYS
        .iter()
        .copied()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(value))
        .map(Some)
        .ok_or_else(|| SelectionError::Day(value.to_string()))
}

/// Returns a new dataset holding only the rows matching `spec`'s month and day,
/// in their original order. The input is left untouched.
pub fn filter_trips(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    let records: Vec<TripRecord> = dataset
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect();

    debug!(
        filter = %spec,
        before = dataset.len(),
        after = records.len(),
        "Filter applied"
    );

    dataset.with_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::{dataset, trip};

    fn sample() -> Dataset {
        dataset(vec![
            // Monday
            trip(0, "2017-01-02 08:00:00", "A", "B"),
            // Tuesday
            trip(1, "2017-01-03 09:00:00", "B", "C"),
            // Monday
            trip(2, "2017-02-06 10:00:00", "A", "C"),
            // Sunday
            trip(3, "2017-06-04 11:00:00", "C", "A"),
        ])
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let spec = FilterSpec::parse(&CitySources::default(), "New York City", "MARCH", "friday")
            .unwrap();
        assert_eq!(spec.city, "new york city");
        assert_eq!(spec.month, Some(Month::March));
        assert_eq!(spec.day, Some(Weekday::Fri));
    }

    #[test]
    fn test_parse_all() {
        let spec = FilterSpec::parse(&CitySources::default(), "chicago", "All", "ALL").unwrap();
        assert_eq!(spec, FilterSpec::all("chicago"));
    }

    #[test]
    fn test_parse_rejects_out_of_vocabulary() {
        let sources = CitySources::default();
        assert_eq!(
            FilterSpec::parse(&sources, "boston", "all", "all"),
            Err(SelectionError::City("boston".to_string()))
        );
        assert_eq!(parse_month("july"), Err(SelectionError::Month("july".to_string())));
        assert_eq!(parse_month("jan"), Err(SelectionError::Month("jan".to_string())));
        assert_eq!(parse_day("mon"), Err(SelectionError::Day("mon".to_string())));
    }

    #[test]
    fn test_all_all_keeps_everything() {
        let ds = sample();
        let filtered = filter_trips(&ds, &FilterSpec::all("test"));
        assert_eq!(filtered, ds);
    }

    #[test]
    fn test_month_filter() {
        let ds = sample();
        let spec = FilterSpec {
            month: Some(Month::January),
            ..FilterSpec::all("test")
        };
        let filtered = filter_trips(&ds, &spec);

        let ids: Vec<_> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(filtered.iter().all(|r| month_of(&r.start_time) == 1));
    }

    #[test]
    fn test_day_filter() {
        let ds = sample();
        let spec = FilterSpec {
            day: Some(Weekday::Mon),
            ..FilterSpec::all("test")
        };
        let filtered = filter_trips(&ds, &spec);

        let ids: Vec<_> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_month_and_day_are_conjunctive() {
        let ds = sample();
        let spec = FilterSpec {
            city: "test".to_string(),
            month: Some(Month::February),
            day: Some(Weekday::Mon),
        };
        let filtered = filter_trips(&ds, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].id, 2);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let ds = sample();
        let spec = FilterSpec {
            city: "test".to_string(),
            month: Some(Month::March),
            day: Some(Weekday::Mon),
        };
        let filtered = filter_trips(&ds, &spec);
        assert!(filtered.is_empty());
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let ds = sample();
        let spec = FilterSpec {
            city: "test".to_string(),
            month: Some(Month::January),
            day: Some(Weekday::Mon),
        };
        let once = filter_trips(&ds, &spec);
        let twice = filter_trips(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_display() {
        let spec = FilterSpec {
            city: "chicago".to_string(),
            month: Some(Month::May),
            day: None,
        };
        assert_eq!(spec.to_string(), "city: chicago, month: May, day: all");
    }
}
