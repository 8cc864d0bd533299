use crate::analyzers::types::StationReport;
use crate::analyzers::utility::mode;
use crate::dataset::{Dataset, TripRecord};

/// The route label for a trip: `"<start station> to <end station>"`.
/// `None` unless both stations are known.
pub fn route_of(record: &TripRecord) -> Option<String> {
    match (&record.start_station, &record.end_station) {
        (Some(start), Some(end)) => Some(format!("{start} to {end}")),
        _ => None,
    }
}

/// Most used start station, end station and start/end combination.
/// Rows with a blank station are left out of the counts that need it.
pub fn station_stats(dataset: &Dataset) -> StationReport {
    StationReport {
        popular_start_station: mode(dataset.iter().filter_map(|r| r.start_station.as_deref()))
            .map(str::to_string),
        popular_end_station: mode(dataset.iter().filter_map(|r| r.end_station.as_deref()))
            .map(str::to_string),
        popular_route: mode(dataset.iter().filter_map(route_of)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::{dataset, trip};

    #[test]
    fn test_station_stats() {
        let ds = dataset(vec![
            trip(0, "2017-01-02 08:00:00", "Canal St", "Clark St"),
            trip(1, "2017-01-02 09:00:00", "Canal St", "Lake Shore Dr"),
            trip(2, "2017-01-02 10:00:00", "Streeter Dr", "Lake Shore Dr"),
            trip(3, "2017-01-02 11:00:00", "Streeter Dr", "Lake Shore Dr"),
            trip(4, "2017-01-02 12:00:00", "Canal St", "Clark St"),
        ]);
        let report = station_stats(&ds);

        assert_eq!(report.popular_start_station.as_deref(), Some("Canal St"));
        assert_eq!(report.popular_end_station.as_deref(), Some("Lake Shore Dr"));
        // Two routes tie at 2; alphabetical order breaks the tie
        assert_eq!(report.popular_route.as_deref(), Some("Canal St to Clark St"));
    }

    #[test]
    fn test_route_of() {
        let record = trip(0, "2017-01-02 08:00:00", "A", "B");
        assert_eq!(route_of(&record).as_deref(), Some("A to B"));

        let mut open_ended = record.clone();
        open_ended.end_station = None;
        assert_eq!(route_of(&open_ended), None);
    }

    #[test]
    fn test_blank_stations_never_win() {
        let mut blank_a = trip(0, "2017-01-02 08:00:00", "", "B");
        blank_a.start_station = None;
        let mut blank_b = trip(1, "2017-01-02 09:00:00", "", "B");
        blank_b.start_station = None;
        let ds = dataset(vec![blank_a, blank_b, trip(2, "2017-01-02 10:00:00", "A", "B")]);
        let report = station_stats(&ds);

        assert_eq!(report.popular_start_station.as_deref(), Some("A"));
        assert_eq!(report.popular_end_station.as_deref(), Some("B"));
        assert_eq!(report.popular_route.as_deref(), Some("A to B"));
    }

    #[test]
    fn test_empty_dataset() {
        let report = station_stats(&dataset(Vec::new()));
        assert_eq!(report.popular_start_station, None);
        assert_eq!(report.popular_end_station, None);
        assert_eq!(report.popular_route, None);
    }
}
