use crate::analyzers::types::DurationReport;
use crate::analyzers::utility::mean;
use crate::dataset::Dataset;

/// Total and mean trip duration, in seconds.
pub fn duration_stats(dataset: &Dataset) -> DurationReport {
    let durations: Vec<f64> = dataset.iter().map(|r| r.trip_duration).collect();

    DurationReport {
        trip_count: durations.len(),
        total_duration: durations.iter().sum(),
        mean_duration: mean(&durations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::{dataset, trip};

    #[test]
    fn test_duration_stats() {
        let mut a = trip(0, "2017-01-02 08:00:00", "A", "B");
        a.trip_duration = 300.0;
        let mut b = trip(1, "2017-01-02 09:00:00", "A", "B");
        b.trip_duration = 900.5;

        let report = duration_stats(&dataset(vec![a, b]));
        assert_eq!(report.trip_count, 2);
        assert_eq!(report.total_duration, 1200.5);
        assert_eq!(report.mean_duration, Some(600.25));
    }

    #[test]
    fn test_empty_dataset() {
        let report = duration_stats(&dataset(Vec::new()));
        assert_eq!(report.trip_count, 0);
        assert_eq!(report.total_duration, 0.0);
        assert_eq!(report.mean_duration, None);
    }
}
