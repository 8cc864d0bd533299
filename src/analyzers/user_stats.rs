use crate::analyzers::types::{BirthYearStats, ColumnStats, UserReport};
use crate::analyzers::utility::{mode, value_counts};
use crate::dataset::{Dataset, OptionalColumn};

/// User type, gender and birth year breakdowns.
pub fn user_stats(dataset: &Dataset) -> UserReport {
    let user_types = value_counts(dataset.iter().filter_map(|r| r.user_type.clone()));

    UserReport {
        user_types,
        genders: gender_counts(dataset),
        birth_years: birth_year_stats(dataset),
    }
}

/// Count per gender, skipping rows without one.
pub fn gender_counts(dataset: &Dataset) -> ColumnStats<Vec<(String, usize)>> {
    if !dataset.has_column(OptionalColumn::Gender) {
        return ColumnStats::MissingColumn;
    }
    let counts = value_counts(dataset.iter().filter_map(|r| r.gender.clone()));
    if counts.is_empty() {
        ColumnStats::NoValues
    } else {
        ColumnStats::Available(counts)
    }
}

/// Earliest, most recent and most common birth year among rows that have one.
pub fn birth_year_stats(dataset: &Dataset) -> ColumnStats<BirthYearStats> {
    if !dataset.has_column(OptionalColumn::BirthYear) {
        return ColumnStats::MissingColumn;
    }
    let years: Vec<i32> = dataset.iter().filter_map(|r| r.birth_year).collect();

    match (
        years.iter().min(),
        years.iter().max(),
        mode(years.iter().copied()),
    ) {
        (Some(&earliest), Some(&most_recent), Some(most_common)) => {
            ColumnStats::Available(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            })
        }
        _ => ColumnStats::NoValues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::{dataset, trip};
    use crate::dataset::TripRecord;

    fn rider(id: usize, user_type: &str, gender: Option<&str>, year: Option<i32>) -> TripRecord {
        let mut r = trip(id, "2017-01-02 08:00:00", "A", "B");
        r.user_type = Some(user_type.to_string());
        r.gender = gender.map(str::to_string);
        r.birth_year = year;
        r
    }

    #[test]
    fn test_user_stats() {
        let ds = dataset(vec![
            rider(0, "Subscriber", Some("Male"), Some(1985)),
            rider(1, "Customer", None, None),
            rider(2, "Subscriber", Some("Female"), Some(1992)),
            rider(3, "Subscriber", Some("Male"), Some(1992)),
            rider(4, "Customer", Some("Female"), Some(1985)),
            rider(5, "Dependent", None, Some(1960)),
        ]);
        let report = user_stats(&ds);

        assert_eq!(
            report.user_types,
            vec![
                ("Subscriber".to_string(), 3),
                ("Customer".to_string(), 2),
                ("Dependent".to_string(), 1),
            ]
        );
        assert_eq!(
            report.genders,
            ColumnStats::Available(vec![("Male".to_string(), 2), ("Female".to_string(), 2)])
        );
        assert_eq!(
            report.birth_years,
            ColumnStats::Available(BirthYearStats {
                earliest: 1960,
                most_recent: 1992,
                most_common: 1985,
            })
        );
    }

    #[test]
    fn test_missing_columns() {
        let ds = Dataset::new(
            "washington",
            false,
            false,
            vec![rider(0, "Subscriber", None, None)],
        );
        let report = user_stats(&ds);

        assert_eq!(report.genders, ColumnStats::MissingColumn);
        assert_eq!(report.birth_years, ColumnStats::MissingColumn);
        assert_eq!(report.user_types, vec![("Subscriber".to_string(), 1)]);
    }

    #[test]
    fn test_present_columns_without_values() {
        let ds = dataset(vec![rider(0, "Customer", None, None)]);

        assert_eq!(gender_counts(&ds), ColumnStats::NoValues);
        assert_eq!(birth_year_stats(&ds), ColumnStats::NoValues);
    }

    #[test]
    fn test_empty_dataset() {
        let report = user_stats(&dataset(Vec::new()));

        assert!(report.user_types.is_empty());
        assert_eq!(report.genders, ColumnStats::NoValues);
        assert_eq!(report.birth_years, ColumnStats::NoValues);
    }
}
