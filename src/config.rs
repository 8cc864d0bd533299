use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::DataSourceError;

/// Maps city identifiers to the CSV file holding that city's trips.
///
/// The default mapping covers the three bundled cities. A replacement can be
/// stored as a plain JSON object on disk:
/// ```json
/// {
///   "chicago": "chicago.csv",
///   "new york city": "new_york_city.csv"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitySources {
    data_dir: PathBuf,
    files: BTreeMap<String, String>,
}

impl Default for CitySources {
    fn default() -> Self {
        Self::from_entries(
            ".",
            [
                ("chicago", "chicago.csv"),
                ("new york city", "new_york_city.csv"),
                ("washington", "washington.csv"),
            ],
        )
    }
}

impl CitySources {
    /// Builds a mapping from `(city, file name)` pairs. City keys are lowercased.
    pub fn from_entries<I, K, V>(data_dir: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let files = entries
            .into_iter()
            .map(|(city, file)| (city.as_ref().trim().to_lowercase(), file.into()))
            .collect();
        Self {
            data_dir: data_dir.into(),
            files,
        }
    }

    /// Loads the mapping from a JSON file at `path`, rooted at the current directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self::from_entries(".", entries))
    }

    /// Returns the same mapping with file names resolved against `data_dir`.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Configured city identifiers, in alphabetical order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.files.contains_key(&city.trim().to_lowercase())
    }

    /// Returns the full path of the source file for `city`.
    pub fn resolve(&self, city: &str) -> Result<PathBuf, DataSourceError> {
        let key = city.trim().to_lowercase();
        self.files
            .get(&key)
            .map(|file| self.data_dir.join(file))
            .ok_or(DataSourceError::UnknownCity(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_default_mapping() {
        let sources = CitySources::default();
        let cities: Vec<_> = sources.cities().collect();
        assert_eq!(cities, vec!["chicago", "new york city", "washington"]);
        assert_eq!(
            sources.resolve("new york city").unwrap(),
            Path::new(".").join("new_york_city.csv")
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let sources = CitySources::default().with_data_dir("/data");
        assert_eq!(
            sources.resolve("Chicago").unwrap(),
            PathBuf::from("/data/chicago.csv")
        );
        assert!(sources.contains("WASHINGTON"));
    }

    #[test]
    fn test_resolve_unknown_city() {
        let err = CitySources::default().resolve("boston").unwrap_err();
        assert!(matches!(err, DataSourceError::UnknownCity(city) if city == "boston"));
    }

    #[test]
    fn test_load_from_json() {
        let path = env::temp_dir().join("bikeshare_stats_test_cities.json");
        fs::write(&path, r#"{"Boston": "boston.csv"}"#).unwrap();

        let sources = CitySources::load(&path).unwrap();
        assert_eq!(sources.cities().collect::<Vec<_>>(), vec!["boston"]);
        assert!(!sources.contains("chicago"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_invalid_json() {
        let path = env::temp_dir().join("bikeshare_stats_test_bad_cities.json");
        fs::write(&path, "not json").unwrap();

        assert!(CitySources::load(&path).is_err());

        fs::remove_file(&path).unwrap();
    }
}
