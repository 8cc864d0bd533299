//! Error types shared across the loader, the prompt layer and the session.

use std::path::PathBuf;
use thiserror::Error;

/// A city's source table could not be located or parsed.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// The city has no configured source file.
    #[error("No data source configured for city: {0}")]
    UnknownCity(String),

    /// The source file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file or a row.
    #[error("Failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column every trip table must have is absent from the header.
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A start or end timestamp did not match any recognised format.
    #[error("Invalid timestamp '{value}' in {path} at row {row}")]
    InvalidTimestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },

    /// A numeric field held a value that is not usable for its column.
    #[error("Invalid value '{value}' for column '{column}' in {path} at row {row}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// A user-supplied selection outside the fixed vocabulary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown city: {0}")]
    City(String),

    #[error("Unknown month: {0}")]
    Month(String),

    #[error("Unknown day: {0}")]
    Day(String),
}

/// Failures that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The input stream reached end-of-file while a question was pending.
    #[error("Input closed while waiting for an answer")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_city() {
        let err = DataSourceError::UnknownCity("boston".to_string());
        assert_eq!(err.to_string(), "No data source configured for city: boston");
    }

    #[test]
    fn test_error_display_open() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DataSourceError::Open {
            path: PathBuf::from("/data/chicago.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to open"));
        assert!(msg.contains("/data/chicago.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_invalid_timestamp() {
        let err = DataSourceError::InvalidTimestamp {
            path: PathBuf::from("chicago.csv"),
            row: 3,
            value: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid timestamp 'yesterday' in chicago.csv at row 3"
        );
    }

    #[test]
    fn test_error_display_selection() {
        assert_eq!(
            SelectionError::Month("july".to_string()).to_string(),
            "Unknown month: july"
        );
    }

    #[test]
    fn test_session_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SessionError = io_err.into();
        assert!(err.to_string().contains("pipe closed"));
    }
}
