//! Dataset loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the launch-records CSV
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed (unbalanced quotes, ragged rows, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file does not exist
    #[error("Dataset file not found: {0:?}")]
    FileNotFound(PathBuf),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row holds a value that cannot be parsed
    #[error("Malformed record at row {row}: {message}")]
    Malformed { row: usize, message: String },

    /// The file parsed but held no data rows
    #[error("Dataset is empty")]
    Empty,
}

/// Result type alias for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MissingColumn("Launch Site".to_string());
        assert_eq!(err.to_string(), "Missing required column: Launch Site");

        let err = LoadError::Malformed {
            row: 4,
            message: "invalid payload mass".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed record at row 4: invalid payload mass"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let load_err: LoadError = io_err.into();
        assert!(matches!(load_err, LoadError::Io(_)));
    }
}
