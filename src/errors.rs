use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while mapping a single Discover row to a HomeBank row
#[derive(Error, Debug)]
pub enum RecordError {
    /// A column the conversion cannot do without is absent from the row
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// `Post Date` is not a valid `MM/DD/YYYY` calendar date
    #[error("invalid post date `{value}`, expected MM/DD/YYYY")]
    InvalidDate { value: String },
}

/// Errors that abort the conversion of one input file
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no header row", path.display())]
    MissingHeader { path: PathBuf },

    #[error("{}, row {row}: {source}", path.display())]
    Record {
        path: PathBuf,
        /// 1-based data row, the header is not counted
        row: usize,
        #[source]
        source: RecordError,
    },

    /// The builder was asked to convert without being given an input
    #[error("an input file is required")]
    MissingInput,

    #[error("{} does not name a file", path.display())]
    InvalidInputPath { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to scan directory {}: {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid file name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_message_names_file_and_row() {
        let err = ConvertError::Record {
            path: PathBuf::from("Discover-A-B.csv"),
            row: 3,
            source: RecordError::InvalidDate {
                value: "13/01/2023".to_string(),
            },
        };

        let msg = err.to_string();
        assert!(msg.contains("Discover-A-B.csv"));
        assert!(msg.contains("row 3"));
        assert!(msg.contains("13/01/2023"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = RecordError::MissingField("Post Date");
        assert_eq!(err.to_string(), "missing required field `Post Date`");
    }
}
