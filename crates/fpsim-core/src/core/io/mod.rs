//! Provides input functionality for molecule record collections.
//!
//! Molecule records are read from a file holding one entry per molecule, each carrying
//! the two fingerprint strings under configurable field names. JSON arrays of objects and
//! headered CSV tables are supported behind a common trait.

pub mod csv;
pub mod json;
pub mod traits;

use crate::core::models::fingerprint::FingerprintError;
use crate::core::models::molecule::MoleculeRecord;
use std::io;
use std::path::Path;
use thiserror::Error;
use traits::FingerprintFile;

pub const DEFAULT_PRIMARY_FIELD: &str = "new_fp";
pub const DEFAULT_COMPARISON_FIELD: &str = "morgan_fp";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid CSV document: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("Expected a top-level array of molecule records")]
    NotAnArray,
    #[error("Record {index} is not an object")]
    NotAnObject { index: usize },
    #[error("Record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },
    #[error("Required column '{field}' not found in header")]
    MissingColumn { field: String },
    #[error("Field '{field}' of record {index} is not a string")]
    FieldNotString { index: usize, field: String },
    #[error("Invalid fingerprint in field '{field}' of record {index}: {source}")]
    InvalidFingerprint {
        index: usize,
        field: String,
        #[source]
        source: FingerprintError,
    },
}

/// Names of the record fields holding the two fingerprint kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub primary: String,
    pub comparison: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_FIELD.to_string(),
            comparison: DEFAULT_COMPARISON_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Csv,
}

impl InputFormat {
    /// Picks the format from the file extension; anything but `.csv` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

pub fn read_records<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
    fields: &FieldNames,
) -> Result<Vec<MoleculeRecord>, InputError> {
    match format {
        InputFormat::Json => json::JsonFile::read_from_path(path, fields),
        InputFormat::Csv => csv::CsvFile::read_from_path(path, fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn format_is_detected_from_extension() {
        assert_eq!(
            InputFormat::from_path(&PathBuf::from("set.csv")),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(&PathBuf::from("SET.CSV")),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(&PathBuf::from("set.json")),
            InputFormat::Json
        );
        assert_eq!(
            InputFormat::from_path(&PathBuf::from("set")),
            InputFormat::Json
        );
    }

    #[test]
    fn read_records_dispatches_on_format() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "new_fp,morgan_fp").unwrap();
        writeln!(file, "1100,0011").unwrap();
        file.flush().unwrap();

        let records =
            read_records(file.path(), InputFormat::Csv, &FieldNames::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].primary.as_str(), "1100");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_records(
            dir.path().join("absent.json"),
            InputFormat::Json,
            &FieldNames::default(),
        );
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
