use super::FieldNames;
use crate::core::models::molecule::MoleculeRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading molecule record collections.
///
/// Implementors handle format-specific parsing; locating the two fingerprint fields is
/// driven by the supplied [`FieldNames`].
pub trait FingerprintFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads every molecule record from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, a record lacks a required field,
    /// or a fingerprint string is invalid.
    fn read_from(
        reader: &mut impl BufRead,
        fields: &FieldNames,
    ) -> Result<Vec<MoleculeRecord>, Self::Error>;

    /// Reads every molecule record from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        fields: &FieldNames,
    ) -> Result<Vec<MoleculeRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, fields)
    }
}
