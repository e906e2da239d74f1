use super::traits::FingerprintFile;
use super::{FieldNames, InputError};
use crate::core::models::fingerprint::Fingerprint;
use crate::core::models::molecule::MoleculeRecord;
use std::io::BufRead;
use tracing::debug;

/// Reader for a headered CSV table with one molecule per row.
///
/// The header must name both fingerprint columns; other columns are ignored.
pub struct CsvFile;

impl FingerprintFile for CsvFile {
    type Error = InputError;

    fn read_from(
        reader: &mut impl BufRead,
        fields: &FieldNames,
    ) -> Result<Vec<MoleculeRecord>, Self::Error> {
        let mut csv_reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(::csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let primary_column = column_index(&headers, &fields.primary)?;
        let comparison_column = column_index(&headers, &fields.comparison)?;
        debug!(
            primary_column,
            comparison_column, "Resolved fingerprint columns from CSV header."
        );

        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            records.push(MoleculeRecord::new(
                fingerprint_cell(&row, index, primary_column, &fields.primary)?,
                fingerprint_cell(&row, index, comparison_column, &fields.comparison)?,
            ));
        }
        Ok(records)
    }
}

fn column_index(headers: &::csv::StringRecord, field: &str) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|header| header == field)
        .ok_or_else(|| InputError::MissingColumn {
            field: field.to_string(),
        })
}

fn fingerprint_cell(
    row: &::csv::StringRecord,
    index: usize,
    column: usize,
    field: &str,
) -> Result<Fingerprint, InputError> {
    // The reader is not flexible, so every row has as many fields as the header.
    Fingerprint::parse(&row[column]).map_err(|source| InputError::InvalidFingerprint {
        index,
        field: field.to_string(),
        source,
    })
}
