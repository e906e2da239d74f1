use super::traits::FingerprintFile;
use super::{FieldNames, InputError};
use crate::core::models::fingerprint::Fingerprint;
use crate::core::models::molecule::MoleculeRecord;
use serde_json::{Map, Value};
use std::io::BufRead;
use tracing::debug;

/// Reader for a JSON array of molecule objects.
///
/// Every element must be an object carrying both fingerprint fields as strings; any other
/// fields are ignored.
pub struct JsonFile;

impl FingerprintFile for JsonFile {
    type Error = InputError;

    fn read_from(
        reader: &mut impl BufRead,
        fields: &FieldNames,
    ) -> Result<Vec<MoleculeRecord>, Self::Error> {
        let document: Value = serde_json::from_reader(reader)?;
        let Value::Array(entries) = document else {
            return Err(InputError::NotAnArray);
        };

        debug!(entries = entries.len(), "Parsed JSON document.");

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let Value::Object(object) = entry else {
                    return Err(InputError::NotAnObject { index });
                };
                Ok(MoleculeRecord::new(
                    fingerprint_field(object, index, &fields.primary)?,
                    fingerprint_field(object, index, &fields.comparison)?,
                ))
            })
            .collect()
    }
}

fn fingerprint_field(
    object: &Map<String, Value>,
    index: usize,
    field: &str,
) -> Result<Fingerprint, InputError> {
    let value = object.get(field).ok_or_else(|| InputError::MissingField {
        index,
        field: field.to_string(),
    })?;
    let bits = value.as_str().ok_or_else(|| InputError::FieldNotString {
        index,
        field: field.to_string(),
    })?;
    Fingerprint::parse(bits).map_err(|source| InputError::InvalidFingerprint {
        index,
        field: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::fingerprint::FingerprintError;
    use std::io::{BufReader, Cursor};

    fn read(content: &str) -> Result<Vec<MoleculeRecord>, InputError> {
        let mut reader = BufReader::new(Cursor::new(content.as_bytes()));
        JsonFile::read_from(&mut reader, &FieldNames::default())
    }

    #[test]
    fn reads_records_with_default_field_names() {
        let records = read(
            r#"[
                {"name": "ethanol", "new_fp": "1100", "morgan_fp": "0110"},
                {"name": "methanol", "new_fp": "1010", "morgan_fp": "0111"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].primary.as_str(), "1100");
        assert_eq!(records[1].comparison.as_str(), "0111");
    }

    #[test]
    fn reads_records_with_custom_field_names() {
        let fields = FieldNames {
            primary: "topo".to_string(),
            comparison: "ecfp".to_string(),
        };
        let content = r#"[{"topo": "1", "ecfp": "0"}]"#;
        let mut reader = BufReader::new(Cursor::new(content.as_bytes()));
        let records = JsonFile::read_from(&mut reader, &fields).unwrap();
        assert_eq!(records[0].primary.as_str(), "1");
        assert_eq!(records[0].comparison.as_str(), "0");
    }

    #[test]
    fn empty_array_yields_no_records() {
        assert!(read("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(matches!(read("[{\"new_fp\": "), Err(InputError::Json(_))));
    }

    #[test]
    fn top_level_object_is_rejected() {
        assert!(matches!(
            read(r#"{"new_fp": "1", "morgan_fp": "1"}"#),
            Err(InputError::NotAnArray)
        ));
    }

    #[test]
    fn non_object_entry_is_rejected() {
        assert!(matches!(
            read(r#"[{"new_fp": "1", "morgan_fp": "1"}, 42]"#),
            Err(InputError::NotAnObject { index: 1 })
        ));
    }

    #[test]
    fn missing_field_names_record_and_field() {
        let err = read(r#"[{"new_fp": "1", "morgan_fp": "1"}, {"new_fp": "1"}]"#).unwrap_err();
        match err {
            InputError::MissingField { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "morgan_fp");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_string_field_is_rejected() {
        assert!(matches!(
            read(r#"[{"new_fp": 1100, "morgan_fp": "1"}]"#),
            Err(InputError::FieldNotString { index: 0, .. })
        ));
    }

    #[test]
    fn invalid_fingerprint_carries_source() {
        let err = read(r#"[{"new_fp": "10x1", "morgan_fp": "1"}]"#).unwrap_err();
        match err {
            InputError::InvalidFingerprint { index, field, source } => {
                assert_eq!(index, 0);
                assert_eq!(field, "new_fp");
                assert_eq!(
                    source,
                    FingerprintError::InvalidCharacter {
                        position: 2,
                        character: 'x'
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
