//! Record document encoding
//!
//! The persisted document is a bare JSON array of record mappings with no
//! wrapper object and no version field.

use std::path::Path;

use serde_json::Value;

use crate::error::LedgerError;
use crate::models::{Record, RecordData};

use super::file_io::{read_json_document, write_json_atomic};

/// Read records from `path`
///
/// `Ok(None)` means there was nothing usable on disk (missing file or
/// unparsable content). A document that parses but has the wrong shape, or
/// holds an invalid entry, is a validation error.
pub fn read_records(path: &Path) -> Result<Option<Vec<Record>>, LedgerError> {
    match read_json_document(path)? {
        Some(document) => decode_records(document).map(Some),
        None => Ok(None),
    }
}

/// Write records to `path` atomically, in the given order
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), LedgerError> {
    let data: Vec<RecordData> = records.iter().map(Record::to_data).collect();
    write_json_atomic(path, &data)
}

/// Decode a parsed document into records, failing on the first bad entry
pub fn decode_records(document: Value) -> Result<Vec<Record>, LedgerError> {
    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(LedgerError::Validation(format!(
                "Expected an array of records, found {}",
                json_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let data: RecordData = serde_json::from_value(entry).map_err(|e| {
                LedgerError::Validation(format!("Record {}: {}", index, e))
            })?;
            Record::from_data(data).map_err(|e| match e {
                LedgerError::Validation(msg) => {
                    LedgerError::Validation(format!("Record {}: {}", index, msg))
                }
                other => other,
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Coffee", "Food", 4.5, "2024-01-05").unwrap(),
            Record::new("Flight", "Travel", 250.0, "2024-02-10").unwrap(),
        ]
    }

    #[test]
    fn test_write_then_read_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        write_records(&path, &sample()).unwrap();
        let loaded = read_records(&path).unwrap().unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_document_is_bare_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        write_records(&path, &sample()[..1]).unwrap();
        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([{
                "description": "Coffee",
                "category": "Food",
                "amount": 4.5,
                "date": "2024-01-05"
            }])
        );
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_records(json!({"records": []})).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_decode_reports_bad_entry_index() {
        let document = json!([
            {"description": "ok", "category": "Food", "amount": 1.0, "date": "2024-01-01"},
            {"description": "bad", "category": "Food", "amount": 1.0, "date": "2024-13-01"}
        ]);
        let err = decode_records(document).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Record 1"));
    }

    #[test]
    fn test_decode_rejects_missing_key() {
        let document = json!([{"description": "x", "category": "Food", "amount": 1.0}]);
        assert!(decode_records(document).unwrap_err().is_validation());
    }

    #[test]
    fn test_decode_rejects_non_numeric_amount() {
        let document =
            json!([{"description": "x", "category": "Food", "amount": "lots", "date": "2024-01-01"}]);
        assert!(decode_records(document).unwrap_err().is_validation());
    }
}
