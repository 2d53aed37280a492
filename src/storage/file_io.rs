//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::LedgerError;

/// Read a JSON document, treating a missing or unparsable file as absent
///
/// Returns `Ok(None)` when the file does not exist or does not contain valid
/// JSON. Any other I/O failure (permission denied, path is a directory, ...)
/// is returned as an error.
pub fn read_json_document<P: AsRef<Path>>(path: P) -> Result<Option<Value>, LedgerError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file, starting empty");
            return Ok(None);
        }
        Err(e) => {
            return Err(LedgerError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_io() => Err(LedgerError::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data file is not valid JSON, starting empty");
            Ok(None)
        }
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures. Output is indented
/// with four spaces.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    if let Err(e) = data.serialize(&mut serializer) {
        let _ = fs::remove_file(&temp_path);
        return Err(LedgerError::Storage(format!(
            "Failed to serialize data: {}",
            e
        )));
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// `<file name>.tmp` next to the target
fn temp_path_for(path: &Path) -> Result<PathBuf, LedgerError> {
    let mut name = path
        .file_name()
        .ok_or_else(|| {
            LedgerError::Storage(format!("Not a file path: {}", path.display()))
        })?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(read_json_document(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_invalid_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(read_json_document(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_json_document(temp_dir.path()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());

        let value = read_json_document(&path).unwrap().unwrap();
        let loaded: TestData = serde_json::from_value(value).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &[TestData::default()]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[\n    {\n        \"name\""));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &TestData::default()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_json_atomic(&path, &Vec::<TestData>::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_under_regular_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file cannot act as a parent directory
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("test.json");

        let err = write_json_atomic(&path, &TestData::default()).unwrap_err();
        assert!(err.is_io());
    }
}
