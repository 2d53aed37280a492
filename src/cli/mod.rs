//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod expense;
pub mod report;

pub use expense::{handle_add, handle_clear, handle_delete, handle_list, DeleteCommands};
pub use report::{handle_category_report, handle_monthly_report};

use std::path::Path;

use tracing::warn;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::ledger::Ledger;

/// Save the ledger if the settings ask for it
pub fn autosave(ledger: &Ledger, settings: &Settings) -> LedgerResult<()> {
    if settings.autosave {
        ledger.save()?;
    }
    Ok(())
}

/// Open a ledger that is about to be wiped
///
/// A data file with invalid entries cannot be loaded, but it can still be
/// replaced, so validation failures yield an empty ledger bound to `path`.
pub fn open_for_reset(path: &Path) -> LedgerResult<Ledger> {
    match Ledger::open(path) {
        Err(e) if e.is_validation() => {
            warn!(path = %path.display(), error = %e, "discarding unreadable data file");
            Ok(Ledger::new(path))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_for_reset_tolerates_invalid_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"[{"description": "x", "category": "Food", "amount": 1.0, "date": "2024-1-1"}]"#,
        )
        .unwrap();

        let ledger = open_for_reset(&path).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.path(), path.as_path());
    }

    #[test]
    fn test_open_for_reset_loads_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let mut ledger = Ledger::new(&path);
        ledger.add("Coffee", "Food", 4.5, "2024-01-05").unwrap();
        ledger.save().unwrap();

        assert_eq!(open_for_reset(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_open_for_reset_propagates_io_errors() {
        let temp_dir = TempDir::new().unwrap();
        let err = open_for_reset(temp_dir.path()).unwrap_err();
        assert!(err.is_io());
    }
}
