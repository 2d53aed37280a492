//! CLI commands for reports
//!
//! Prints the category and monthly reports, or exports them to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::reports::{CategoryReport, MonthlyReport};

/// Handle `totals`
pub fn handle_category_report(
    ledger: &Ledger,
    settings: &Settings,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let report = CategoryReport::generate(ledger);

    match output {
        Some(path) => {
            let mut writer = create_output(&path)?;
            report.export_csv(&mut writer)?;
            finish_output(writer, &path)?;
            println!("Category report exported to {}", path.display());
        }
        None => print!("{}", report.format_terminal(&settings.currency_symbol)),
    }
    Ok(())
}

/// Handle `monthly`
pub fn handle_monthly_report(
    ledger: &Ledger,
    settings: &Settings,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let report = MonthlyReport::generate(ledger);

    match output {
        Some(path) => {
            let mut writer = create_output(&path)?;
            report.export_csv(&mut writer)?;
            finish_output(writer, &path)?;
            println!("Monthly report exported to {}", path.display());
        }
        None => print!("{}", report.format_terminal(&settings.currency_symbol)),
    }
    Ok(())
}

fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| LedgerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

fn finish_output(mut writer: BufWriter<File>, path: &Path) -> LedgerResult<()> {
    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
