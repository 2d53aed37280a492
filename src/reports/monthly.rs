//! Monthly Report
//!
//! Totals per calendar month, oldest month first.

use std::io::Write;

use crate::display::report::{format_bar, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{month_key, Amount};

const BAR_WIDTH: usize = 30;

/// One month's line in the report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRow {
    /// `YYYY-MM`
    pub month: String,
    pub total: Amount,
    pub record_count: usize,
}

/// Month-by-month breakdown of a ledger
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Rows in ascending month order
    pub rows: Vec<MonthRow>,
    pub grand_total: Amount,
}

impl MonthlyReport {
    /// Build the report from the ledger's current records
    pub fn generate(ledger: &Ledger) -> Self {
        let rows = ledger
            .monthly_totals()
            .into_iter()
            .map(|(month, total)| {
                let record_count = ledger
                    .records()
                    .iter()
                    .filter(|r| month_key(r.date()) == month)
                    .count();
                MonthRow {
                    month,
                    total,
                    record_count,
                }
            })
            .collect();

        Self {
            rows,
            grand_total: ledger.grand_total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No data available.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Monthly Totals\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!("{:<8} {:>14} {:>7}\n", "Month", "Amount", "Count"));
        output.push_str(&separator(64));
        output.push('\n');

        let max_total = self
            .rows
            .iter()
            .map(|r| r.total.value())
            .fold(0.0, f64::max);
        for row in &self.rows {
            output.push_str(&format!(
                "{:<8} {:>14} {:>7}  {}\n",
                row.month,
                row.total.format_with_symbol(symbol),
                row.record_count,
                format_bar(row.total.value(), max_total, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>14}\n",
            "TOTAL",
            self.grand_total.format_with_symbol(symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writeln!(writer, "Month,Amount,Record Count").map_err(export_error)?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{}",
                row.month,
                row.total.value(),
                row.record_count
            )
            .map_err(export_error)?;
        }

        let record_count: usize = self.rows.iter().map(|r| r.record_count).sum();
        writeln!(writer, "TOTAL,{:.2},{}", self.grand_total.value(), record_count)
            .map_err(export_error)?;

        Ok(())
    }
}

fn export_error(e: std::io::Error) -> LedgerError {
    LedgerError::Io(format!("Failed to write report: {}", e))
}
