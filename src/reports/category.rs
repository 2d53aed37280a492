//! Category Report
//!
//! Totals per category with each category's share of overall spending.

use std::io::Write;

use crate::display::report::{csv_field, format_bar, format_percentage, separator, truncate};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::Amount;

const BAR_WIDTH: usize = 20;

/// One category's line in the report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    /// Category label as stored on the records
    pub category: String,
    /// Sum of the category's amounts
    pub total: Amount,
    /// Number of records in the category
    pub record_count: usize,
    /// Percentage of the summed absolute category totals
    pub share: f64,
}

/// Category breakdown of a ledger
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// Rows sorted by total (largest first), then by name
    pub rows: Vec<CategoryRow>,
    /// Sum of every record
    pub grand_total: Amount,
    /// Number of records covered
    pub record_count: usize,
}

impl CategoryReport {
    /// Build the report from the ledger's current records
    pub fn generate(ledger: &Ledger) -> Self {
        let totals = ledger.category_totals();
        let absolute_sum: f64 = totals.values().map(|t| t.value().abs()).sum();

        let mut rows: Vec<CategoryRow> = totals
            .into_iter()
            .map(|(category, total)| {
                let record_count = ledger
                    .records()
                    .iter()
                    .filter(|r| r.category() == category)
                    .count();
                let share = if absolute_sum == 0.0 {
                    0.0
                } else {
                    total.value().abs() / absolute_sum * 100.0
                };
                CategoryRow {
                    category,
                    total,
                    record_count,
                    share,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total
                .value()
                .total_cmp(&a.total.value())
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            rows,
            grand_total: ledger.grand_total(),
            record_count: ledger.len(),
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
        output.push_str("Category Totals\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14} {:>7} {:>7}  {}\n",
            "Category", "Amount", "Count", "%", ""
        ));
        output.push_str(&separator(72));
        output.push('\n');

        let max_share = self.rows.iter().map(|r| r.share).fold(0.0, f64::max);
        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>14} {:>7} {:>7}  {}\n",
                truncate(&row.category, 20),
                row.total.format_with_symbol(symbol),
                row.record_count,
                format_percentage(row.share),
                format_bar(row.share, max_share, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14} {:>7}\n",
            "TOTAL",
            self.grand_total.format_with_symbol(symbol),
            self.record_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writeln!(writer, "Category,Amount,Record Count,Percentage").map_err(export_error)?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{},{:.2}",
                csv_field(&row.category),
                row.total.value(),
                row.record_count,
                row.share
            )
            .map_err(export_error)?;
        }

        writeln!(
            writer,
            "TOTAL,{:.2},{},{}",
            self.grand_total.value(),
            self.record_count,
            if self.is_empty() { "0.00" } else { "100.00" }
        )
        .map_err(export_error)?;

        Ok(())
    }
}

fn export_error(e: std::io::Error) -> LedgerError {
    LedgerError::Io(format!("Failed to write report: {}", e))
}
