//! Record display formatting
//!
//! Register-style listing of records for terminal display.

use crate::models::Record;

use super::report::separator;

/// Format records, one rendered line each
///
/// Callers pass records in the order they should appear, normally the
/// date-sorted output of [`crate::Ledger::list_all`].
pub fn format_record_register(records: &[&Record], symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&record.render_with_symbol(symbol));
        output.push('\n');
    }
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("{} record(s)\n", records.len()));

    output
}
