//! Expense CLI commands
//!
//! Implements adding, listing and deleting expenses.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_record_register;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::{format_date, StandardCategory};

use super::autosave;

/// Delete subcommands, one per matching key
#[derive(Subcommand, Debug)]
pub enum DeleteCommands {
    /// Delete expenses whose description matches exactly
    Description {
        /// Description to match (case-sensitive)
        value: String,
    },

    /// Delete expenses in a category
    Category {
        /// Category label to match (case-sensitive)
        value: String,
    },

    /// Delete expenses on a date
    Date {
        /// Date (YYYY-MM-DD)
        value: String,
    },
}

/// Handle `add`
pub fn handle_add(
    ledger: &mut Ledger,
    settings: &Settings,
    description: String,
    amount: String,
    category: StandardCategory,
    date: Option<String>,
) -> LedgerResult<()> {
    let date = date.unwrap_or_else(|| format_date(Local::now().date_naive()));
    ledger.add(description, category.label(), amount, &date)?;
    autosave(ledger, settings)?;
    println!("Expense added!");
    Ok(())
}

/// Handle `list`
pub fn handle_list(ledger: &Ledger, settings: &Settings) {
    print!(
        "{}",
        format_record_register(&ledger.list_all(), &settings.currency_symbol)
    );
}

/// Handle `delete <key> <value>`
pub fn handle_delete(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: DeleteCommands,
) -> LedgerResult<()> {
    let (removed, what) = match cmd {
        DeleteCommands::Description { value } => {
            (ledger.delete_by_description(&value), format!("description '{}'", value))
        }
        DeleteCommands::Category { value } => {
            (ledger.delete_by_category(&value), format!("category '{}'", value))
        }
        DeleteCommands::Date { value } => {
            (ledger.delete_by_date(&value)?, format!("date {}", value))
        }
    };

    if removed == 0 {
        println!("No expenses found with {}.", what);
    } else {
        autosave(ledger, settings)?;
        println!("Deleted {} expense(s) with {}.", removed, what);
    }
    Ok(())
}

/// Handle `clear`
pub fn handle_clear(ledger: &mut Ledger, settings: &Settings) -> LedgerResult<()> {
    let removed = ledger.delete_all();
    autosave(ledger, settings)?;
    println!("Deleted all {} expense(s).", removed);
    Ok(())
}
