//! Expense Ledger - record personal expenses and report on them
//!
//! This library holds expense records in memory, aggregates them by category
//! and by month, and persists them to a flat JSON file. Front-ends (such as
//! the bundled `expenses` binary) drive it through [`Ledger`].
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Records and their value types (amounts, strict dates)
//! - `ledger`: The in-memory store with its query and delete operations
//! - `storage`: JSON file storage with atomic writes
//! - `reports`: Category and monthly breakdowns
//! - `display`: Terminal formatting helpers
//! - `config`: Settings and path management for the front-end
//! - `cli`: Command handlers for the binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::Ledger;
//!
//! let mut ledger = Ledger::open("expenses.json")?;
//! ledger.add("Coffee", "Food", 4.50, "2024-01-05")?;
//! for record in ledger.list_all() {
//!     println!("{}", record.render());
//! }
//! ledger.save()?;
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, DEFAULT_DATA_FILE};
pub use models::{Amount, Record, StandardCategory};
