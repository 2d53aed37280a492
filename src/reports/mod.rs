//! Reports module for the expense ledger
//!
//! Turns the ledger's category and monthly totals into presentable
//! breakdowns for the terminal or CSV export.

pub mod category;
pub mod monthly;

pub use category::{CategoryReport, CategoryRow};
pub use monthly::{MonthRow, MonthlyReport};
