//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and reports for terminal
//! display.

pub mod record;
pub mod report;

pub use record::format_record_register;
pub use report::{csv_field, format_bar, format_percentage, separator, truncate};
