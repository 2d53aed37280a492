//! Core data models for the expense ledger
//!
//! This module contains the record entity and the value types it is built
//! from: amounts, strict dates and the standard category labels.

pub mod amount;
pub mod category;
pub mod date;
pub mod record;

pub use amount::{Amount, DEFAULT_CURRENCY_SYMBOL};
pub use category::StandardCategory;
pub use date::{format_date, month_key, parse_date, DATE_FORMAT};
pub use record::{Record, RecordData, StoredAmount};
