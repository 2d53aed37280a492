//! Expense record model
//!
//! A record is created once (through [`crate::Ledger::add`] or by loading the
//! persisted document) and never changes afterwards; the fields are private
//! and only exposed through accessors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::{Amount, DEFAULT_CURRENCY_SYMBOL};
use super::date::{format_date, parse_date};
use crate::error::LedgerError;

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordData", into = "RecordData")]
pub struct Record {
    description: String,
    category: String,
    amount: Amount,
    date: NaiveDate,
}

impl Record {
    /// Create a record, validating the amount and the `YYYY-MM-DD` date
    ///
    /// `amount` may be a number or numeric text.
    pub fn new<A>(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: A,
        date: &str,
    ) -> Result<Self, LedgerError>
    where
        A: TryInto<Amount, Error = LedgerError>,
    {
        let amount = amount.try_into()?;
        let date = parse_date(date)?;
        Ok(Self {
            description: description.into(),
            category: category.into(),
            amount,
            date,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Single-line form: `<date> | <category> | ₹<amount> | <description>`
    pub fn render(&self) -> String {
        self.render_with_symbol(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Same as [`Record::render`] with a caller-chosen currency symbol
    pub fn render_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{} | {} | {} | {}",
            format_date(self.date),
            self.category,
            self.amount.format_with_symbol(symbol),
            self.description
        )
    }

    /// Convert to the persisted mapping
    pub fn to_data(&self) -> RecordData {
        RecordData::from(self.clone())
    }

    /// Build a record from a persisted mapping, applying the same validation
    /// as [`Record::new`]
    pub fn from_data(data: RecordData) -> Result<Self, LedgerError> {
        Self::try_from(data)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Amount as it may appear in a stored document
///
/// Documents written by this crate always hold numbers; numeric text is
/// accepted on input as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredAmount {
    Number(f64),
    Text(String),
}

impl TryFrom<StoredAmount> for Amount {
    type Error = LedgerError;

    fn try_from(value: StoredAmount) -> Result<Self, Self::Error> {
        match value {
            StoredAmount::Number(n) => Amount::new(n),
            StoredAmount::Text(s) => Amount::parse(&s),
        }
    }
}

/// The persisted mapping for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    pub description: String,
    pub category: String,
    pub amount: StoredAmount,
    pub date: String,
}

impl From<Record> for RecordData {
    fn from(record: Record) -> Self {
        Self {
            description: record.description,
            category: record.category,
            amount: StoredAmount::Number(record.amount.value()),
            date: format_date(record.date),
        }
    }
}

impl TryFrom<RecordData> for Record {
    type Error = LedgerError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        Record::new(data.description, data.category, data.amount, &data.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = Record::new("Coffee", "Food", 4.5, "2024-01-05").unwrap();
        assert_eq!(record.description(), "Coffee");
        assert_eq!(record.category(), "Food");
        assert_eq!(record.amount().value(), 4.5);
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_new_from_text_amount() {
        let record = Record::new("Lunch", "Food", "12.00", "2024-01-20").unwrap();
        assert_eq!(record.amount().value(), 12.0);
    }

    #[test]
    fn test_permissive_fields() {
        let record = Record::new("", "Not A Real Category", -7.25, "2024-03-01").unwrap();
        assert_eq!(record.description(), "");
        assert_eq!(record.amount().value(), -7.25);
    }

    #[test]
    fn test_validation_failures() {
        assert!(Record::new("x", "Food", "abc", "2024-01-05")
            .unwrap_err()
            .is_validation());
        assert!(Record::new("x", "Food", 1.0, "2024-13-01")
            .unwrap_err()
            .is_validation());
        assert!(Record::new("x", "Food", 1.0, "05/01/2024")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_render() {
        let record = Record::new("Coffee", "Food", 4.5, "2024-01-05").unwrap();
        assert_eq!(record.render(), "2024-01-05 | Food | ₹4.50 | Coffee");
        assert_eq!(
            record.render_with_symbol("$"),
            "2024-01-05 | Food | $4.50 | Coffee"
        );
        assert_eq!(record.to_string(), record.render());
    }

    #[test]
    fn test_render_negative_amount_keeps_symbol_first() {
        let record = Record::new("Refund", "Food", -3.0, "2024-01-05").unwrap();
        assert_eq!(record.render(), "2024-01-05 | Food | ₹-3.00 | Refund");
        assert_eq!(
            record.render_with_symbol("$"),
            "2024-01-05 | Food | $-3.00 | Refund"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let record = Record::new("Flight", "Travel", 250.0, "2024-02-10").unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Flight",
                "category": "Travel",
                "amount": 250.0,
                "date": "2024-02-10"
            })
        );
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let record = Record::new("Odd cents", "Misc", 0.1 + 0.2, "1999-12-31").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        let via_data = Record::from_data(record.to_data()).unwrap();
        assert_eq!(via_data, record);
    }

    #[test]
    fn test_deserialize_accepts_text_amount() {
        let json = r#"{"description":"Tea","category":"Food","amount":"2.5","date":"2024-01-01"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount().value(), 2.5);
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{"description":"Tea","category":"Food","amount":2.5,"date":"2024-1-1"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
