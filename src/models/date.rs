//! Strict calendar date parsing
//!
//! Dates travel as `YYYY-MM-DD` text everywhere (user input, the persisted
//! document, delete-by-date). chrono alone accepts unpadded fields, so the
//! shape is checked before handing the string to it.

use chrono::{Datelike, NaiveDate};

use crate::error::LedgerError;

/// Format used for rendering and persisting dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date that must match `YYYY-MM-DD` exactly
pub fn parse_date(s: &str) -> Result<NaiveDate, LedgerError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(LedgerError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            s
        )));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| LedgerError::Validation(format!("Invalid date '{}': {}", s, e)))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The `YYYY-MM` key a date is grouped under in monthly totals
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = parse_date("2024-01-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        for input in [
            "",
            "not-a-date",
            "2024-1-05",
            "2024/01/05",
            "05-01-2024",
            " 2024-01-05",
            "2024-01-05T00:00",
            "２０２４-01-05",
        ] {
            let err = parse_date(input).unwrap_err();
            assert!(err.is_validation(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-00-10").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-04-31").is_err());
    }

    #[test]
    fn test_month_key() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(month_key(date), "2024-02");
        assert_eq!(format_date(date), "2024-02-10");
    }
}
