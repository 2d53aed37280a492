//! Amount type for expense values
//!
//! Wraps an `f64` so the persisted document keeps plain JSON numbers and a
//! save/load cycle reproduces every value exactly. Non-finite values are
//! rejected at construction because JSON cannot represent them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::LedgerError;

/// Currency symbol used by [`crate::models::Record::render`]
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// A signed monetary amount; zero and negative values are allowed
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Create an amount from a number, rejecting NaN and infinities
    pub fn new(value: f64) -> Result<Self, LedgerError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(LedgerError::Validation(format!(
                "Amount must be a finite number, got {}",
                value
            )))
        }
    }

    /// Parse an amount from text such as "12.50", "-3" or " 4.5 "
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| LedgerError::Validation(format!("Invalid amount: '{}'", s)))?;
        Self::new(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Format to two decimals after a currency symbol, e.g. "₹12.50" or "₹-3.00"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Amount {
    type Error = LedgerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Amount {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}
