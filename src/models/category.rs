//! Standard expense categories
//!
//! Records accept any category text. This list is what the front-end offers
//! when entering a new expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Category labels offered for new expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StandardCategory {
    Food,
    Travel,
    Bills,
    Entertainment,
    Shopping,
    Health,
    #[default]
    Miscellaneous,
}

impl StandardCategory {
    /// All categories in presentation order
    pub const ALL: [StandardCategory; 7] = [
        Self::Food,
        Self::Travel,
        Self::Bills,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Miscellaneous,
    ];

    /// The label stored on records
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for StandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StandardCategory {
    type Err = LedgerError;

    /// Case-insensitive match against the labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let labels: Vec<_> = Self::ALL.iter().map(|c| c.label()).collect();
                LedgerError::Validation(format!(
                    "Unknown category '{}': expected one of {}",
                    s,
                    labels.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_miscellaneous() {
        assert_eq!(StandardCategory::default(), StandardCategory::Miscellaneous);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<StandardCategory>().unwrap(), StandardCategory::Food);
        assert_eq!(
            " HEALTH ".parse::<StandardCategory>().unwrap(),
            StandardCategory::Health
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<StandardCategory>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Miscellaneous"));
    }

    #[test]
    fn test_labels_round_trip() {
        for category in StandardCategory::ALL {
            assert_eq!(category.label().parse::<StandardCategory>().unwrap(), category);
        }
    }
}
