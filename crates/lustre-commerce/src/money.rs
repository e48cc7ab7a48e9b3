//! Money type for representing monetary values.
//!
//! Catalog prices are whole currency units (rupees), so amounts are plain
//! integers and no rounding happens beyond integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies. The catalog is priced in rupees only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
        }
    }

    /// Group digits the way the currency's home locale does.
    fn group_digits(&self, digits: &str) -> String {
        match self {
            // 12,34,567: last three digits, then pairs.
            Currency::INR => {
                if digits.len() <= 3 {
                    return digits.to_string();
                }
                let (head, tail) = digits.split_at(digits.len() - 3);
                let mut groups: Vec<&str> = Vec::new();
                let mut end = head.len();
                while end > 0 {
                    let start = end.saturating_sub(2);
                    groups.push(&head[start..end]);
                    end = start;
                }
                groups.reverse();
                format!("{},{}", groups.join(","), tail)
            }
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Rupee amount, the catalog's currency.
    pub fn inr(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Format as a display string (e.g., "₹1,24,999").
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        let digits = self.amount.unsigned_abs().to_string();
        format!(
            "{}{}{}",
            sign,
            self.currency.symbol(),
            self.currency.group_digits(&digits)
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
