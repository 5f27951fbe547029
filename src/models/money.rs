//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations and BRL-style
//! formatting ("R$ 1.234,56").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as centavos (hundredths of the currency unit)
///
/// Using i64 centavos keeps every derived total exact: a line-item total is
/// always recomputable from quantity and unit price with no accumulated
/// floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use quotedesk::models::Money;
    /// let amount = Money::from_cents(63000); // R$ 630,00
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scale by a (possibly fractional) quantity, rounding to the nearest
    /// centavo
    ///
    /// This is how a line-item total is derived from its unit price:
    /// `unit_price.scale(quantity)`.
    pub fn scale(&self, quantity: f64) -> Self {
        Self((self.0 as f64 * quantity).round() as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts both decimal separators plus an optional currency prefix:
    /// "630.00", "630,00", "1.234,56", "R$ 10,50", "-10.50", "10".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix("R$").unwrap_or(s).trim();
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        // With a comma present, the comma is the decimal separator and any
        // dots are thousands grouping. Otherwise a dot is the decimal
        // separator.
        let normalized = if s.contains(',') {
            s.replace('.', "").replace(',', ".")
        } else {
            s.to_string()
        };

        let cents = if let Some((units_str, frac_str)) = normalized.split_once('.') {
            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fraction to 2 digits
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + frac
        } else {
            // Integer format - whole currency units
            normalized
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.units().abs();
        let mut grouped = String::new();
        let digits = units.to_string();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}R$ {},{:02}", sign, grouped, self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(63000);
        assert_eq!(m.cents(), 63000);
        assert_eq!(m.units(), 630);
        assert_eq!(m.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "R$ 10,50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0,00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-R$ 10,50");
        assert_eq!(format!("{}", Money::from_cents(5)), "R$ 0,05");
        assert_eq!(format!("{}", Money::from_cents(123456789)), "R$ 1.234.567,89");
        assert_eq!(format!("{}", Money::from_cents(157500)), "R$ 1.575,00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_scale() {
        // 2 x R$ 630,00 = R$ 1.260,00
        assert_eq!(Money::from_cents(63000).scale(2.0).cents(), 126000);
        // 100 x R$ 4,20 = R$ 420,00
        assert_eq!(Money::from_cents(420).scale(100.0).cents(), 42000);
        // Fractional quantity rounds to the nearest centavo
        assert_eq!(Money::from_cents(1000).scale(2.5).cents(), 2500);
        assert_eq!(Money::from_cents(999).scale(0.5).cents(), 500);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("R$ 10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1.234,56").unwrap().cents(), 123456);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("1.5é").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(126000),
            Money::from_cents(42000),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 168000);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
