//! Strongly-typed identifiers for catalog materials and quotes
//!
//! Materials carry small numeric catalog ids; quotes carry a sequential
//! ordinal rendered as a zero-padded number ("QTE-001"). Newtype wrappers
//! keep the two from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a material in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(u32);

impl MaterialId {
    /// Create a material id from its raw catalog number
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw catalog number
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaterialId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Sequential quote number, displayed as a zero-padded ordinal ("QTE-001")
///
/// Numbers are allocated from the current length of the quote list at
/// submission time. There is no uniqueness check beyond the sequential
/// count; concurrent submission is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteNumber(u32);

impl QuoteNumber {
    /// Create a quote number from its ordinal
    pub const fn new(ordinal: u32) -> Self {
        Self(ordinal)
    }

    /// Get the raw ordinal
    pub const fn ordinal(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QTE-{:03}", self.0)
    }
}

impl FromStr for QuoteNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("QTE-").or_else(|| s.strip_prefix("qte-")).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_number_display_zero_padded() {
        assert_eq!(QuoteNumber::new(1).to_string(), "QTE-001");
        assert_eq!(QuoteNumber::new(42).to_string(), "QTE-042");
        assert_eq!(QuoteNumber::new(1234).to_string(), "QTE-1234");
    }

    #[test]
    fn test_quote_number_parse() {
        assert_eq!("QTE-003".parse::<QuoteNumber>().unwrap(), QuoteNumber::new(3));
        assert_eq!("3".parse::<QuoteNumber>().unwrap(), QuoteNumber::new(3));
        assert!("QTE-abc".parse::<QuoteNumber>().is_err());
    }

    #[test]
    fn test_material_id_parse() {
        assert_eq!("2".parse::<MaterialId>().unwrap(), MaterialId::new(2));
        assert!("999x".parse::<MaterialId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = MaterialId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: MaterialId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
