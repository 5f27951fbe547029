//! Material model
//!
//! Represents catalog materials with pricing and stock levels. The catalog
//! is read-only at runtime: the wizard's material selector and the inventory
//! views only ever look materials up.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MaterialId;
use super::money::Money;

/// Stock level relative to the configured minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// At or below the minimum
    Low,
    /// Within 50% above the minimum
    Warning,
    /// Comfortably stocked
    Ok,
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Warning => write!(f, "Warning"),
            Self::Ok => write!(f, "OK"),
        }
    }
}

/// A purchasable material in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique catalog identifier
    pub id: MaterialId,

    /// Display code (e.g., "MAT-001")
    pub code: String,

    /// Human-readable description
    pub description: String,

    /// Unit of sale (e.g., "Roll", "Unit")
    pub unit: String,

    /// Acquisition cost per unit
    pub cost: Money,

    /// Sale price per unit (what quotes are priced at)
    pub price: Money,

    /// Units currently in stock
    pub stock: u32,

    /// Minimum stock before a restock alert
    pub min_stock: u32,

    /// Fiscal classification code
    pub ncm: String,

    /// Whether the material is active in the catalog
    pub active: bool,
}

impl Material {
    /// Stock level relative to the minimum
    pub fn stock_level(&self) -> StockLevel {
        if self.stock <= self.min_stock {
            StockLevel::Low
        } else if (self.stock as f64) <= self.min_stock as f64 * 1.5 {
            StockLevel::Warning
        } else {
            StockLevel::Ok
        }
    }

    /// Whether the stock is at or below the minimum
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Total sale value of the units in stock
    pub fn stock_value(&self) -> Money {
        self.price.scale(self.stock as f64)
    }

    /// Case-insensitive match against code or description
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.code.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(stock: u32, min_stock: u32) -> Material {
        Material {
            id: MaterialId::new(1),
            code: "MAT-001".into(),
            description: "Cat6 Network Cable - 305m".into(),
            unit: "Roll".into(),
            cost: Money::from_cents(45000),
            price: Money::from_cents(63000),
            stock,
            min_stock,
            ncm: "85444290".into(),
            active: true,
        }
    }

    #[test]
    fn test_stock_level() {
        assert_eq!(material(5, 5).stock_level(), StockLevel::Low);
        assert_eq!(material(3, 5).stock_level(), StockLevel::Low);
        assert_eq!(material(7, 5).stock_level(), StockLevel::Warning);
        assert_eq!(material(8, 5).stock_level(), StockLevel::Ok);
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(material(15, 5).stock_value().cents(), 15 * 63000);
    }

    #[test]
    fn test_matches_query() {
        let m = material(15, 5);
        assert!(m.matches_query(""));
        assert!(m.matches_query("mat-001"));
        assert!(m.matches_query("cat6"));
        assert!(m.matches_query("NETWORK"));
        assert!(!m.matches_query("switch"));
    }

    #[test]
    fn test_serialization() {
        let m = material(15, 5);
        let json = serde_json::to_string(&m).unwrap();
        let back: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(m.id, back.id);
        assert_eq!(m.price, back.price);
    }
}
