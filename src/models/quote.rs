//! Quote model
//!
//! A quote starts life as a transient draft inside the creation wizard and
//! becomes an immutable `Quote` record on submission. Only the approval
//! workflow mutates it afterward, and only its status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{MaterialId, QuoteNumber};
use super::money::Money;

/// Approval status of a submitted quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Awaiting an approval decision
    Pending,
    /// Approved by a manager
    Approved,
    /// Rejected; a reason is recorded on the quote
    Rejected,
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// One priced row (material or service) within a quote
///
/// `total` is derived: it always equals `unit_price x quantity` and is
/// recomputed by the typed setters. It is never independently settable, so
/// it cannot drift from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Weak reference into the material catalog, if the row was picked from it
    pub material_id: Option<MaterialId>,

    /// Row description (copied from the material or typed manually)
    pub description: String,

    /// Quantity; fractional quantities are allowed
    pub quantity: f64,

    /// Unit label (e.g., "Roll", "unit")
    pub unit: String,

    /// Price per unit
    pub unit_price: Money,

    /// Derived row total
    total: Money,
}

impl LineItem {
    /// Create an empty row: quantity 1, price 0, unit "unit"
    pub fn new() -> Self {
        Self {
            material_id: None,
            description: String::new(),
            quantity: 1.0,
            unit: "unit".to_string(),
            unit_price: Money::zero(),
            total: Money::zero(),
        }
    }

    /// The derived row total (quantity x unit price)
    pub fn total(&self) -> Money {
        self.total
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the unit label
    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    /// Set the quantity and recompute the total
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.recompute_total();
    }

    /// Set the unit price and recompute the total
    pub fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price;
        self.recompute_total();
    }

    /// Overwrite description, unit, price and reference from a catalog
    /// material, keeping the current quantity
    pub fn apply_material(
        &mut self,
        id: MaterialId,
        description: &str,
        unit: &str,
        price: Money,
    ) {
        self.material_id = Some(id);
        self.description = description.to_string();
        self.unit = unit.to_string();
        self.unit_price = price;
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.unit_price.scale(self.quantity);
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

/// The client a quote is addressed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client or company name
    pub name: String,

    /// Tax identifier (free-form, optional)
    #[serde(default)]
    pub tax_id: String,
}

/// The technician who authored a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianInfo {
    /// Technician name
    pub name: String,

    /// Technician's company
    pub company: String,
}

/// A finalized, submitted quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Sequential quote number ("QTE-001")
    pub number: QuoteNumber,

    /// Addressed client
    pub client: ClientInfo,

    /// Authoring technician, when known
    pub technician: Option<TechnicianInfo>,

    /// Description of the service quoted
    pub description: String,

    /// Priced rows, in the order the technician entered them
    pub items: Vec<LineItem>,

    /// Sum of the item totals at submission time
    pub materials_cost: Money,

    /// Labor cost
    pub labor_cost: Money,

    /// Discount subtracted from the subtotal
    pub discount: Money,

    /// Grand total at submission time
    pub total_value: Money,

    /// Approval status
    pub status: QuoteStatus,

    /// Reason recorded when the quote was rejected
    #[serde(default)]
    pub rejection_reason: Option<String>,

    /// Submission date
    pub created_at: NaiveDate,

    /// Date the quote is valid until
    pub validity: Option<NaiveDate>,

    /// Execution deadline (free text, e.g. "15 business days")
    #[serde(default)]
    pub execution_time: String,

    /// Payment terms (free text)
    #[serde(default)]
    pub payment_terms: String,
}

impl Quote {
    /// Whether this quote is still awaiting a decision
    pub fn is_pending(&self) -> bool {
        self.status == QuoteStatus::Pending
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.number, self.client.name, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_item_defaults() {
        let item = LineItem::new();
        assert_eq!(item.description, "");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, "unit");
        assert_eq!(item.unit_price, Money::zero());
        assert_eq!(item.total(), Money::zero());
        assert!(item.material_id.is_none());
    }

    #[test]
    fn test_total_tracks_quantity_and_price() {
        let mut item = LineItem::new();
        item.set_unit_price(Money::from_cents(63000));
        assert_eq!(item.total().cents(), 63000);

        item.set_quantity(2.0);
        assert_eq!(item.total().cents(), 126000);

        item.set_unit_price(Money::from_cents(420));
        assert_eq!(item.total().cents(), 840);

        // Description and unit edits never touch the total
        item.set_description("RJ45 connectors");
        item.set_unit("Unit");
        assert_eq!(item.total().cents(), 840);
    }

    #[test]
    fn test_apply_material_keeps_quantity() {
        let mut item = LineItem::new();
        item.set_quantity(3.0);
        item.apply_material(
            MaterialId::new(4),
            "24-port Patch Panel",
            "Unit",
            Money::from_cents(18500),
        );
        assert_eq!(item.material_id, Some(MaterialId::new(4)));
        assert_eq!(item.description, "24-port Patch Panel");
        assert_eq!(item.unit, "Unit");
        assert_eq!(item.quantity, 3.0);
        assert_eq!(item.total().cents(), 55500);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(QuoteStatus::Pending.to_string(), "Pending");
        assert_eq!(QuoteStatus::Approved.to_string(), "Approved");
        assert_eq!(QuoteStatus::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn test_line_item_serialization_round_trip() {
        let mut item = LineItem::new();
        item.set_unit_price(Money::from_cents(420));
        item.set_quantity(100.0);
        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
        assert_eq!(back.total().cents(), 42000);
    }
}
