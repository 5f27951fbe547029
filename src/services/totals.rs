//! Derived quote totals
//!
//! A pure calculator over the draft's line items, labor cost, and discount.
//! Totals are recomputed from their inputs on every read and never cached,
//! so they cannot drift from the items they summarize.

use crate::models::{LineItem, Money};

/// Derived totals for a quote draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTotals {
    /// Sum of all line-item totals
    pub materials_total: Money,
    /// Materials total plus labor cost
    pub subtotal: Money,
    /// Subtotal minus discount
    pub total: Money,
}

/// Compute totals from the current items, labor cost, and discount
pub fn calculate_totals(items: &[LineItem], labor_cost: Money, discount: Money) -> QuoteTotals {
    let materials_total: Money = items.iter().map(|item| item.total()).sum();
    let subtotal = materials_total + labor_cost;
    QuoteTotals {
        materials_total,
        subtotal,
        total: subtotal - discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, unit_price_cents: i64) -> LineItem {
        let mut item = LineItem::new();
        item.set_unit_price(Money::from_cents(unit_price_cents));
        item.set_quantity(quantity);
        item
    }

    #[test]
    fn test_reference_scenario() {
        // 2 x 630.00 + 100 x 4.20, labor 6250.00, no discount
        let items = vec![item(2.0, 63000), item(100.0, 420)];
        let totals = calculate_totals(&items, Money::from_cents(625000), Money::zero());

        assert_eq!(totals.materials_total.cents(), 168000); // 1,680.00
        assert_eq!(totals.subtotal.cents(), 793000);
        assert_eq!(totals.total.cents(), 793000); // 7,930.00
    }

    #[test]
    fn test_discount_subtracts_from_subtotal() {
        let items = vec![item(1.0, 100000)];
        let totals = calculate_totals(&items, Money::from_cents(50000), Money::from_cents(25000));
        assert_eq!(totals.materials_total.cents(), 100000);
        assert_eq!(totals.subtotal.cents(), 150000);
        assert_eq!(totals.total.cents(), 125000);
    }

    #[test]
    fn test_empty_items() {
        let totals = calculate_totals(&[], Money::zero(), Money::zero());
        assert_eq!(totals.materials_total, Money::zero());
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let items = vec![item(2.0, 63000), item(100.0, 420)];
        let labor = Money::from_cents(625000);
        let first = calculate_totals(&items, labor, Money::zero());
        let second = calculate_totals(&items, labor, Money::zero());
        assert_eq!(first, second);
    }
}
