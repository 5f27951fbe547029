//! Inventory queries
//!
//! Read-only views over the material catalog: text search, low-stock
//! filtering, and the aggregate numbers shown on the inventory screen.

use crate::models::{Material, Money};
use crate::store::MaterialCatalog;

/// Aggregate inventory numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    /// Materials in the catalog
    pub material_count: usize,
    /// Materials at or below their minimum stock
    pub low_stock_count: usize,
    /// Sale value of everything in stock
    pub total_stock_value: Money,
}

/// Search the catalog by code or description, optionally keeping only
/// low-stock materials
pub fn search<'a>(
    catalog: &'a MaterialCatalog,
    query: &str,
    low_stock_only: bool,
) -> Vec<&'a Material> {
    catalog
        .all()
        .iter()
        .filter(|m| m.matches_query(query))
        .filter(|m| !low_stock_only || m.is_low_stock())
        .collect()
}

/// Compute the aggregate numbers for the whole catalog
pub fn summary(catalog: &MaterialCatalog) -> InventorySummary {
    InventorySummary {
        material_count: catalog.len(),
        low_stock_count: catalog.all().iter().filter(|m| m.is_low_stock()).count(),
        total_stock_value: catalog.all().iter().map(|m| m.stock_value()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_search_by_description() {
        let catalog = seed::material_catalog();
        let hits = search(&catalog, "switch", false);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "MAT-003");
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let catalog = seed::material_catalog();
        assert_eq!(search(&catalog, "", false).len(), catalog.len());
    }

    #[test]
    fn test_low_stock_filter() {
        let catalog = seed::material_catalog();
        let codes: Vec<&str> = search(&catalog, "", true)
            .iter()
            .map(|m| m.code.as_str())
            .collect();
        // Connectors (8/20) and switch (3/5) are at or below minimum
        assert_eq!(codes, vec!["MAT-002", "MAT-003"]);
    }

    #[test]
    fn test_summary() {
        let catalog = seed::material_catalog();
        let s = summary(&catalog);
        assert_eq!(s.material_count, 4);
        assert_eq!(s.low_stock_count, 2);

        let expected: i64 = 15 * 63000 + 8 * 420 + 3 * 125000 + 12 * 18500;
        assert_eq!(s.total_stock_value.cents(), expected);
    }
}
