//! Dashboard metrics
//!
//! The numbers and lists behind the overview screen: stock value, pending
//! decisions, approval rate, the most recent quotes, and restock alerts.

use crate::models::{Material, Money, Quote, QuoteStatus};
use crate::store::{MaterialCatalog, QuoteRepository};

/// Headline numbers for the overview screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    /// Sale value of everything in stock
    pub stock_value: Money,
    /// Quotes awaiting a decision
    pub pending_count: usize,
    /// Quotes submitted in total
    pub quote_count: usize,
    /// Share of decided quotes that were approved, 0.0 to 1.0; None until
    /// at least one quote has been decided
    pub approval_rate: Option<f64>,
}

/// Compute the headline numbers
pub fn stats(catalog: &MaterialCatalog, repo: &dyn QuoteRepository) -> DashboardStats {
    let quotes = repo.list();
    let approved = quotes
        .iter()
        .filter(|q| q.status == QuoteStatus::Approved)
        .count();
    let rejected = quotes
        .iter()
        .filter(|q| q.status == QuoteStatus::Rejected)
        .count();
    let decided = approved + rejected;

    DashboardStats {
        stock_value: catalog.all().iter().map(|m| m.stock_value()).sum(),
        pending_count: quotes.iter().filter(|q| q.is_pending()).count(),
        quote_count: quotes.len(),
        approval_rate: if decided > 0 {
            Some(approved as f64 / decided as f64)
        } else {
            None
        },
    }
}

/// The most recently submitted quotes, newest first
pub fn recent_quotes(repo: &dyn QuoteRepository, limit: usize) -> &[Quote] {
    let quotes = repo.list();
    &quotes[..quotes.len().min(limit)]
}

/// Materials at or below their minimum stock, most depleted first
pub fn low_stock_alerts(catalog: &MaterialCatalog) -> Vec<&Material> {
    let mut alerts: Vec<&Material> = catalog
        .all()
        .iter()
        .filter(|m| m.is_low_stock())
        .collect();
    alerts.sort_by_key(|m| m.stock as i64 - m.min_stock as i64);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteNumber;
    use crate::store::{seed, InMemoryQuoteStore};

    #[test]
    fn test_stats_on_seed_data() {
        let catalog = seed::material_catalog();
        let store = seed::quote_store();
        let s = stats(&catalog, &store);

        assert_eq!(s.quote_count, 3);
        assert_eq!(s.pending_count, 1);
        // One approved, one rejected
        assert_eq!(s.approval_rate, Some(0.5));

        let expected: i64 = 15 * 63000 + 8 * 420 + 3 * 125000 + 12 * 18500;
        assert_eq!(s.stock_value.cents(), expected);
    }

    #[test]
    fn test_approval_rate_none_without_decisions() {
        let catalog = seed::material_catalog();
        let store = InMemoryQuoteStore::new();
        assert_eq!(stats(&catalog, &store).approval_rate, None);
    }

    #[test]
    fn test_recent_quotes_limited_and_newest_first() {
        let store = seed::quote_store();
        let recent = recent_quotes(&store, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].number, QuoteNumber::new(3));

        // Limit larger than the list is fine
        assert_eq!(recent_quotes(&store, 10).len(), 3);
    }

    #[test]
    fn test_low_stock_alerts_most_depleted_first() {
        let catalog = seed::material_catalog();
        let codes: Vec<&str> = low_stock_alerts(&catalog)
            .iter()
            .map(|m| m.code.as_str())
            .collect();
        // Connectors are 12 under minimum, the switch 2 under
        assert_eq!(codes, vec!["MAT-002", "MAT-003"]);
    }
}
