//! Quote repository
//!
//! The quote list lives behind an explicit repository seam rather than as
//! ambient shared state: the wizard's submission handler and the approval
//! service both receive the repository, so a persistent backend could be
//! substituted later without touching either.

use crate::error::{QuotedeskError, QuotedeskResult};
use crate::models::{Quote, QuoteNumber, QuoteStatus};

/// Ordered store of submitted quotes, newest first
pub trait QuoteRepository {
    /// All quotes, newest first
    fn list(&self) -> &[Quote];

    /// Insert a newly submitted quote at the front of the list
    fn prepend(&mut self, quote: Quote);

    /// Transition a quote's approval status
    ///
    /// `rejection_reason` is recorded verbatim when `status` is `Rejected`
    /// and cleared otherwise.
    fn update_status(
        &mut self,
        number: QuoteNumber,
        status: QuoteStatus,
        rejection_reason: Option<String>,
    ) -> QuotedeskResult<()>;

    /// Next sequential quote number based on the current list length
    fn next_number(&self) -> QuoteNumber {
        QuoteNumber::new(self.list().len() as u32 + 1)
    }

    /// Look up a quote by number
    fn get(&self, number: QuoteNumber) -> Option<&Quote> {
        self.list().iter().find(|q| q.number == number)
    }
}

/// In-memory quote store with process-lifetime state
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteStore {
    quotes: Vec<Quote>,
}

impl InMemoryQuoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with quotes (newest first)
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }
}

impl QuoteRepository for InMemoryQuoteStore {
    fn list(&self) -> &[Quote] {
        &self.quotes
    }

    fn prepend(&mut self, quote: Quote) {
        self.quotes.insert(0, quote);
    }

    fn update_status(
        &mut self,
        number: QuoteNumber,
        status: QuoteStatus,
        rejection_reason: Option<String>,
    ) -> QuotedeskResult<()> {
        let quote = self
            .quotes
            .iter_mut()
            .find(|q| q.number == number)
            .ok_or_else(|| QuotedeskError::quote_not_found(number.to_string()))?;

        quote.status = status;
        quote.rejection_reason = if status == QuoteStatus::Rejected {
            rejection_reason
        } else {
            None
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut store = seed::quote_store();
        let initial_len = store.list().len();

        let mut quote = store.list()[0].clone();
        quote.number = store.next_number();
        let number = quote.number;
        store.prepend(quote);

        assert_eq!(store.list().len(), initial_len + 1);
        assert_eq!(store.list()[0].number, number);
    }

    #[test]
    fn test_next_number_follows_list_length() {
        let mut store = InMemoryQuoteStore::new();
        assert_eq!(store.next_number(), QuoteNumber::new(1));

        let mut quote = seed::quote_store().list()[0].clone();
        quote.number = QuoteNumber::new(1);
        store.prepend(quote);
        assert_eq!(store.next_number(), QuoteNumber::new(2));
    }

    #[test]
    fn test_update_status() {
        let mut store = seed::quote_store();
        let number = store.list()[0].number;

        store
            .update_status(number, QuoteStatus::Rejected, Some("over budget".into()))
            .unwrap();
        let quote = store.get(number).unwrap();
        assert_eq!(quote.status, QuoteStatus::Rejected);
        assert_eq!(quote.rejection_reason.as_deref(), Some("over budget"));

        // Re-approving clears the recorded reason
        store
            .update_status(number, QuoteStatus::Approved, None)
            .unwrap();
        let quote = store.get(number).unwrap();
        assert_eq!(quote.status, QuoteStatus::Approved);
        assert!(quote.rejection_reason.is_none());
    }

    #[test]
    fn test_update_status_unknown_number() {
        let mut store = seed::quote_store();
        let err = store
            .update_status(QuoteNumber::new(999), QuoteStatus::Approved, None)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
