//! Approval workflow
//!
//! Managers decide on pending quotes: approve with a single action, or
//! reject with a mandatory reason. Decisions go through the repository so
//! they land on the stored record, not on a copy.

use log::info;

use crate::error::{QuotedeskError, QuotedeskResult};
use crate::models::{QuoteNumber, QuoteStatus};
use crate::store::QuoteRepository;

/// Approve the quote with the given number
pub fn approve(repo: &mut dyn QuoteRepository, number: QuoteNumber) -> QuotedeskResult<()> {
    repo.update_status(number, QuoteStatus::Approved, None)?;
    info!("quote {} approved", number);
    Ok(())
}

/// Reject the quote with the given number, recording the reason
///
/// The reason is mandatory; a blank or whitespace-only reason fails with a
/// validation error and leaves the quote untouched.
pub fn reject(
    repo: &mut dyn QuoteRepository,
    number: QuoteNumber,
    reason: &str,
) -> QuotedeskResult<()> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(QuotedeskError::Validation(
            "a rejection reason is required".into(),
        ));
    }

    repo.update_status(number, QuoteStatus::Rejected, Some(reason.to_string()))?;
    info!("quote {} rejected: {}", number, reason);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_approve_pending_quote() {
        let mut store = seed::quote_store();
        approve(&mut store, QuoteNumber::new(1)).unwrap();
        let quote = store.get(QuoteNumber::new(1)).unwrap();
        assert_eq!(quote.status, QuoteStatus::Approved);
        assert!(quote.rejection_reason.is_none());
    }

    #[test]
    fn test_reject_records_reason() {
        let mut store = seed::quote_store();
        reject(&mut store, QuoteNumber::new(1), "  missing client tax id  ").unwrap();
        let quote = store.get(QuoteNumber::new(1)).unwrap();
        assert_eq!(quote.status, QuoteStatus::Rejected);
        assert_eq!(
            quote.rejection_reason.as_deref(),
            Some("missing client tax id")
        );
    }

    #[test]
    fn test_reject_requires_reason() {
        let mut store = seed::quote_store();
        let err = reject(&mut store, QuoteNumber::new(1), "   ").unwrap_err();
        assert!(err.is_validation());
        assert!(store.get(QuoteNumber::new(1)).unwrap().is_pending());
    }

    #[test]
    fn test_unknown_quote_number() {
        let mut store = seed::quote_store();
        let err = approve(&mut store, QuoteNumber::new(999)).unwrap_err();
        assert!(err.is_not_found());
    }
}
