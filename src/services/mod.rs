//! Business logic
//!
//! The wizard owns quote creation end to end; the totals calculator is the
//! single source of derived money figures; approval, inventory, and
//! dashboard are thin query/command layers over the stores.

pub mod approval;
pub mod dashboard;
pub mod inventory;
pub mod totals;
pub mod wizard;

pub use totals::{calculate_totals, QuoteTotals};
pub use wizard::{QuoteDraft, QuoteWizard, WizardState, WizardStep};
