//! TUI dialogs
//!
//! Modal overlays: the quote creation wizard, the rejection prompt, quote
//! details, and help.

pub mod help;
pub mod quote_detail;
pub mod reject;
pub mod wizard;

pub use reject::RejectFormState;
pub use wizard::WizardFormState;
