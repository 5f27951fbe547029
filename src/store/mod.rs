//! In-memory stores
//!
//! All state is process-lifetime only: the material catalog is a read-only
//! registry and the quote list is an ordered in-memory store behind the
//! `QuoteRepository` seam. Nothing here touches the filesystem.

pub mod catalog;
pub mod quotes;
pub mod seed;

pub use catalog::MaterialCatalog;
pub use quotes::{InMemoryQuoteStore, QuoteRepository};
