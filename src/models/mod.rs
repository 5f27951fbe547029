//! Core data models for Quotedesk
//!
//! This module contains the data structures that represent the domain:
//! catalog materials, quotes and their line items, and the money type.

pub mod ids;
pub mod material;
pub mod money;
pub mod quote;

pub use ids::{MaterialId, QuoteNumber};
pub use material::{Material, StockLevel};
pub use money::Money;
pub use quote::{ClientInfo, LineItem, Quote, QuoteStatus, TechnicianInfo};
