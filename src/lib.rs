//! Quotedesk - Terminal console for quotes, inventory, and approvals
//!
//! This library provides the core functionality for the Quotedesk console:
//! a material catalog, a three-step quote creation wizard for technicians,
//! and a manager approval workflow. All state is in-memory and seeded with
//! demo data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, materials, quotes)
//! - `store`: In-memory stores and seed data
//! - `services`: Business logic (wizard, totals, approval, inventory)
//! - `display`: Terminal table and detail formatting
//! - `cli`: Command handlers for the non-interactive interface
//! - `tui`: Interactive console built on ratatui
//!
//! # Example
//!
//! ```rust
//! use quotedesk::services::wizard::QuoteWizard;
//!
//! let mut wizard = QuoteWizard::new();
//! wizard.open();
//! wizard.set_client_name("ABC Enterprises Ltd");
//! wizard.set_service_description("Structured network installation");
//! wizard.add_item();
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::{QuotedeskError, QuotedeskResult};
