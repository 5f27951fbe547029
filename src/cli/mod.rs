//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod material;
pub mod quote;

pub use material::{handle_material_command, MaterialCommands};
pub use quote::{handle_quote_command, QuoteCommands};
