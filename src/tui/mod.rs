//! Terminal User Interface module
//!
//! This module provides the interactive console for Quotedesk using ratatui.
//! It includes the dashboard, materials, approvals, and technician views,
//! plus the quote creation wizard and approval dialogs.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
