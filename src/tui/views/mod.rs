//! TUI Views module
//!
//! Contains the main views: dashboard, materials, approvals, technician,
//! as well as the sidebar and status bar.

pub mod approvals;
pub mod dashboard;
pub mod materials;
pub mod sidebar;
pub mod status_bar;
pub mod technician;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render sidebar
    sidebar::render(frame, app, layout.sidebar);

    // Render main view based on active view
    match app.active_view {
        ActiveView::Dashboard => {
            dashboard::render(frame, app, layout.main);
        }
        ActiveView::Materials => {
            materials::render(frame, app, layout.main);
        }
        ActiveView::Approvals => {
            approvals::render(frame, app, layout.main);
        }
        ActiveView::Technician => {
            technician::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::Wizard => {
            dialogs::wizard::render(frame, app);
        }
        ActiveDialog::QuoteDetail(number) => {
            dialogs::quote_detail::render(frame, app, number);
        }
        ActiveDialog::Reject(number) => {
            dialogs::reject::render(frame, app, number);
        }
        ActiveDialog::None => {}
    }
}
