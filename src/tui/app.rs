//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the stores, the wizard, and the per-view selection and dialog state.

use crate::models::{Material, Quote, QuoteNumber};
use crate::services::inventory;
use crate::services::wizard::QuoteWizard;
use crate::store::{InMemoryQuoteStore, MaterialCatalog, QuoteRepository};

use super::dialogs::reject::RejectFormState;
use super::dialogs::wizard::WizardFormState;
use super::widgets::input::TextInput;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Materials,
    Approvals,
    Technician,
}

impl ActiveView {
    /// Display name for the status bar
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Materials => "Materials",
            Self::Approvals => "Approvals",
            Self::Technician => "Technician",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Wizard,
    QuoteDetail(QuoteNumber),
    Reject(QuoteNumber),
    Help,
}

/// Main application state
pub struct App {
    /// Material catalog (read-only)
    pub catalog: MaterialCatalog,

    /// Quote store
    pub quotes: InMemoryQuoteStore,

    /// Quote creation wizard
    pub wizard: QuoteWizard,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected material index (materials view, over the filtered list)
    pub selected_material_index: usize,

    /// Selected quote index (approvals and technician views)
    pub selected_quote_index: usize,

    /// Materials search input
    pub search_input: TextInput,

    /// Whether the search input is capturing keys
    pub searching: bool,

    /// Only show low-stock materials
    pub low_stock_only: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Wizard dialog form state
    pub wizard_form: WizardFormState,

    /// Rejection dialog form state
    pub reject_form: RejectFormState,
}

impl App {
    /// Create a new App instance
    pub fn new(catalog: MaterialCatalog, quotes: InMemoryQuoteStore) -> Self {
        Self {
            catalog,
            quotes,
            wizard: QuoteWizard::new(),
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            selected_material_index: 0,
            selected_quote_index: 0,
            search_input: TextInput::new().placeholder("Search materials..."),
            searching: false,
            low_stock_only: false,
            status_message: None,
            wizard_form: WizardFormState::new(),
            reject_form: RejectFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view, resetting selection state
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_material_index = 0;
        self.selected_quote_index = 0;
        self.searching = false;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::Wizard => {
                self.wizard.open();
                self.wizard_form = WizardFormState::new();
            }
            ActiveDialog::Reject(_) => {
                self.reject_form = RejectFormState::new();
            }
            _ => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Materials matching the current search and low-stock filter
    pub fn visible_materials(&self) -> Vec<&Material> {
        inventory::search(&self.catalog, self.search_input.value(), self.low_stock_only)
    }

    /// Quotes shown in the current view
    ///
    /// The approvals view shows only pending quotes; the others show all,
    /// newest first.
    pub fn visible_quotes(&self) -> Vec<&Quote> {
        let quotes = self.quotes.list();
        match self.active_view {
            ActiveView::Approvals => quotes.iter().filter(|q| q.is_pending()).collect(),
            _ => quotes.iter().collect(),
        }
    }

    /// The quote currently selected in the active view
    pub fn selected_quote_number(&self) -> Option<QuoteNumber> {
        self.visible_quotes()
            .get(self.selected_quote_index)
            .map(|q| q.number)
    }

    /// Move the active view's selection up
    pub fn move_up(&mut self) {
        match self.active_view {
            ActiveView::Materials => {
                self.selected_material_index = self.selected_material_index.saturating_sub(1);
            }
            _ => {
                self.selected_quote_index = self.selected_quote_index.saturating_sub(1);
            }
        }
    }

    /// Move the active view's selection down
    pub fn move_down(&mut self) {
        match self.active_view {
            ActiveView::Materials => {
                let max = self.visible_materials().len();
                if self.selected_material_index + 1 < max {
                    self.selected_material_index += 1;
                }
            }
            _ => {
                let max = self.visible_quotes().len();
                if self.selected_quote_index + 1 < max {
                    self.selected_quote_index += 1;
                }
            }
        }
    }

    /// Clamp selections after a filter or list change
    pub fn clamp_selections(&mut self) {
        let materials = self.visible_materials().len();
        if self.selected_material_index >= materials {
            self.selected_material_index = materials.saturating_sub(1);
        }
        let quotes = self.visible_quotes().len();
        if self.selected_quote_index >= quotes {
            self.selected_quote_index = quotes.saturating_sub(1);
        }
    }
}
