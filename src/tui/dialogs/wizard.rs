//! Quote creation wizard dialog
//!
//! Modal three-step form over the wizard service: client info, line items,
//! review. The form state here is purely presentational; every mutation of
//! the draft goes through the wizard's own operations.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::quote::format_quantity;
use crate::models::Money;
use crate::services::wizard::{QuoteWizard, WizardStep};
use crate::tui::app::App;
use crate::tui::layout::{centered_rect, centered_rect_fixed};
use crate::tui::widgets::input::TextInput;

/// Which field is focused on the client info step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientField {
    #[default]
    Name,
    TaxId,
    Description,
    ExecutionTime,
    PaymentTerms,
    Validity,
}

impl ClientField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::TaxId,
            Self::TaxId => Self::Description,
            Self::Description => Self::ExecutionTime,
            Self::ExecutionTime => Self::PaymentTerms,
            Self::PaymentTerms => Self::Validity,
            Self::Validity => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Validity,
            Self::TaxId => Self::Name,
            Self::Description => Self::TaxId,
            Self::ExecutionTime => Self::Description,
            Self::PaymentTerms => Self::ExecutionTime,
            Self::Validity => Self::PaymentTerms,
        }
    }
}

/// Which area is focused on the items step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemsFocus {
    #[default]
    Table,
    Labor,
    Discount,
}

impl ItemsFocus {
    /// Cycle to the next area
    pub fn next(self) -> Self {
        match self {
            Self::Table => Self::Labor,
            Self::Labor => Self::Discount,
            Self::Discount => Self::Table,
        }
    }
}

/// Which column of the selected item is being edited inline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Description,
    Quantity,
    Unit,
    UnitPrice,
}

impl ItemField {
    /// Cycle to the next column
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Quantity,
            Self::Quantity => Self::Unit,
            Self::Unit => Self::UnitPrice,
            Self::UnitPrice => Self::Description,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Quantity => "Quantity",
            Self::Unit => "Unit",
            Self::UnitPrice => "Unit Price",
        }
    }
}

/// Presentational state for the wizard dialog
#[derive(Debug, Clone)]
pub struct WizardFormState {
    /// Focused field on the client info step
    pub client_field: ClientField,

    /// Client name input
    pub name_input: TextInput,

    /// Client tax id input
    pub tax_id_input: TextInput,

    /// Service description input
    pub description_input: TextInput,

    /// Execution deadline input
    pub execution_input: TextInput,

    /// Payment terms input
    pub payment_input: TextInput,

    /// Validity date input (dd/mm/yyyy)
    pub validity_input: TextInput,

    /// Focused area on the items step
    pub items_focus: ItemsFocus,

    /// Selected row in the items table
    pub selected_item: usize,

    /// Column being edited inline, if any
    pub editing_field: Option<ItemField>,

    /// Inline edit buffer
    pub edit_input: TextInput,

    /// Labor cost input
    pub labor_input: TextInput,

    /// Discount input
    pub discount_input: TextInput,

    /// Whether the material picker is open
    pub show_material_picker: bool,

    /// Selected row in the material picker
    pub picker_index: usize,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for WizardFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardFormState {
    /// Create a fresh form state
    pub fn new() -> Self {
        let mut state = Self {
            client_field: ClientField::Name,
            name_input: TextInput::new()
                .label("Client")
                .placeholder("Client or company name"),
            tax_id_input: TextInput::new()
                .label("Tax ID")
                .placeholder("Optional"),
            description_input: TextInput::new()
                .label("Service")
                .placeholder("What is being quoted"),
            execution_input: TextInput::new()
                .label("Execution")
                .placeholder("e.g. 15 business days"),
            payment_input: TextInput::new()
                .label("Payment")
                .placeholder("e.g. 50% upfront"),
            validity_input: TextInput::new()
                .label("Valid Until")
                .placeholder("dd/mm/yyyy"),
            items_focus: ItemsFocus::Table,
            selected_item: 0,
            editing_field: None,
            edit_input: TextInput::new(),
            labor_input: TextInput::new().label("Labor").placeholder("0,00"),
            discount_input: TextInput::new().label("Discount").placeholder("0,00"),
            show_material_picker: false,
            picker_index: 0,
            error_message: None,
        };
        state.update_client_focus();
        state
    }

    /// Move to the next client info field
    pub fn next_client_field(&mut self) {
        self.client_field = self.client_field.next();
        self.update_client_focus();
    }

    /// Move to the previous client info field
    pub fn prev_client_field(&mut self) {
        self.client_field = self.client_field.prev();
        self.update_client_focus();
    }

    fn update_client_focus(&mut self) {
        self.name_input.focused = self.client_field == ClientField::Name;
        self.tax_id_input.focused = self.client_field == ClientField::TaxId;
        self.description_input.focused = self.client_field == ClientField::Description;
        self.execution_input.focused = self.client_field == ClientField::ExecutionTime;
        self.payment_input.focused = self.client_field == ClientField::PaymentTerms;
        self.validity_input.focused = self.client_field == ClientField::Validity;
    }

    /// Get the currently focused client info input
    pub fn focused_client_input(&mut self) -> &mut TextInput {
        match self.client_field {
            ClientField::Name => &mut self.name_input,
            ClientField::TaxId => &mut self.tax_id_input,
            ClientField::Description => &mut self.description_input,
            ClientField::ExecutionTime => &mut self.execution_input,
            ClientField::PaymentTerms => &mut self.payment_input,
            ClientField::Validity => &mut self.validity_input,
        }
    }

    /// Cycle focus between the items table and the cost inputs
    pub fn next_items_focus(&mut self) {
        self.items_focus = self.items_focus.next();
        self.labor_input.focused = self.items_focus == ItemsFocus::Labor;
        self.discount_input.focused = self.items_focus == ItemsFocus::Discount;
    }

    /// Copy the client info inputs into the wizard draft
    ///
    /// A non-blank validity that does not parse as dd/mm/yyyy is reported
    /// as an error and left out of the draft.
    pub fn sync_client_info(&mut self, wizard: &mut QuoteWizard) {
        wizard.set_client_name(self.name_input.value());
        wizard.set_client_tax_id(self.tax_id_input.value());
        wizard.set_service_description(self.description_input.value());
        wizard.set_execution_time(self.execution_input.value());
        wizard.set_payment_terms(self.payment_input.value());

        let validity = self.validity_input.value().trim();
        if validity.is_empty() {
            wizard.set_validity(None);
        } else {
            match NaiveDate::parse_from_str(validity, "%d/%m/%Y") {
                Ok(date) => wizard.set_validity(Some(date)),
                Err(_) => {
                    self.error_message = Some("Validity must be dd/mm/yyyy".to_string());
                }
            }
        }
    }

    /// Copy the labor and discount inputs into the wizard draft
    pub fn sync_costs(&mut self, wizard: &mut QuoteWizard) {
        match parse_optional_money(self.labor_input.value()) {
            Ok(amount) => wizard.set_labor_cost(amount),
            Err(message) => self.error_message = Some(message),
        }
        match parse_optional_money(self.discount_input.value()) {
            Ok(amount) => wizard.set_discount(amount),
            Err(message) => self.error_message = Some(message),
        }
    }

    /// Start inline editing of a column of the selected item
    pub fn begin_item_edit(&mut self, wizard: &QuoteWizard, field: ItemField) {
        let Some(item) = wizard.draft().items.get(self.selected_item) else {
            return;
        };
        let current = match field {
            ItemField::Description => item.description.clone(),
            ItemField::Quantity => format_quantity(item.quantity),
            ItemField::Unit => item.unit.clone(),
            ItemField::UnitPrice => format!("{:.2}", item.unit_price.cents() as f64 / 100.0),
        };
        self.edit_input = TextInput::new().content(current);
        self.edit_input.focused = true;
        self.editing_field = Some(field);
    }

    /// Commit the inline edit buffer to the wizard
    ///
    /// Parse failures set the error message and keep the edit open.
    pub fn commit_item_edit(&mut self, wizard: &mut QuoteWizard) -> bool {
        let Some(field) = self.editing_field else {
            return true;
        };
        let value = self.edit_input.value().to_string();
        let index = self.selected_item;

        match field {
            ItemField::Description => wizard.set_item_description(index, value),
            ItemField::Unit => wizard.set_item_unit(index, value),
            ItemField::Quantity => match value.trim().replace(',', ".").parse::<f64>() {
                Ok(quantity) => wizard.set_item_quantity(index, quantity),
                Err(_) => {
                    self.error_message = Some("Invalid quantity".to_string());
                    return false;
                }
            },
            ItemField::UnitPrice => match Money::parse(&value) {
                Ok(price) => wizard.set_item_unit_price(index, price),
                Err(_) => {
                    self.error_message = Some("Invalid unit price".to_string());
                    return false;
                }
            },
        }

        self.editing_field = None;
        self.error_message = None;
        true
    }

    /// Abandon the inline edit without committing
    pub fn cancel_item_edit(&mut self) {
        self.editing_field = None;
        self.error_message = None;
    }

    /// Clamp the item selection to the current item count
    pub fn clamp_selection(&mut self, item_count: usize) {
        if item_count == 0 {
            self.selected_item = 0;
        } else if self.selected_item >= item_count {
            self.selected_item = item_count - 1;
        }
    }
}

fn parse_optional_money(value: &str) -> Result<Money, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(value).map_err(|_| format!("Invalid amount: '{}'", value))
}

/// Render the wizard dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(step) = app.wizard.step() else {
        return;
    };

    let area = centered_rect(74, 80, frame.area());
    frame.render_widget(Clear, area);

    let title = match step {
        WizardStep::ClientInfo => " New Quote - Step 1/3: Client ",
        WizardStep::Items => " New Quote - Step 2/3: Items ",
        WizardStep::Review => " New Quote - Step 3/3: Review ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match step {
        WizardStep::ClientInfo => render_client_step(frame, app, inner),
        WizardStep::Items => render_items_step(frame, app, inner),
        WizardStep::Review => render_review_step(frame, app, inner),
    }
}

fn render_client_step(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1),
            Constraint::Length(1), // Tax ID
            Constraint::Length(1),
            Constraint::Length(1), // Description
            Constraint::Length(1),
            Constraint::Length(1), // Execution
            Constraint::Length(1),
            Constraint::Length(1), // Payment
            Constraint::Length(1),
            Constraint::Length(1), // Validity
            Constraint::Min(1),
            Constraint::Length(1), // Error / hints
        ])
        .split(area);

    let form = &app.wizard_form;
    frame.render_widget(form.name_input.clone(), chunks[0]);
    frame.render_widget(form.tax_id_input.clone(), chunks[2]);
    frame.render_widget(form.description_input.clone(), chunks[4]);
    frame.render_widget(form.execution_input.clone(), chunks[6]);
    frame.render_widget(form.payment_input.clone(), chunks[8]);
    frame.render_widget(form.validity_input.clone(), chunks[10]);

    render_footer(
        frame,
        app,
        chunks[12],
        "Tab:Next field  Ctrl+n:Next step  Esc:Cancel",
    );
}

fn render_items_step(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Items table
            Constraint::Length(1), // Inline edit
            Constraint::Length(1), // Labor
            Constraint::Length(1), // Discount
            Constraint::Length(1), // Totals
            Constraint::Length(1), // Error / hints
        ])
        .split(area);

    render_items_table(frame, app, chunks[0]);

    if let Some(field) = app.wizard_form.editing_field {
        let mut edit = app.wizard_form.edit_input.clone();
        edit.label = field.label().to_string();
        frame.render_widget(edit, chunks[1]);
    }

    frame.render_widget(app.wizard_form.labor_input.clone(), chunks[2]);
    frame.render_widget(app.wizard_form.discount_input.clone(), chunks[3]);

    let totals = app.wizard.totals();
    let totals_line = Line::from(vec![
        Span::styled("Materials: ", Style::default().fg(Color::White)),
        Span::styled(
            totals.materials_total.to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            totals.total.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(totals_line), chunks[4]);

    render_footer(
        frame,
        app,
        chunks[5],
        "a:Add  d:Remove  e:Edit  m:Material  Tab:Focus  Ctrl+n/p:Step",
    );

    if app.wizard_form.show_material_picker {
        render_material_picker(frame, app);
    }
}

fn render_items_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused =
        app.wizard_form.items_focus == ItemsFocus::Table && app.wizard_form.editing_field.is_none();
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Items ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items = &app.wizard.draft().items;
    if items.is_empty() {
        let text = Paragraph::new("No items yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let description = if item.description.is_empty() {
                "(no description)"
            } else {
                &item.description
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<30}", truncate(description, 30)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>7} {:<5}", format_quantity(item.quantity), item.unit),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>12}", item.unit_price.to_string()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>14}", item.total().to_string()),
                    Style::default().fg(Color::Green),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.wizard_form.selected_item));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_material_picker(frame: &mut Frame, app: &mut App) {
    let height = (app.catalog.len() as u16 + 2).min(12);
    let area = centered_rect_fixed(50, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Select Material ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let rows: Vec<ListItem> = app
        .catalog
        .all()
        .iter()
        .map(|material| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<9}", material.code),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("{:<26}", truncate(&material.description, 26)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>10}", material.price.to_string()),
                    Style::default().fg(Color::Green),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.wizard_form.picker_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_review_step(frame: &mut Frame, app: &mut App, area: Rect) {
    let draft = app.wizard.draft();
    let totals = app.wizard.totals();

    let mut lines = vec![
        detail_line("Client", &draft.client_name),
        detail_line("Tax ID", &draft.client_tax_id),
        detail_line("Service", &draft.service_description),
        detail_line("Execution", &draft.execution_time),
        detail_line("Payment", &draft.payment_terms),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Items ({})", draft.items.len()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
    ];

    for item in &draft.items {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<30}", truncate(&item.description, 30)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(
                    "{:>7} {:<5} x {:>10} = {:>12}",
                    format_quantity(item.quantity),
                    item.unit,
                    item.unit_price.to_string(),
                    item.total().to_string()
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(detail_line("Materials", &totals.materials_total.to_string()));
    lines.push(detail_line("Labor", &draft.labor_cost.to_string()));
    if !draft.discount.is_zero() {
        lines.push(detail_line("Discount", &draft.discount.to_string()));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:>12}: ", "TOTAL"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            totals.total.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    render_footer(
        frame,
        app,
        chunks[1],
        "Enter:Submit  Ctrl+p:Back  Esc:Cancel",
    );
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, hints: &str) {
    let line = if let Some(ref error) = app.wizard_form.error_message {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(Span::styled(
            hints.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>12}: ", label),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_field_cycle() {
        let mut field = ClientField::Name;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, ClientField::Name);
        assert_eq!(ClientField::Name.prev(), ClientField::Validity);
    }

    #[test]
    fn test_commit_quantity_edit() {
        let mut wizard = QuoteWizard::new();
        wizard.open();
        wizard.add_item();
        wizard.set_item_unit_price(0, Money::from_cents(63000));

        let mut form = WizardFormState::new();
        form.begin_item_edit(&wizard, ItemField::Quantity);
        form.edit_input = TextInput::new().content("2");
        form.editing_field = Some(ItemField::Quantity);
        assert!(form.commit_item_edit(&mut wizard));
        assert_eq!(wizard.draft().items[0].total().cents(), 126000);
    }

    #[test]
    fn test_commit_invalid_price_keeps_edit_open() {
        let mut wizard = QuoteWizard::new();
        wizard.open();
        wizard.add_item();

        let mut form = WizardFormState::new();
        form.begin_item_edit(&wizard, ItemField::UnitPrice);
        form.edit_input = TextInput::new().content("abc");
        assert!(!form.commit_item_edit(&mut wizard));
        assert!(form.error_message.is_some());
        assert!(form.editing_field.is_some());
    }

    #[test]
    fn test_sync_client_info_with_validity() {
        let mut wizard = QuoteWizard::new();
        wizard.open();

        let mut form = WizardFormState::new();
        form.name_input = TextInput::new().content("ABC");
        form.description_input = TextInput::new().content("Service");
        form.validity_input = TextInput::new().content("15/02/2024");
        form.sync_client_info(&mut wizard);

        assert_eq!(wizard.draft().client_name, "ABC");
        assert_eq!(
            wizard.draft().validity,
            NaiveDate::from_ymd_opt(2024, 2, 15)
        );
        assert!(form.error_message.is_none());
    }

    #[test]
    fn test_parse_optional_money() {
        assert_eq!(parse_optional_money("").unwrap(), Money::zero());
        assert_eq!(parse_optional_money("6250,00").unwrap().cents(), 625000);
        assert!(parse_optional_money("nope").is_err());
    }
}
