//! Quote rejection dialog
//!
//! Prompts for the mandatory rejection reason before a quote is rejected.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::QuoteNumber;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the rejection dialog
#[derive(Debug, Clone)]
pub struct RejectFormState {
    /// Reason input
    pub reason_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for RejectFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RejectFormState {
    /// Create a fresh form state
    pub fn new() -> Self {
        let mut reason_input = TextInput::new()
            .label("Reason")
            .placeholder("Why is this quote being rejected?");
        reason_input.focused = true;
        Self {
            reason_input,
            error_message: None,
        }
    }
}

/// Render the rejection dialog
pub fn render(frame: &mut Frame, app: &mut App, number: QuoteNumber) {
    let area = centered_rect_fixed(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Reject {} ", number))
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(app.reject_form.reason_input.clone(), chunks[1]);

    let footer = if let Some(ref error) = app.reject_form.error_message {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(Span::styled(
            "Enter:Reject  Esc:Cancel",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(footer), chunks[3]);
}
