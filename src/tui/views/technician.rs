//! Technician view
//!
//! The technician's quote list: every submitted quote with its status,
//! plus the entry point for the creation wizard ('n').

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::format_date;
use crate::models::QuoteStatus;
use crate::tui::app::App;

/// Render the technician view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Quote list
            Constraint::Length(1), // Hint
        ])
        .split(area);

    render_quote_list(frame, app, chunks[0]);

    let hint = Line::from(Span::styled(
        " n:New quote  Enter:Details  j/k:Select",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hint), chunks[1]);
}

fn render_quote_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" My Quotes ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let quotes = app.visible_quotes();
    if quotes.is_empty() {
        let text = Paragraph::new("No quotes yet. Press 'n' to create one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = quotes
        .iter()
        .map(|quote| {
            let status_color = match quote.status {
                QuoteStatus::Pending => Color::Yellow,
                QuoteStatus::Approved => Color::Green,
                QuoteStatus::Rejected => Color::Red,
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<9}", quote.number.to_string()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<26}", quote.client.name.clone()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>14}", quote.total_value.to_string()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:<10}", format_date(quote.created_at)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:<9}", quote.status.to_string()),
                    Style::default()
                        .fg(status_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_quote_index));
    frame.render_stateful_widget(list, area, &mut state);
}
