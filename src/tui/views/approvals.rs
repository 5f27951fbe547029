//! Approvals view
//!
//! The manager's queue: pending quotes only, with approve ('a') and
//! reject ('r') actions on the selected quote.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::format_date;
use crate::tui::app::App;

/// Render the approvals view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Pending Approval ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let quotes = app.visible_quotes();
    if quotes.is_empty() {
        let text = Paragraph::new("No quotes awaiting a decision.")
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = quotes
        .iter()
        .map(|quote| {
            let technician = quote
                .technician
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "-".to_string());

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
                    format!("{:<18}", technician),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>14}", quote.total_value.to_string()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format_date(quote.created_at),
                    Style::default().fg(Color::Gray),
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
