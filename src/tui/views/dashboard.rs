//! Dashboard view
//!
//! Overview screen: headline stat cards, the most recent quotes, and
//! low-stock restock alerts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::format_date;
use crate::models::QuoteStatus;
use crate::services::dashboard;
use crate::tui::app::App;

const RECENT_QUOTE_LIMIT: usize = 5;

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stat cards
            Constraint::Min(5),    // Recent quotes
            Constraint::Length(6), // Low stock alerts
        ])
        .split(area);

    render_stat_cards(frame, app, chunks[0]);
    render_recent_quotes(frame, app, chunks[1]);
    render_low_stock(frame, app, chunks[2]);
}

fn render_stat_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let stats = dashboard::stats(&app.catalog, &app.quotes);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(23),
            Constraint::Percentage(23),
            Constraint::Percentage(24),
        ])
        .split(area);

    let approval_rate = match stats.approval_rate {
        Some(rate) => format!("{:.0}%", rate * 100.0),
        None => "-".to_string(),
    };

    render_card(
        frame,
        cards[0],
        "Stock Value",
        &stats.stock_value.to_string(),
        Color::Green,
    );
    render_card(
        frame,
        cards[1],
        "Quotes",
        &stats.quote_count.to_string(),
        Color::Cyan,
    );
    render_card(
        frame,
        cards[2],
        "Pending",
        &stats.pending_count.to_string(),
        if stats.pending_count > 0 {
            Color::Yellow
        } else {
            Color::Green
        },
    );
    render_card(frame, cards[3], "Approval Rate", &approval_rate, Color::Cyan);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(block);

    frame.render_widget(paragraph, area);
}

fn render_recent_quotes(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Recent Quotes ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let recent = dashboard::recent_quotes(&app.quotes, RECENT_QUOTE_LIMIT);
    if recent.is_empty() {
        let text = Paragraph::new("No quotes yet. Press 'n' to create one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = recent
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
                Span::styled(quote.status.to_string(), Style::default().fg(status_color)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn render_low_stock(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Low Stock Alerts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let alerts = dashboard::low_stock_alerts(&app.catalog);
    if alerts.is_empty() {
        let text = Paragraph::new("All materials above minimum stock.")
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = alerts
        .iter()
        .map(|material| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<9}", material.code.clone()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("{:<30}", material.description.clone()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{}/{} in stock", material.stock, material.min_stock),
                    Style::default().fg(Color::Red),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
