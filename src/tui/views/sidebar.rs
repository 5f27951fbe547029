//! Sidebar view
//!
//! Shows the application header, view switcher, and summary numbers.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::services::{dashboard, inventory};
use crate::tui::app::{ActiveView, App};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_view_switcher(frame, app, layout.view_switcher);
    render_summary(frame, app, layout.summary);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Quotedesk ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let views = [
        ("1", "Dashboard", ActiveView::Dashboard),
        ("2", "Materials", ActiveView::Materials),
        ("3", "Approvals", ActiveView::Approvals),
        ("4", "Technician", ActiveView::Technician),
    ];

    let items: Vec<ListItem> = views
        .iter()
        .map(|(key, name, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if app.active_view == *view { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*name, style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Render summary numbers
fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let stats = dashboard::stats(&app.catalog, &app.quotes);
    let inventory = inventory::summary(&app.catalog);

    let pending_color = if stats.pending_count > 0 {
        Color::Yellow
    } else {
        Color::Green
    };
    let low_stock_color = if inventory.low_stock_count > 0 {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Quotes:    ", Style::default().fg(Color::White)),
            Span::styled(
                stats.quote_count.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Pending:   ", Style::default().fg(Color::White)),
            Span::styled(
                stats.pending_count.to_string(),
                Style::default().fg(pending_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Low stock: ", Style::default().fg(Color::White)),
            Span::styled(
                inventory.low_stock_count.to_string(),
                Style::default().fg(low_stock_color),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
