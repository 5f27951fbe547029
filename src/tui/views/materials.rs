//! Materials view
//!
//! Searchable material catalog with stock levels. Supports text search
//! ('/') and a low-stock filter ('f').

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::StockLevel;
use crate::services::inventory;
use crate::tui::app::App;

/// Render the materials view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Material list
            Constraint::Length(1), // Summary
        ])
        .split(area);

    render_search_bar(frame, app, chunks[0]);
    render_material_list(frame, app, chunks[1]);
    render_summary(frame, app, chunks[2]);
}

fn render_search_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.searching {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let filter_label = if app.low_stock_only {
        " Search [low stock only] "
    } else {
        " Search "
    };

    let block = Block::default()
        .title(filter_label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut input = app.search_input.clone();
    input.focused = app.searching;
    frame.render_widget(input, inner);
}

fn render_material_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Materials ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let materials = app.visible_materials();
    if materials.is_empty() {
        let text = Paragraph::new("No materials match the current filter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = materials
        .iter()
        .map(|material| {
            let level = material.stock_level();
            let level_color = match level {
                StockLevel::Low => Color::Red,
                StockLevel::Warning => Color::Yellow,
                StockLevel::Ok => Color::Green,
            };

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
                    format!("{:<6}", material.unit.clone()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>12}", material.price.to_string()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:>3}/{:<3}", material.stock, material.min_stock),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!(" {}", level),
                    Style::default().fg(level_color).add_modifier(Modifier::BOLD),
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
    state.select(Some(app.selected_material_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = inventory::summary(&app.catalog);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} materials", summary.material_count),
            Style::default().fg(Color::White),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} low on stock", summary.low_stock_count),
            Style::default().fg(if summary.low_stock_count > 0 {
                Color::Red
            } else {
                Color::Green
            }),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("stock value {}", summary.total_stock_value),
            Style::default().fg(Color::Green),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
