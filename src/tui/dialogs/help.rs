//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1-4", "Switch view"),
        key_line("j/k", "Move selection up/down"),
        key_line("Enter", "Open quote details"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::Dashboard => {
            lines.push(section("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("n", "Start a new quote"));
        }
        ActiveView::Materials => {
            lines.push(section("Materials"));
            lines.push(Line::from(""));
            lines.push(key_line("/", "Search by code or description"));
            lines.push(key_line("f", "Toggle low-stock filter"));
            lines.push(key_line("Esc", "Clear search"));
        }
        ActiveView::Approvals => {
            lines.push(section("Approvals"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Approve selected quote"));
            lines.push(key_line("r", "Reject selected quote (reason required)"));
        }
        ActiveView::Technician => {
            lines.push(section("Technician"));
            lines.push(Line::from(""));
            lines.push(key_line("n", "Start a new quote"));
            lines.push(Line::from(""));
            lines.push(section("Inside the wizard"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("Ctrl+n", "Next step"));
            lines.push(key_line("Ctrl+p", "Previous step"));
            lines.push(key_line("a/d", "Add/remove item"));
            lines.push(key_line("e", "Edit item field"));
            lines.push(key_line("m", "Pick a catalog material"));
            lines.push(key_line("Enter", "Submit (on review step)"));
            lines.push(key_line("Esc", "Cancel and discard draft"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
