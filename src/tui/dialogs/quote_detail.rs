//! Quote detail dialog
//!
//! Read-only modal showing one quote in full: client, items, totals, and
//! the recorded decision.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::format_date;
use crate::display::quote::format_quantity;
use crate::models::{Quote, QuoteNumber, QuoteStatus};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the quote detail dialog
pub fn render(frame: &mut Frame, app: &mut App, number: QuoteNumber) {
    use crate::store::QuoteRepository;

    let Some(quote) = app.quotes.get(number) else {
        return;
    };

    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", quote.number))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(detail_lines(quote))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn detail_lines(quote: &Quote) -> Vec<Line<'static>> {
    let status_color = match quote.status {
        QuoteStatus::Pending => Color::Yellow,
        QuoteStatus::Approved => Color::Green,
        QuoteStatus::Rejected => Color::Red,
    };

    let mut lines = vec![
        detail_line("Client", &quote.client.name),
        detail_line("Tax ID", &quote.client.tax_id),
    ];

    if let Some(technician) = &quote.technician {
        lines.push(detail_line(
            "Technician",
            &format!("{} ({})", technician.name, technician.company),
        ));
    }

    lines.push(detail_line("Service", &quote.description));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:>12}: ", "Status"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            quote.status.to_string(),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(reason) = &quote.rejection_reason {
        lines.push(detail_line("Reason", reason));
    }

    lines.push(detail_line("Submitted", &format_date(quote.created_at)));
    if let Some(validity) = quote.validity {
        lines.push(detail_line("Valid Until", &format_date(validity)));
    }
    if !quote.execution_time.is_empty() {
        lines.push(detail_line("Execution", &quote.execution_time));
    }
    if !quote.payment_terms.is_empty() {
        lines.push(detail_line("Payment", &quote.payment_terms));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!("Items ({})", quote.items.len()),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]));

    for item in &quote.items {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<32}", item.description.clone()),
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
    lines.push(detail_line("Materials", &quote.materials_cost.to_string()));
    lines.push(detail_line("Labor", &quote.labor_cost.to_string()));
    if !quote.discount.is_zero() {
        lines.push(detail_line("Discount", &quote.discount.to_string()));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:>12}: ", "TOTAL"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            quote.total_value.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
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
