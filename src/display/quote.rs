//! Quote display formatting
//!
//! Formats submitted quotes for terminal output in table and detail views.

use crate::display::format_date;
use crate::models::Quote;

/// Format a list of quotes as a table, newest first
pub fn format_quote_list(quotes: &[&Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes found.".to_string();
    }

    // Calculate column widths
    let client_width = quotes
        .iter()
        .map(|q| q.client.name.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<client_width$}  {:>14}  {:<10}  {}\n",
        "Number",
        "Client",
        "Total",
        "Date",
        "Status",
        client_width = client_width,
    ));

    output.push_str(&format!(
        "{:-<8}  {:-<client_width$}  {:->14}  {:-<10}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        client_width = client_width,
    ));

    for quote in quotes {
        output.push_str(&format!(
            "{:<8}  {:<client_width$}  {:>14}  {:<10}  {}\n",
            quote.number.to_string(),
            quote.client.name,
            quote.total_value.to_string(),
            format_date(quote.created_at),
            quote.status,
            client_width = client_width,
        ));
    }

    output
}

/// Format a single quote's details
pub fn format_quote_details(quote: &Quote) -> String {
    let mut output = String::new();

    output.push_str(&format!("Quote: {}\n", quote.number));
    output.push_str(&format!("  Client:       {}\n", quote.client.name));
    if !quote.client.tax_id.is_empty() {
        output.push_str(&format!("  Tax ID:       {}\n", quote.client.tax_id));
    }
    if let Some(technician) = &quote.technician {
        output.push_str(&format!(
            "  Technician:   {} ({})\n",
            technician.name, technician.company
        ));
    }
    output.push_str(&format!("  Description:  {}\n", quote.description));
    output.push_str(&format!("  Status:       {}\n", quote.status));
    if let Some(reason) = &quote.rejection_reason {
        output.push_str(&format!("  Reason:       {}\n", reason));
    }
    output.push('\n');
    output.push_str(&format!(
        "  Submitted:    {}\n",
        format_date(quote.created_at)
    ));
    if let Some(validity) = quote.validity {
        output.push_str(&format!("  Valid Until:  {}\n", format_date(validity)));
    }
    if !quote.execution_time.is_empty() {
        output.push_str(&format!("  Execution:    {}\n", quote.execution_time));
    }
    if !quote.payment_terms.is_empty() {
        output.push_str(&format!("  Payment:      {}\n", quote.payment_terms));
    }

    if !quote.items.is_empty() {
        output.push('\n');
        output.push_str("  Items:\n");
        for item in &quote.items {
            output.push_str(&format!(
                "    {:<40}  {:>8} {:<5}  {:>12}  {:>14}\n",
                item.description,
                format_quantity(item.quantity),
                item.unit,
                item.unit_price.to_string(),
                item.total().to_string(),
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!("  Materials:    {}\n", quote.materials_cost));
    output.push_str(&format!("  Labor:        {}\n", quote.labor_cost));
    if !quote.discount.is_zero() {
        output.push_str(&format!("  Discount:     {}\n", quote.discount));
    }
    output.push_str(&format!("  TOTAL:        {}\n", quote.total_value));

    output
}

/// Format a quantity, dropping the fraction when it is whole
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{:.2}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed, QuoteRepository};

    #[test]
    fn test_format_quote_list() {
        let store = seed::quote_store();
        let quotes: Vec<&Quote> = store.list().iter().collect();

        let output = format_quote_list(&quotes);
        assert!(output.contains("QTE-001"));
        assert!(output.contains("QTE-003"));
        assert!(output.contains("ABC Enterprises Ltd"));
        assert!(output.contains("Pending"));
        assert!(output.contains("15/01/2024"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_quote_list(&[]);
        assert!(output.contains("No quotes found"));
    }

    #[test]
    fn test_format_quote_details() {
        let store = seed::quote_store();
        let quote = &store.list()[2]; // QTE-001
        let output = format_quote_details(quote);

        assert!(output.contains("Quote: QTE-001"));
        assert!(output.contains("Joao Silva"));
        assert!(output.contains("Cat6 Network Cable"));
        assert!(output.contains("TOTAL:"));
        assert!(output.contains("R$ 12.235,00"));
    }

    #[test]
    fn test_rejected_quote_shows_reason() {
        let store = seed::quote_store();
        let quote = &store.list()[0]; // QTE-003
        let output = format_quote_details(quote);
        assert!(output.contains("Rejected"));
        assert!(output.contains("Cost above the approved budget"));
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(100.0), "100");
        assert_eq!(format_quantity(2.5), "2.50");
    }
}
