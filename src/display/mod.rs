//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and status indicators.

use chrono::NaiveDate;

pub mod material;
pub mod quote;

pub use material::{format_material_details, format_material_list};
pub use quote::{format_quote_details, format_quote_list};

/// Format a date as dd/mm/yyyy
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(date), "15/01/2024");
    }
}
