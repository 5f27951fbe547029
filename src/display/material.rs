//! Material display formatting
//!
//! Formats catalog materials for terminal output in table and detail views.

use crate::models::Material;
use crate::services::inventory::InventorySummary;

/// Format a list of materials as a table
pub fn format_material_list(materials: &[&Material], summary: &InventorySummary) -> String {
    if materials.is_empty() {
        return "No materials found.".to_string();
    }

    // Calculate column widths
    let code_width = materials
        .iter()
        .map(|m| m.code.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let desc_width = materials
        .iter()
        .map(|m| m.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<code_width$}  {:<desc_width$}  {:>6}  {:>12}  {:>7}  {}\n",
        "Code",
        "Description",
        "Unit",
        "Price",
        "Stock",
        "Level",
        code_width = code_width,
        desc_width = desc_width,
    ));

    output.push_str(&format!(
        "{:-<code_width$}  {:-<desc_width$}  {:->6}  {:->12}  {:->7}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        code_width = code_width,
        desc_width = desc_width,
    ));

    for material in materials {
        output.push_str(&format!(
            "{:<code_width$}  {:<desc_width$}  {:>6}  {:>12}  {:>4}/{:<2}  {}\n",
            material.code,
            material.description,
            material.unit,
            material.price.to_string(),
            material.stock,
            material.min_stock,
            material.stock_level(),
            code_width = code_width,
            desc_width = desc_width,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "{} materials, {} low on stock, stock value {}\n",
        summary.material_count, summary.low_stock_count, summary.total_stock_value
    ));

    output
}

/// Format a single material's details
pub fn format_material_details(material: &Material) -> String {
    let mut output = String::new();

    output.push_str(&format!("Material: {}\n", material.code));
    output.push_str(&format!("  Description:  {}\n", material.description));
    output.push_str(&format!("  Unit:         {}\n", material.unit));
    output.push_str(&format!("  NCM:          {}\n", material.ncm));
    output.push_str(&format!(
        "  Active:       {}\n",
        if material.active { "Yes" } else { "No" }
    ));
    output.push('\n');
    output.push_str(&format!("  Cost:         {}\n", material.cost));
    output.push_str(&format!("  Price:        {}\n", material.price));
    output.push('\n');
    output.push_str(&format!(
        "  Stock:        {} (minimum {})\n",
        material.stock, material.min_stock
    ));
    output.push_str(&format!("  Level:        {}\n", material.stock_level()));
    output.push_str(&format!("  Stock Value:  {}\n", material.stock_value()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::inventory;
    use crate::store::seed;

    #[test]
    fn test_format_material_list() {
        let catalog = seed::material_catalog();
        let materials: Vec<&Material> = catalog.all().iter().collect();
        let summary = inventory::summary(&catalog);

        let output = format_material_list(&materials, &summary);
        assert!(output.contains("MAT-001"));
        assert!(output.contains("Cat6 Network Cable"));
        assert!(output.contains("R$ 630,00"));
        assert!(output.contains("4 materials"));
        assert!(output.contains("2 low on stock"));
    }

    #[test]
    fn test_format_empty_list() {
        let catalog = seed::material_catalog();
        let summary = inventory::summary(&catalog);
        let output = format_material_list(&[], &summary);
        assert!(output.contains("No materials found"));
    }

    #[test]
    fn test_format_material_details() {
        let catalog = seed::material_catalog();
        let material = catalog.get_by_code("MAT-003").unwrap();
        let output = format_material_details(material);

        assert!(output.contains("24-port Gigabit Switch"));
        assert!(output.contains("Low"));
        assert!(output.contains("R$ 1.250,00"));
    }
}
