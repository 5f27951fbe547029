//! Material CLI commands
//!
//! Implements CLI commands for browsing the material catalog.

use clap::Subcommand;

use crate::display::material::{format_material_details, format_material_list};
use crate::error::{QuotedeskError, QuotedeskResult};
use crate::services::inventory;
use crate::store::MaterialCatalog;

/// Material subcommands
#[derive(Subcommand)]
pub enum MaterialCommands {
    /// List catalog materials
    List {
        /// Filter by code or description
        #[arg(short, long, default_value = "")]
        query: String,
        /// Only show materials at or below their minimum stock
        #[arg(short, long)]
        low_stock: bool,
    },
    /// Show material details
    Show {
        /// Material code (e.g., "MAT-001")
        code: String,
    },
}

/// Handle a material command
pub fn handle_material_command(
    catalog: &MaterialCatalog,
    cmd: MaterialCommands,
) -> QuotedeskResult<()> {
    match cmd {
        MaterialCommands::List { query, low_stock } => {
            let materials = inventory::search(catalog, &query, low_stock);
            let summary = inventory::summary(catalog);
            print!("{}", format_material_list(&materials, &summary));
        }

        MaterialCommands::Show { code } => {
            let material = catalog
                .get_by_code(&code)
                .ok_or_else(|| QuotedeskError::material_not_found(&code))?;
            print!("{}", format_material_details(material));
        }
    }

    Ok(())
}
