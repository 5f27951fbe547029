use anyhow::Result;
use clap::{Parser, Subcommand};

use quotedesk::cli::{handle_material_command, handle_quote_command};
use quotedesk::store::seed;
use quotedesk::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "quotedesk",
    version,
    about = "Terminal console for quotes, inventory, and approvals",
    long_about = "Quotedesk is a terminal console for field-service companies: \
                  browse the material catalog, build quotes with a step-by-step \
                  wizard, and work the approval queue. All data is in-memory \
                  demo data."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Material catalog commands
    #[command(subcommand, alias = "mat")]
    Material(quotedesk::cli::MaterialCommands),

    /// Quote commands
    #[command(subcommand)]
    Quote(quotedesk::cli::QuoteCommands),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Seed the in-memory stores
    let catalog = seed::material_catalog();
    let mut quotes = seed::quote_store();

    match cli.command {
        Some(Commands::Tui) => {
            run_tui(catalog, quotes)?;
        }
        Some(Commands::Material(cmd)) => {
            handle_material_command(&catalog, cmd)?;
        }
        Some(Commands::Quote(cmd)) => {
            handle_quote_command(&mut quotes, cmd)?;
        }
        None => {
            println!("Quotedesk - Terminal console for quotes and approvals");
            println!();
            println!("Run 'quotedesk --help' for usage information.");
            println!("Run 'quotedesk tui' to launch the interactive console.");
        }
    }

    Ok(())
}
