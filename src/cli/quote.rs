//! Quote CLI commands
//!
//! Implements CLI commands for listing quotes and working the approval
//! queue from the command line.

use clap::Subcommand;

use crate::display::quote::{format_quote_details, format_quote_list};
use crate::error::{QuotedeskError, QuotedeskResult};
use crate::models::{Quote, QuoteNumber, QuoteStatus};
use crate::services::approval;
use crate::store::QuoteRepository;

/// Quote subcommands
#[derive(Subcommand)]
pub enum QuoteCommands {
    /// List quotes, newest first
    List {
        /// Filter by status (pending, approved, rejected)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show quote details
    Show {
        /// Quote number (e.g., "QTE-001" or "1")
        number: String,
    },
    /// Approve a quote
    Approve {
        /// Quote number
        number: String,
    },
    /// Reject a quote
    Reject {
        /// Quote number
        number: String,
        /// Rejection reason (required)
        #[arg(short, long)]
        reason: String,
    },
}

fn parse_number(s: &str) -> QuotedeskResult<QuoteNumber> {
    s.parse()
        .map_err(|_| QuotedeskError::Validation(format!("Invalid quote number: '{}'", s)))
}

fn parse_status(s: &str) -> QuotedeskResult<QuoteStatus> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(QuoteStatus::Pending),
        "approved" => Ok(QuoteStatus::Approved),
        "rejected" => Ok(QuoteStatus::Rejected),
        _ => Err(QuotedeskError::Validation(format!(
            "Invalid status: '{}'. Valid statuses: pending, approved, rejected",
            s
        ))),
    }
}

/// Handle a quote command
pub fn handle_quote_command(
    repo: &mut dyn QuoteRepository,
    cmd: QuoteCommands,
) -> QuotedeskResult<()> {
    match cmd {
        QuoteCommands::List { status } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let quotes: Vec<&Quote> = repo
                .list()
                .iter()
                .filter(|q| status.map_or(true, |s| q.status == s))
                .collect();
            print!("{}", format_quote_list(&quotes));
        }

        QuoteCommands::Show { number } => {
            let number = parse_number(&number)?;
            let quote = repo
                .get(number)
                .ok_or_else(|| QuotedeskError::quote_not_found(number.to_string()))?;
            print!("{}", format_quote_details(quote));
        }

        QuoteCommands::Approve { number } => {
            let number = parse_number(&number)?;
            approval::approve(repo, number)?;
            println!("Approved {}", number);
        }

        QuoteCommands::Reject { number, reason } => {
            let number = parse_number(&number)?;
            approval::reject(repo, number, &reason)?;
            println!("Rejected {}", number);
        }
    }

    Ok(())
}
