pub mod chart;
pub mod demo;
pub mod export;
pub mod import;
pub mod init;
pub mod invest;
pub mod profile;
pub mod status;
pub mod transactions;

use std::path::Path;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::error::Result;
use crate::session::{Session, Snapshot};
use crate::settings::load_settings;

/// Import the workbook behind a view command. An unreadable source prints
/// the generic notice and comes back as `None`, never as a failure.
pub(crate) fn load_snapshot(file: &str) -> Result<Option<Snapshot>> {
    let settings = load_settings();
    let session = Session::new(settings.budget());
    let snapshot = session.import(Path::new(file))?;
    if snapshot.report.source_error.is_some() {
        println!("{}", "Could not process that file.".red());
        return Ok(None);
    }
    Ok(Some(snapshot))
}

#[derive(Parser)]
#[command(
    name = "spendsense",
    about = "Personal expense tracking from bank statement spreadsheets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up spendsense: choose a data directory and save settings.
    Init {
        /// Path for spendsense data (default: ~/Documents/spendsense)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Import a statement workbook and summarize what was derived from it.
    Import {
        /// Path to the workbook (.xlsx, .xls, .ods)
        file: String,
    },
    /// Show the transaction register from a statement workbook.
    Transactions {
        /// Path to the workbook
        file: String,
    },
    /// Show the spending breakdown by category.
    Chart {
        /// Path to the workbook
        file: String,
    },
    /// Show the current balance and investment suggestions scaled to it.
    Invest {
        /// Path to the workbook
        file: String,
        /// Show options for a single catalog category
        #[arg(long)]
        category: Option<String>,
    },
    /// Export extracted transactions (or category totals) to CSV.
    Export {
        /// Path to the workbook
        file: String,
        /// Output CSV path (default: derived from the input name)
        #[arg(long)]
        output: Option<String>,
        /// Export category totals instead of transactions
        #[arg(long)]
        totals: bool,
    },
    /// Manage stored user profiles.
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Walk through the views with built-in sample data.
    Demo,
    /// Show settings and stored profile counts.
    Status,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create or overwrite a profile.
    Save {
        /// Phone number that keys the profile
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Picture location (file path or URL)
        #[arg(long)]
        picture: Option<String>,
    },
    /// Show a stored profile.
    Show {
        /// Phone number (default: the active user from settings)
        #[arg(long)]
        mobile: Option<String>,
    },
    /// Update fields of an existing profile.
    Update {
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        picture: Option<String>,
    },
    /// Delete a stored profile.
    Delete {
        #[arg(long)]
        mobile: String,
    },
}
