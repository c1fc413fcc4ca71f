use colored::Colorize;

use crate::cli::load_snapshot;
use crate::error::Result;
use crate::fmt::money;
use crate::importer::DEFAULT_CATEGORY;

pub fn run(file: &str) -> Result<()> {
    let Some(snapshot) = load_snapshot(file)? else {
        return Ok(());
    };

    println!(
        "{} transactions across {} categories",
        snapshot.transactions.len(),
        snapshot.totals.len()
    );
    if snapshot.report.rows_skipped > 0 {
        println!(
            "{}",
            format!("{} blank row(s) skipped", snapshot.report.rows_skipped).yellow()
        );
    }
    for warning in snapshot.report.drift_warnings() {
        println!("{}", warning.yellow());
    }

    if let Some(misc) = snapshot.totals.get(DEFAULT_CATEGORY) {
        println!("Uncategorized ('{DEFAULT_CATEGORY}'): {}", money(misc));
    }

    println!("Balance: {}", money(snapshot.balance));
    if !snapshot.fingerprint.is_empty() {
        println!("Source fingerprint: {}", &snapshot.fingerprint[..12]);
    }

    if snapshot.transactions.is_empty() {
        println!("No data rows were usable. The views will be empty for this file.");
    }
    Ok(())
}
