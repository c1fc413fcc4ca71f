use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_snapshot;
use crate::error::Result;
use crate::fmt::money;
use crate::models::Transaction;

pub fn render(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions loaded.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount", "Savings"]);
    for t in transactions {
        let amount = if t.amount < 0.0 {
            money(t.amount).red().to_string()
        } else {
            money(t.amount).green().to_string()
        };
        table.add_row(vec![
            Cell::new(&t.date),
            Cell::new(&t.description),
            Cell::new(amount),
            Cell::new(money(t.savings)),
        ]);
    }
    println!("Transactions\n{table}");
}

pub fn run(file: &str) -> Result<()> {
    let Some(snapshot) = load_snapshot(file)? else {
        return Ok(());
    };
    render(&snapshot.transactions);
    Ok(())
}
