use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_snapshot;
use crate::error::{Result, SpendError};
use crate::fmt::money;
use crate::investments::{self, InvestmentOption};

fn render_category(category: &str, options: &[InvestmentOption], balance: f64) {
    let mut table = Table::new();
    table.set_header(vec!["Option", "Description", "Return", "Value in 1y"]);
    for option in options {
        table.add_row(vec![
            Cell::new(option.name),
            Cell::new(option.description),
            Cell::new(format!("{:.1}%", option.expected_return)),
            Cell::new(money(investments::projected_value(balance, option))),
        ]);
    }
    println!("{}\n{table}\n", category.bold());
}

pub fn render(balance: f64, category: Option<&str>) -> Result<()> {
    let header = if balance >= 0.0 {
        money(balance).green().bold()
    } else {
        money(balance).red().bold()
    };
    println!("Available for investment: {header}\n");
    if balance <= 0.0 {
        println!(
            "{}",
            "Nothing to invest right now; projections assume a positive balance.".yellow()
        );
    }

    match category {
        Some(name) => {
            let options = investments::options_for(name).ok_or_else(|| {
                let known: Vec<&str> = investments::category_names().collect();
                SpendError::Other(format!(
                    "unknown investment category '{name}' (expected one of: {})",
                    known.join(", ")
                ))
            })?;
            render_category(name, options, balance);
        }
        None => {
            for (name, options) in investments::CATALOG {
                render_category(name, options, balance);
            }
        }
    }
    Ok(())
}

pub fn run(file: &str, category: Option<&str>) -> Result<()> {
    let Some(snapshot) = load_snapshot(file)? else {
        return Ok(());
    };
    if snapshot.transactions.is_empty() {
        println!("No transaction data available in that file.");
    }
    render(snapshot.balance, category)
}
