use colored::Colorize;

use crate::cli::load_snapshot;
use crate::error::Result;
use crate::fmt::money;
use crate::models::CategoryTotals;

const BAR_WIDTH: usize = 30;

/// ANSI bar chart of the category breakdown, in first-appearance order.
pub fn render(totals: &CategoryTotals) {
    if totals.is_empty() {
        println!("No category data loaded.");
        return;
    }

    let max = totals.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max);
    let total_abs: f64 = totals.iter().map(|(_, v)| v.abs()).sum();
    let label_width = totals
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);

    println!("Spending by category");
    for (label, amount) in totals.iter() {
        let len = if max > 0.0 {
            ((amount.abs() / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(len.max(1));
        let bar = if amount < 0.0 {
            bar.red().to_string()
        } else {
            bar.green().to_string()
        };
        let share = if total_abs > 0.0 {
            amount.abs() / total_abs * 100.0
        } else {
            0.0
        };
        println!(
            "{:<width$}  {} {} ({:.1}%)",
            label,
            bar,
            money(amount),
            share,
            width = label_width
        );
    }
}

pub fn run(file: &str) -> Result<()> {
    let Some(snapshot) = load_snapshot(file)? else {
        return Ok(());
    };
    render(&snapshot.totals);
    Ok(())
}
