use std::path::Path;

use crate::cli::load_snapshot;
use crate::error::Result;

fn default_output(file: &str, totals: bool) -> String {
    let stem = Path::new(file)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "spendsense".to_string());
    if totals {
        format!("{stem}-categories.csv")
    } else {
        format!("{stem}-transactions.csv")
    }
}

pub fn run(file: &str, output: Option<String>, totals: bool) -> Result<()> {
    let Some(snapshot) = load_snapshot(file)? else {
        return Ok(());
    };
    let out = output.unwrap_or_else(|| default_output(file, totals));

    let mut writer = csv::Writer::from_path(&out)?;
    let rows = if totals {
        writer.write_record(["category", "total"])?;
        for (label, total) in snapshot.totals.iter() {
            writer.write_record([label, &format!("{total:.2}")])?;
        }
        snapshot.totals.len()
    } else {
        writer.write_record(["date", "description", "amount", "savings"])?;
        for t in &snapshot.transactions {
            writer.write_record([
                t.date.as_str(),
                t.description.as_str(),
                &format!("{:.2}", t.amount),
                &format!("{:.2}", t.savings),
            ])?;
        }
        snapshot.transactions.len()
    };
    writer.flush()?;

    println!("{rows} row(s) written to {out}");
    Ok(())
}
