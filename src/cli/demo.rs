use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::{chart, invest, transactions};
use crate::error::Result;
use crate::session::Session;
use crate::settings::load_settings;
use crate::workbook::{CellValue, Sheet};

struct DemoRow {
    date: (i32, u32, u32),
    description: &'static str,
    amount: f64,
    category: &'static str,
    savings: f64,
}

/// One month of sample statement rows, in the statement column layout.
const SAMPLE: &[DemoRow] = &[
    DemoRow { date: (2024, 1, 1), description: "Salary Credit", amount: 52000.00, category: "Income", savings: 61200.00 },
    DemoRow { date: (2024, 1, 3), description: "Big Bazaar Groceries", amount: -2340.50, category: "Groceries", savings: 58859.50 },
    DemoRow { date: (2024, 1, 5), description: "Cafe Coffee Day", amount: -320.00, category: "Food", savings: 58539.50 },
    DemoRow { date: (2024, 1, 8), description: "Rent Transfer", amount: -18000.00, category: "Rent", savings: 40539.50 },
    DemoRow { date: (2024, 1, 11), description: "Uber Trips", amount: -640.00, category: "Travel", savings: 39899.50 },
    DemoRow { date: (2024, 1, 14), description: "Swiggy Order", amount: -450.00, category: "Food", savings: 39449.50 },
    DemoRow { date: (2024, 1, 18), description: "Electricity Bill", amount: -1260.00, category: "Utilities", savings: 38189.50 },
    DemoRow { date: (2024, 1, 22), description: "Freelance Payment", amount: 8000.00, category: "Income", savings: 46189.50 },
    DemoRow { date: (2024, 1, 27), description: "Reliance Digital", amount: -3499.00, category: "Shopping", savings: 42690.50 },
];

fn sample_sheet() -> Sheet {
    let mut rows = vec![vec![
        CellValue::Text("Date".to_string()),
        CellValue::Absent,
        CellValue::Text("Description".to_string()),
        CellValue::Absent,
        CellValue::Text("Amount".to_string()),
        CellValue::Text("Category".to_string()),
        CellValue::Text("Savings".to_string()),
    ]];
    for row in SAMPLE {
        let (y, m, d) = row.date;
        rows.push(vec![
            CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            CellValue::Absent,
            CellValue::Text(row.description.to_string()),
            CellValue::Absent,
            CellValue::Number(row.amount),
            CellValue::Text(row.category.to_string()),
            CellValue::Number(row.savings),
        ]);
    }
    Sheet::from_rows(rows)
}

/// Run the whole pipeline on built-in sample data and show every view.
pub fn run() -> Result<()> {
    let settings = load_settings();
    let session = Session::new(settings.budget());
    session.import_sheet(&sample_sheet(), "demo");
    let Some(snapshot) = session.current() else {
        return Ok(());
    };

    println!("{}", "Sample statement loaded.".bold());
    println!();
    transactions::render(&snapshot.transactions);
    println!();
    chart::render(&snapshot.totals);
    println!();
    invest::render(snapshot.balance, None)?;
    println!("Import a real statement with `spendsense import <file>`.");
    Ok(())
}
