use chrono::NaiveDate;
use regex::Regex;

use crate::models::Transaction;
use crate::workbook::{CellValue, Sheet};

/// Sheet row (0-based, header-independent) that statement exports reserve
/// for the closing balance.
pub const BALANCE_ROW: usize = 6;

/// Strip everything but digits and periods, then parse: "₹1,234.56 balance"
/// reads as 1234.56.
pub fn parse_balance_str(raw: &str) -> Option<f64> {
    let cleaned = Regex::new(r"[^0-9.]").unwrap().replace_all(raw, "");
    cleaned.parse().ok()
}

fn numeric_value(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(v) => Some(*v),
        // A date cell read numerically is its serial value
        CellValue::Date(d) => {
            let base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
            Some((*d - base).num_days() as f64)
        }
        _ => None,
    }
}

/// Read the balance from the designated sheet row: last non-absent cell,
/// numeric interpretation first, then cleaned-string parse, else 0.0.
/// A sheet without that row resolves to 0.0.
pub fn from_fixed_row(sheet: &Sheet) -> f64 {
    let Some(row) = sheet.row(BALANCE_ROW) else {
        return 0.0;
    };
    let Some(last) = row.iter().rev().find(|c| !c.is_absent()) else {
        return 0.0;
    };
    if let Some(v) = numeric_value(last) {
        return v;
    }
    match last {
        CellValue::Text(s) => parse_balance_str(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// The balance carried on the most recent transaction; 0.0 for an empty list.
pub fn from_transactions(transactions: &[Transaction]) -> f64 {
    transactions.last().map(|t| t.savings).unwrap_or(0.0)
}

/// Canonical resolution: the last transaction's carried balance wins when
/// anything was extracted; the fixed-row lookup covers the cold start.
pub fn resolve(transactions: &[Transaction], sheet: &Sheet) -> f64 {
    if transactions.is_empty() {
        from_fixed_row(sheet)
    } else {
        from_transactions(transactions)
    }
}
