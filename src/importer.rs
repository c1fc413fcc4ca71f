use chrono::{Local, NaiveDate};

use crate::models::{CategoryTotals, Transaction};
use crate::workbook::{cell, CellValue, Sheet};

// ---------------------------------------------------------------------------
// Statement schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind {
    Date,
    Text,
    Number,
}

impl ColumnKind {
    fn label(self) -> &'static str {
        match self {
            ColumnKind::Date => "date",
            ColumnKind::Text => "text",
            ColumnKind::Number => "number",
        }
    }
}

/// A named column of the statement layout. The indices are the format's
/// contract: bank exports carry no declared schema, so drift is detected by
/// counting how often each column fell back to its default.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub index: usize,
    pub kind: ColumnKind,
}

pub const COL_DATE: ColumnSpec = ColumnSpec { name: "date", index: 0, kind: ColumnKind::Date };
pub const COL_DESCRIPTION: ColumnSpec =
    ColumnSpec { name: "description", index: 2, kind: ColumnKind::Text };
pub const COL_AMOUNT: ColumnSpec =
    ColumnSpec { name: "amount", index: 4, kind: ColumnKind::Number };
pub const COL_CATEGORY: ColumnSpec =
    ColumnSpec { name: "category", index: 5, kind: ColumnKind::Text };
pub const COL_SAVINGS: ColumnSpec =
    ColumnSpec { name: "savings", index: 6, kind: ColumnKind::Number };

pub const STATEMENT_COLUMNS: &[ColumnSpec] =
    &[COL_DATE, COL_DESCRIPTION, COL_AMOUNT, COL_CATEGORY, COL_SAVINGS];

pub const DEFAULT_DESCRIPTION: &str = "Unknown";
pub const DEFAULT_CATEGORY: &str = "Others";

// ---------------------------------------------------------------------------
// Import report
// ---------------------------------------------------------------------------

/// Per-import diagnostics: how many data rows were seen, how many were
/// skipped outright, and how often each schema column fell back to its
/// default. A column that defaulted on every row is format drift.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub rows_total: usize,
    pub rows_skipped: usize,
    pub defaulted: Vec<(&'static str, usize)>,
    pub source_error: Option<String>,
}

impl ImportReport {
    fn new() -> Self {
        Self {
            defaulted: STATEMENT_COLUMNS.iter().map(|c| (c.name, 0)).collect(),
            ..Self::default()
        }
    }

    pub fn with_source_error(message: String) -> Self {
        Self {
            source_error: Some(message),
            ..Self::new()
        }
    }

    fn count_default(&mut self, column: &ColumnSpec) {
        if let Some((_, n)) = self.defaulted.iter_mut().find(|(name, _)| *name == column.name) {
            *n += 1;
        }
    }

    pub fn defaulted_for(&self, column_name: &str) -> usize {
        self.defaulted
            .iter()
            .find(|(name, _)| *name == column_name)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Columns that fell back on every decoded row: the statement layout
    /// probably no longer matches the schema.
    pub fn drift_warnings(&self) -> Vec<String> {
        let decoded = self.rows_total - self.rows_skipped;
        if decoded == 0 {
            return Vec::new();
        }
        STATEMENT_COLUMNS
            .iter()
            .filter(|c| self.defaulted_for(c.name) == decoded)
            .map(|c| {
                format!(
                    "column '{}' (index {}, {}) fell back to its default on every row; check the statement layout",
                    c.name,
                    c.index,
                    c.kind.label()
                )
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Unified extraction pass
// ---------------------------------------------------------------------------

pub struct Extraction {
    pub transactions: Vec<Transaction>,
    pub totals: CategoryTotals,
    pub report: ImportReport,
}

fn text_or<'a>(
    row: &'a [CellValue],
    column: &ColumnSpec,
    default: &'a str,
    report: &mut ImportReport,
) -> &'a str {
    match cell(row, column.index) {
        CellValue::Text(s) => s,
        _ => {
            report.count_default(column);
            default
        }
    }
}

fn number_or(row: &[CellValue], column: &ColumnSpec, report: &mut ImportReport) -> f64 {
    match cell(row, column.index) {
        CellValue::Number(v) => *v,
        _ => {
            report.count_default(column);
            0.0
        }
    }
}

fn date_or(
    row: &[CellValue],
    column: &ColumnSpec,
    today: NaiveDate,
    report: &mut ImportReport,
) -> String {
    let parsed = match cell(row, column.index) {
        CellValue::Date(d) => Some(*d),
        // A bare serial number in the date column still reads as a date
        CellValue::Number(serial) => Some(crate::workbook::excel_serial_to_date(*serial)),
        _ => None,
    };
    match parsed {
        Some(d) => d.format("%m/%d/%Y").to_string(),
        None => {
            report.count_default(column);
            today.format("%m/%d/%Y").to_string()
        }
    }
}

/// Decode every data row of the sheet in a single pass, producing the
/// ordered transaction list and the category totals together.
///
/// Row 0 is the header and is skipped. Rows with no cell at all in the
/// schema columns are skipped and counted; everything else decodes with
/// per-cell defaults, so one malformed row never blocks the rest of the
/// statement. An empty result is a valid outcome, not an error.
pub fn extract(sheet: &Sheet) -> Extraction {
    extract_at(sheet, Local::now().date_naive())
}

pub fn extract_at(sheet: &Sheet, today: NaiveDate) -> Extraction {
    let mut transactions = Vec::new();
    let mut totals = CategoryTotals::new();
    let mut report = ImportReport::new();

    for row in sheet.rows().iter().skip(1) {
        report.rows_total += 1;

        let blank = STATEMENT_COLUMNS
            .iter()
            .all(|c| cell(row, c.index).is_absent());
        if blank {
            report.rows_skipped += 1;
            continue;
        }

        let description = text_or(row, &COL_DESCRIPTION, DEFAULT_DESCRIPTION, &mut report);
        let amount = number_or(row, &COL_AMOUNT, &mut report);
        let savings = number_or(row, &COL_SAVINGS, &mut report);
        let date = date_or(row, &COL_DATE, today, &mut report);
        transactions.push(Transaction {
            description: description.to_string(),
            amount,
            date,
            savings,
        });

        let category = text_or(row, &COL_CATEGORY, DEFAULT_CATEGORY, &mut report).to_string();
        totals.add(&category, amount);
    }

    Extraction {
        transactions,
        totals,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::CellValue::{Absent, Date, Number, Text};

    fn header() -> Vec<CellValue> {
        vec![
            Text("Date".into()),
            Absent,
            Text("Description".into()),
            Absent,
            Text("Amount".into()),
            Text("Category".into()),
            Text("Savings".into()),
        ]
    }

    fn data_row(date: (i32, u32, u32), desc: &str, amount: f64, category: &str, savings: f64) -> Vec<CellValue> {
        vec![
            Date(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap()),
            Absent,
            Text(desc.into()),
            Absent,
            Number(amount),
            Text(category.into()),
            Number(savings),
        ]
    }

    fn statement() -> Sheet {
        Sheet::from_rows(vec![
            header(),
            data_row((2024, 1, 5), "Coffee", -4.50, "Food", 995.50),
            data_row((2024, 1, 6), "Salary", 2000.00, "Income", 2995.50),
        ])
    }

    #[test]
    fn test_extracts_transactions_in_row_order() {
        let ex = extract_at(&statement(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(ex.transactions.len(), 2);
        assert_eq!(ex.transactions[0].description, "Coffee");
        assert_eq!(ex.transactions[0].amount, -4.50);
        assert_eq!(ex.transactions[0].date, "01/05/2024");
        assert_eq!(ex.transactions[0].savings, 995.50);
        assert_eq!(ex.transactions[1].description, "Salary");
        assert_eq!(ex.transactions[1].savings, 2995.50);
    }

    #[test]
    fn test_aggregates_categories_in_same_pass() {
        let ex = extract_at(&statement(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(ex.totals.get("Food"), Some(-4.50));
        assert_eq!(ex.totals.get("Income"), Some(2000.00));
        assert_eq!(ex.totals.len(), 2);
    }

    #[test]
    fn test_repeated_labels_accumulate() {
        let sheet = Sheet::from_rows(vec![
            header(),
            data_row((2024, 1, 5), "Coffee", -4.50, "Food", 0.0),
            data_row((2024, 1, 6), "Lunch", -12.00, "Food", 0.0),
        ]);
        let ex = extract_at(&sheet, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(ex.totals.get("Food"), Some(-16.50));
        assert_eq!(ex.totals.len(), 1);
    }

    #[test]
    fn test_header_only_sheet_yields_empty_results() {
        let ex = extract_at(
            &Sheet::from_rows(vec![header()]),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        );
        assert!(ex.transactions.is_empty());
        assert!(ex.totals.is_empty());
        assert_eq!(ex.report.rows_total, 0);
    }

    #[test]
    fn test_missing_cells_take_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let sheet = Sheet::from_rows(vec![header(), vec![Absent, Absent, Text("Lone".into())]]);
        let ex = extract_at(&sheet, today);
        assert_eq!(ex.transactions.len(), 1);
        let t = &ex.transactions[0];
        assert_eq!(t.description, "Lone");
        assert_eq!(t.amount, 0.0);
        assert_eq!(t.savings, 0.0);
        assert_eq!(t.date, "02/01/2024");
        assert_eq!(ex.totals.get("Others"), Some(0.0));
    }

    #[test]
    fn test_wrong_typed_cells_take_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let sheet = Sheet::from_rows(vec![
            header(),
            vec![
                Text("not a date".into()),
                Absent,
                Number(42.0),           // description is numeric
                Absent,
                Text("abc".into()),     // amount is text
                Number(7.0),            // category is numeric
                Text("n/a".into()),     // savings is text
            ],
        ]);
        let ex = extract_at(&sheet, today);
        let t = &ex.transactions[0];
        assert_eq!(t.description, "Unknown");
        assert_eq!(t.amount, 0.0);
        assert_eq!(t.savings, 0.0);
        assert_eq!(t.date, "02/01/2024");
        assert_eq!(ex.totals.get("Others"), Some(0.0));
        assert_eq!(ex.report.defaulted_for("description"), 1);
        assert_eq!(ex.report.defaulted_for("amount"), 1);
        assert_eq!(ex.report.defaulted_for("category"), 1);
        assert_eq!(ex.report.defaulted_for("savings"), 1);
        assert_eq!(ex.report.defaulted_for("date"), 1);
    }

    #[test]
    fn test_serial_number_in_date_column_reads_as_date() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let sheet = Sheet::from_rows(vec![
            header(),
            vec![Number(45667.0), Absent, Text("Payment".into()), Absent, Number(-1.0)],
        ]);
        let ex = extract_at(&sheet, today);
        assert_eq!(ex.transactions[0].date, "01/10/2025");
        assert_eq!(ex.report.defaulted_for("date"), 0);
    }

    #[test]
    fn test_blank_rows_are_skipped_not_defaulted() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let sheet = Sheet::from_rows(vec![
            header(),
            vec![Absent, Absent, Absent, Absent, Absent, Absent, Absent],
            data_row((2024, 1, 6), "Salary", 2000.00, "Income", 2995.50),
            Vec::new(),
        ]);
        let ex = extract_at(&sheet, today);
        assert_eq!(ex.transactions.len(), 1);
        assert_eq!(ex.report.rows_total, 3);
        assert_eq!(ex.report.rows_skipped, 2);
        // Skipped rows must not leak a spurious "Others" bucket
        assert_eq!(ex.totals.len(), 1);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let a = extract_at(&statement(), today);
        let b = extract_at(&statement(), today);
        assert_eq!(a.transactions, b.transactions);
        assert_eq!(a.totals, b.totals);
    }

    #[test]
    fn test_drift_warning_when_column_always_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        // Amounts shifted into a different column: every amount read defaults
        let sheet = Sheet::from_rows(vec![
            header(),
            vec![
                Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
                Absent,
                Text("Coffee".into()),
                Number(-4.50),
                Absent,
                Text("Food".into()),
                Number(995.50),
            ],
        ]);
        let ex = extract_at(&sheet, today);
        let warnings = ex.report.drift_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'amount'"));
        assert!(warnings[0].contains("index 4"));
    }

    #[test]
    fn test_no_drift_warning_for_clean_statement() {
        let ex = extract_at(&statement(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(ex.report.drift_warnings().is_empty());
    }
}
