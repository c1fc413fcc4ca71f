use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;

use crate::error::{Result, SpendError};

pub const DEFAULT_MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;
pub const DEFAULT_MAX_ROWS: usize = 100_000;

/// Hard limits applied before and during workbook parsing.
#[derive(Debug, Clone, Copy)]
pub struct ParseBudget {
    pub max_file_bytes: u64,
    pub max_rows: usize,
}

impl Default for ParseBudget {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// A decoded cell. Statement workbooks only ever carry these shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Absent,
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }
}

/// Look up a cell by zero-based column index; columns past the row end are absent.
pub fn cell(row: &[CellValue], index: usize) -> &CellValue {
    row.get(index).unwrap_or(&CellValue::Absent)
}

/// The first sheet of a workbook, decoded into absolute row/column positions.
///
/// Rows are a finite ordered sequence; indices match the sheet's own row
/// numbering even when the used range does not start at A1.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(|r| r.as_slice())
    }
}

pub fn excel_serial_to_date(serial: f64) -> NaiveDate {
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    base + chrono::Duration::days(serial as i64)
}

fn decode(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Absent,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => CellValue::Date(excel_serial_to_date(dt.as_f64())),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Absent,
    }
}

/// Open a workbook and decode sheet index 0. Every other sheet is ignored.
///
/// Anything that stops the file from parsing as a workbook comes back as
/// `SpendError::Workbook`; callers absorb that into an empty result set
/// rather than crashing. Budget violations are a distinct, loud error.
pub fn read_first_sheet(path: &Path, budget: &ParseBudget) -> Result<Sheet> {
    let size = std::fs::metadata(path)
        .map_err(|e| SpendError::Workbook(format!("{}: {e}", path.display())))?
        .len();
    if size > budget.max_file_bytes {
        return Err(SpendError::Budget(format!(
            "{} is {size} bytes (limit {})",
            path.display(),
            budget.max_file_bytes
        )));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| SpendError::Workbook(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SpendError::Workbook("workbook has no sheets".to_string()))?
        .map_err(|e| SpendError::Workbook(e.to_string()))?;

    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    let total_rows = row_offset as usize + range.height();
    if total_rows > budget.max_rows {
        return Err(SpendError::Budget(format!(
            "sheet has {total_rows} rows (limit {})",
            budget.max_rows
        )));
    }

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); row_offset as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Absent; col_offset as usize];
        cells.extend(row.iter().map(decode));
        rows.push(cells);
    }
    Ok(Sheet::from_rows(rows))
}
