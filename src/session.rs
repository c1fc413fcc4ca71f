use std::path::Path;
use std::sync::Mutex;

use sha2::{Digest, Sha256};

use crate::error::{Result, SpendError};
use crate::importer::{self, ImportReport};
use crate::models::{CategoryTotals, Transaction};
use crate::savings;
use crate::workbook::{self, ParseBudget, Sheet};

/// Everything one import derives from a statement. Replaced wholesale, so
/// readers never observe a partially-updated mix of two imports.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub totals: CategoryTotals,
    pub balance: f64,
    /// SHA-256 of the source bytes; empty when the source never opened.
    pub fingerprint: String,
    pub report: ImportReport,
}

impl Snapshot {
    fn failed(fingerprint: String, message: String) -> Self {
        Self {
            fingerprint,
            report: ImportReport::with_source_error(message),
            ..Self::default()
        }
    }
}

/// Owner of the current import state. Imports are serialized (one in
/// flight at a time) and an unreadable source degrades to an empty
/// snapshot with the failure recorded in its report, so consumers always
/// get a usable value.
pub struct Session {
    budget: ParseBudget,
    current: Mutex<Option<Snapshot>>,
}

impl Session {
    pub fn new(budget: ParseBudget) -> Self {
        Self {
            budget,
            current: Mutex::new(None),
        }
    }

    /// Run the pipeline on a workbook file and install the result.
    /// Only budget violations surface as errors; anything else that goes
    /// wrong is absorbed into the snapshot's report.
    pub fn import(&self, path: &Path) -> Result<Snapshot> {
        let mut guard = self.current.lock().unwrap();
        let snapshot = build_snapshot(path, &self.budget)?;
        *guard = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Run the pipeline on an already-decoded sheet and install the result.
    pub fn import_sheet(&self, sheet: &Sheet, fingerprint: &str) -> Snapshot {
        let mut guard = self.current.lock().unwrap();
        let snapshot = snapshot_from_sheet(sheet, fingerprint.to_string());
        *guard = Some(snapshot.clone());
        snapshot
    }

    /// Whole-value clone of the most recently installed snapshot.
    pub fn current(&self) -> Option<Snapshot> {
        self.current.lock().unwrap().clone()
    }
}

fn snapshot_from_sheet(sheet: &Sheet, fingerprint: String) -> Snapshot {
    let extraction = importer::extract(sheet);
    let balance = savings::resolve(&extraction.transactions, sheet);
    Snapshot {
        transactions: extraction.transactions,
        totals: extraction.totals,
        balance,
        fingerprint,
        report: extraction.report,
    }
}

fn build_snapshot(path: &Path, budget: &ParseBudget) -> Result<Snapshot> {
    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => return Ok(Snapshot::failed(String::new(), e.to_string())),
    };
    if size > budget.max_file_bytes {
        return Err(SpendError::Budget(format!(
            "{} is {size} bytes (limit {})",
            path.display(),
            budget.max_file_bytes
        )));
    }

    let fingerprint = match std::fs::read(path) {
        Ok(bytes) => hex::encode(Sha256::digest(&bytes)),
        Err(e) => return Ok(Snapshot::failed(String::new(), e.to_string())),
    };

    let sheet = match workbook::read_first_sheet(path, budget) {
        Ok(sheet) => sheet,
        Err(SpendError::Budget(msg)) => return Err(SpendError::Budget(msg)),
        Err(e) => return Ok(Snapshot::failed(fingerprint, e.to_string())),
    };
    Ok(snapshot_from_sheet(&sheet, fingerprint))
}
