//! Append-only record store
//!
//! Every entry added to the ledger is also appended as one row to a local CSV
//! file. The header row is written only when the file is new or empty. The
//! program never reads the file back.

use crate::core::{LedgerRecord, Result};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Column headers of the record store and of the exported table
pub const HEADERS: [&str; 8] = [
    "Equipment",
    "Rating (W)",
    "Rating (kW)",
    "Daily Usage (hours)",
    "Count",
    "Daily Consumption (kWh)",
    "Bi-monthly Consumption (kWh)",
    "Estimated Bill",
];

/// Narrow write-row capability used by the session
pub trait RecordStore {
    /// Append one record
    fn append(&mut self, record: &LedgerRecord) -> Result<()>;
}

/// The eight store columns for `record`
pub fn record_row(record: &LedgerRecord) -> [String; 8] {
    [
        record.entry.name.clone(),
        record.entry.rating_watts.to_string(),
        record.result.rating_kw.to_string(),
        record.entry.daily_usage_hours.to_string(),
        record.entry.count.to_string(),
        record.result.daily_kwh.to_string(),
        record.result.bi_monthly_kwh.to_string(),
        record.bill_label(),
    ]
}

/// CSV file store
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }
}

impl RecordStore for CsvRecordStore {
    fn append(&mut self, record: &LedgerRecord) -> Result<()> {
        let write_header = self.needs_header();
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(file);

        if write_header {
            wrt.write_record(HEADERS)?;
        }
        wrt.write_record(record_row(record))?;
        wrt.flush()?;

        log::debug!("Appended '{}' to {}", record.entry.name, self.path.display());
        Ok(())
    }
}

/// In-memory store, for runs that must not touch the disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<[String; 8]>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[[String; 8]] {
        &self.rows
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: &LedgerRecord) -> Result<()> {
        self.rows.push(record_row(record));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConsumptionResult, Currency, EquipmentEntry};

    fn air_conditioner() -> LedgerRecord {
        LedgerRecord {
            entry: EquipmentEntry::new("Air Conditioner", 1500.0, 5.0, 2),
            result: ConsumptionResult {
                rating_kw: 1.5,
                daily_kwh: 15.0,
                bi_monthly_kwh: 450.0,
                estimated_bill: 3600.0,
            },
            currency: Currency::Inr,
        }
    }

    #[test]
    fn test_record_row() {
        let row = record_row(&air_conditioner());
        assert_eq!(row, ["Air Conditioner", "1500", "1.5", "5", "2", "15", "450", "3600.00 INR"]);
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let mut store = CsvRecordStore::new(&path);

        store.append(&air_conditioner()).unwrap();
        store.append(&air_conditioner()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Equipment,Rating (W),Rating (kW),Daily Usage (hours),Count,Daily Consumption (kWh),Bi-monthly Consumption (kWh),Estimated Bill"
        );
        assert_eq!(lines[1], "Air Conditioner,1500,1.5,5,2,15,450,3600.00 INR");
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn test_existing_file_is_appended_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        std::fs::write(&path, "previous,row\n").unwrap();

        CsvRecordStore::new(&path).append(&air_conditioner()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "previous,row\nAir Conditioner,1500,1.5,5,2,15,450,3600.00 INR\n");
    }

    #[test]
    fn test_empty_file_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        std::fs::File::create(&path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);

        CsvRecordStore::new(&path).append(&air_conditioner()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADERS.join(","));
        assert_eq!(lines[1], "Air Conditioner,1500,1.5,5,2,15,450,3600.00 INR");
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvRecordStore::new(dir.path());

        assert!(store.append(&air_conditioner()).is_err());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        store.append(&air_conditioner()).unwrap();
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0][7], "3600.00 INR");
    }
}
