//! Report rendering
//!
//! Turns the ledger and its totals into presentable output:
//! - Spreadsheet: `.xlsx` with the entry table and a pie chart of consumption
//! - Text: terminal table and a bar breakdown of the same data

mod text;
mod xlsx;

pub use text::{text_breakdown, text_table};
pub use xlsx::XlsxReport;

use crate::core::{LedgerRecord, Result};
use crate::ledger::Totals;
use std::path::{Path, PathBuf};

/// Everything a renderer needs, borrowed from the session
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub records: &'a [LedgerRecord],
    pub totals: &'a Totals,
}

/// Narrow render-report capability used by the session
pub trait ReportRenderer {
    /// Render the report into a document
    fn render(&self, report: &Report<'_>) -> Result<Vec<u8>>;

    /// File extension of the rendered document
    fn extension(&self) -> &str;

    /// `path` with this renderer's extension appended, unless it already ends with it
    fn output_path(&self, path: &Path) -> PathBuf {
        let ext = self.extension();
        match path.extension() {
            Some(current) if current.eq_ignore_ascii_case(ext) => path.to_path_buf(),
            _ => {
                let mut name = path.as_os_str().to_owned();
                name.push(".");
                name.push(ext);
                PathBuf::from(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_adds_missing_extension() {
        let xlsx = XlsxReport::new();
        assert_eq!(xlsx.output_path(Path::new("report.xlsx")), PathBuf::from("report.xlsx"));
        assert_eq!(xlsx.output_path(Path::new("out/Report.XLSX")), PathBuf::from("out/Report.XLSX"));
        assert_eq!(xlsx.output_path(Path::new("report")), PathBuf::from("report.xlsx"));
        assert_eq!(xlsx.output_path(Path::new("march.2024")), PathBuf::from("march.2024.xlsx"));
        assert_eq!(xlsx.output_path(Path::new("report.csv")), PathBuf::from("report.csv.xlsx"));
    }
}
