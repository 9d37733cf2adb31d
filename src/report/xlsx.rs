//! Spreadsheet export

use crate::core::Result;
use crate::report::{Report, ReportRenderer};
use crate::store::{record_row, HEADERS};
use rust_xlsxwriter::{Chart, ChartDataLabel, ChartType, Format, Workbook, Worksheet};

const TABLE_SHEET: &str = "Electricity Consumption";
const BREAKDOWN_SHEET: &str = "Breakdown";
const CHART_TITLE: &str = "Energy Consumption by Equipment";

/// Top-left cell of the chart: J2
const CHART_ANCHOR: (u32, u16) = (1, 9);

/// `.xlsx` renderer: entry table on the first sheet with a pie chart at J2,
/// grouped consumption on a second sheet feeding the chart
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxReport;

impl XlsxReport {
    pub fn new() -> Self {
        Self
    }

    fn table_sheet(report: &Report<'_>, header: &Format) -> Result<Worksheet> {
        let mut sheet = Worksheet::new();
        sheet.set_name(TABLE_SHEET)?;

        for (col, title) in HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, header)?;
            sheet.set_column_width(col as u16, 16)?;
        }
        sheet.set_column_width(0, 22)?;

        for (i, record) in report.records.iter().enumerate() {
            let row = i as u32 + 1;
            let cells = record_row(record);
            sheet.write_string(row, 0, cells[0].as_str())?;
            sheet.write_number(row, 1, record.entry.rating_watts)?;
            sheet.write_number(row, 2, record.result.rating_kw)?;
            sheet.write_number(row, 3, record.entry.daily_usage_hours)?;
            sheet.write_number(row, 4, record.entry.count)?;
            sheet.write_number(row, 5, record.result.daily_kwh)?;
            sheet.write_number(row, 6, record.result.bi_monthly_kwh)?;
            sheet.write_string(row, 7, cells[7].as_str())?;
        }

        Ok(sheet)
    }

    fn breakdown_sheet(report: &Report<'_>, header: &Format) -> Result<Worksheet> {
        let mut sheet = Worksheet::new();
        sheet.set_name(BREAKDOWN_SHEET)?;
        sheet.write_string_with_format(0, 0, "Equipment", header)?;
        sheet.write_string_with_format(0, 1, "Bi-monthly Consumption (kWh)", header)?;
        sheet.set_column_width(0, 22)?;
        sheet.set_column_width(1, 28)?;

        for (i, (name, kwh)) in report.totals.grouped_consumption.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, name.as_str())?;
            sheet.write_number(row, 1, *kwh)?;
        }

        Ok(sheet)
    }

    fn pie_chart(groups: u32) -> Chart {
        let mut chart = Chart::new(ChartType::Pie);
        chart
            .add_series()
            .set_name(CHART_TITLE)
            .set_categories((BREAKDOWN_SHEET, 1, 0, groups, 0))
            .set_values((BREAKDOWN_SHEET, 1, 1, groups, 1))
            .set_data_label(ChartDataLabel::new().show_percentage());
        chart.title().set_name(CHART_TITLE);
        chart
    }
}

impl ReportRenderer for XlsxReport {
    fn render(&self, report: &Report<'_>) -> Result<Vec<u8>> {
        let header = Format::new().set_bold();
        let mut table = Self::table_sheet(report, &header)?;
        let breakdown = Self::breakdown_sheet(report, &header)?;

        let groups = report.totals.grouped_consumption.len() as u32;
        if groups > 0 {
            table.insert_chart(CHART_ANCHOR.0, CHART_ANCHOR.1, &Self::pie_chart(groups))?;
        }

        let mut workbook = Workbook::new();
        workbook.push_worksheet(table);
        workbook.push_worksheet(breakdown);
        let bytes = workbook.save_to_buffer()?;

        log::debug!("Rendered spreadsheet: {} rows, {} groups, {} bytes", report.records.len(), groups, bytes.len());
        Ok(bytes)
    }

    fn extension(&self) -> &str {
        "xlsx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Currency, EquipmentEntry, LedgerRecord, PricingConfig};
    use crate::ledger::Ledger;
    use crate::pricing::PricingEngine;

    #[test]
    fn test_render_workbook() {
        let pricing = PricingEngine::new(&PricingConfig {
            currency: Currency::Usd,
            rate_per_kwh: 0.15,
        });
        let mut ledger = Ledger::new();
        for entry in [
            EquipmentEntry::new("LED Light", 10.0, 4.0, 3),
            EquipmentEntry::new("Refrigerator", 150.0, 24.0, 1),
            EquipmentEntry::new("LED Light", 10.0, 2.0, 1),
        ] {
            ledger.push(LedgerRecord {
                result: pricing.estimate(&entry),
                entry,
                currency: pricing.currency(),
            });
        }
        let totals = ledger.totals(pricing.rate_per_kwh());

        let bytes = XlsxReport::new()
            .render(&Report {
                records: ledger.records(),
                totals: &totals,
            })
            .unwrap();

        // xlsx is a zip container
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(XlsxReport.extension(), "xlsx");
    }
}
