use powercost_estimator_lib::catalog::{Catalog, CatalogRow};
use powercost_estimator_lib::core::{Config, Currency, EquipmentEntry, PricingConfig};
use powercost_estimator_lib::report::XlsxReport;
use powercost_estimator_lib::session::Session;
use powercost_estimator_lib::store::CsvRecordStore;

fn pricing(rate: f64) -> PricingConfig {
    PricingConfig {
        currency: Currency::Inr,
        rate_per_kwh: rate,
    }
}

#[test]
fn two_entries_to_csv_and_totals() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("electricity_consumption.csv");
    let mut store = CsvRecordStore::new(&csv_path);
    let mut session = Session::new(Catalog::default(), &pricing(6.5));

    let led = session
        .add_entry(EquipmentEntry::new("LED Light", 10.0, 4.0, 3), &mut store)
        .expect("add LED");
    let fridge = session
        .add_entry(EquipmentEntry::new("Refrigerator", 150.0, 24.0, 1), &mut store)
        .expect("add fridge");

    assert!((led.result.daily_kwh - 0.12).abs() < 1e-9);
    assert!((fridge.result.daily_kwh - 3.6).abs() < 1e-9);
    assert!((led.result.bi_monthly_kwh - 3.6).abs() < 1e-9);
    assert!((fridge.result.bi_monthly_kwh - 108.0).abs() < 1e-9);

    let totals = session.totals();
    assert!((totals.total_consumption_kwh - 111.6).abs() < 1e-9);
    assert_eq!(format!("{:.2}", totals.total_bill), "725.40");

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
    assert_eq!(reader.headers().unwrap().len(), 8);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "LED Light");
    assert_eq!(&rows[0][7], "23.40 INR");
    assert_eq!(&rows[1][0], "Refrigerator");
    assert_eq!(&rows[1][7], "702.00 INR");
}

#[test]
fn rejected_entry_leaves_everything_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("records.csv");
    let mut store = CsvRecordStore::new(&csv_path);
    let mut session = Session::new(Catalog::default(), &pricing(8.0));

    let err = session
        .add_entry(EquipmentEntry::new("Water Pump", 1000.0, 0.0, 1), &mut store)
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(session.ledger().len(), 0);
    assert!(!csv_path.exists());
}

#[test]
fn export_after_catalog_edit_and_reset() {
    let mut session = Session::from_config(&Config::default());
    let mut store = powercost_estimator_lib::store::MemoryStore::new();
    session.set_rate(8.0).unwrap();

    let rows = session.catalog().with_rating("Heater", 2000.0);
    session.update_catalog(rows);
    let watts = session.catalog().default_rating("Heater").unwrap();
    session
        .add_entry(EquipmentEntry::new("Heater", watts, 2.0, 1), &mut store)
        .unwrap();
    session
        .add_entry(EquipmentEntry::new("Air Conditioner", 1500.0, 5.0, 2), &mut store)
        .unwrap();

    let bytes = session.export(&XlsxReport::new()).unwrap().expect("report");
    assert_eq!(&bytes[..2], b"PK");

    session.reset();
    assert!(session.export(&XlsxReport::new()).unwrap().is_none());
    assert!(session.totals().is_empty());
    assert_eq!(session.catalog().default_rating("Heater"), Some(2000.0));

    session.update_catalog(vec![CatalogRow::new("", Some(5.0))]);
    assert!(session.catalog().selectable().is_empty());
}
