//! PowerCost Estimator - Demo CLI
//!
//! Non-interactive walkthrough of the calculator: adds a few equipment
//! entries, prints each estimate, the totals and the consumption breakdown.
//! Records go to an in-memory store so nothing is written to disk.

use powercost_estimator_lib::catalog::Catalog;
use powercost_estimator_lib::core::{Currency, EquipmentEntry, PricingConfig};
use powercost_estimator_lib::report::{text_breakdown, text_table};
use powercost_estimator_lib::session::Session;
use powercost_estimator_lib::store::MemoryStore;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   PowerCost Estimator - Demo CLI");
    println!("==============================================\n");

    let pricing_config = PricingConfig {
        currency: Currency::Inr,
        rate_per_kwh: 6.5,
    };
    let catalog = Catalog::default();
    let mut session = Session::new(catalog.clone(), &pricing_config);
    let mut store = MemoryStore::new();

    println!("[1/3] Pricing: {:.2} {}/kWh\n", pricing_config.rate_per_kwh, pricing_config.currency);

    println!("[2/3] Adding equipment...\n");
    let entries = [
        ("LED Light", 4.0, 3),
        ("Refrigerator", 24.0, 1),
        ("Ceiling Fan", 10.0, 2),
        ("LED Light", 6.0, 2),
    ];
    for (name, hours, count) in entries {
        let watts = catalog.default_rating(name).unwrap_or(0.0);
        let record = session.add_entry(EquipmentEntry::new(name, watts, hours, count), &mut store)?;
        println!(
            "      {} x {:<14} {:>7.2} kWh/day  {:>8.2} kWh  {}",
            count,
            name,
            record.result.daily_kwh,
            record.result.bi_monthly_kwh,
            record.bill_label()
        );
    }

    // Rejected: no usage
    if let Err(e) = session.add_entry(EquipmentEntry::new("Water Pump", 1000.0, 0.0, 1), &mut store) {
        println!("      Rejected Water Pump: {}", e);
    }
    println!();

    println!("[3/3] Totals\n");
    let totals = session.totals();
    println!("  Total Bi-monthly Consumption: {:.2} kWh", totals.total_consumption_kwh);
    println!("  Total Estimated Bi-monthly Bill: {:.2} {}\n", totals.total_bill, session.pricing().currency());
    for line in text_breakdown(&totals) {
        println!("  {}", line);
    }
    println!();
    print!("{}", text_table(session.ledger().records()));
    println!("\n  Store rows written: {}", store.rows().len());

    println!("\n=== Totals (JSON) ===\n");
    println!("{}", serde_json::to_string_pretty(&totals)?);

    session.reset();
    println!("\n  After reset: {} entries, empty = {}", session.ledger().len(), session.totals().is_empty());

    Ok(())
}
