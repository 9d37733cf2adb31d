//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Electricity Consumption Estimator".into());
    t.insert("app.rate".into(), "Rate: {rate} {currency}/kWh".into());
    t.insert("app.rate_unset".into(), "The power rate is 0: bills will show 0 until you set it in Settings.".into());

    // Main menu
    t.insert("menu.prompt".into(), "What would you like to do?".into());
    t.insert("menu.add".into(), "Add equipment".into());
    t.insert("menu.catalog".into(), "Edit common power ratings".into());
    t.insert("menu.totals".into(), "Calculate total bill and show chart".into());
    t.insert("menu.export".into(), "Download as Excel".into());
    t.insert("menu.settings".into(), "Rate and currency".into());
    t.insert("menu.reset".into(), "Reset".into());
    t.insert("menu.quit".into(), "Quit".into());

    // Equipment form
    t.insert("form.equipment".into(), "Select the name of the equipment:".into());
    t.insert("form.other".into(), "Other".into());
    t.insert("form.name".into(), "Enter the name of the equipment:".into());
    t.insert("form.rating".into(), "Enter the power rating of the equipment in watts:".into());
    t.insert("form.usage".into(), "Enter the daily average usage in hours:".into());
    t.insert("form.count".into(), "Enter the number of such equipment:".into());
    t.insert("form.invalid_number".into(), "Please type a number".into());

    // Single entry result
    t.insert("result.daily".into(), "Daily Consumption for {count} {name}(s): {kwh} kWh".into());
    t.insert("result.bi_monthly".into(), "Bi-monthly Consumption for {count} {name}(s): {kwh} kWh".into());
    t.insert("result.bill".into(), "Estimated Bi-monthly Bill: {amount} {currency}".into());
    t.insert("ledger.current".into(), "Current Equipment Data:".into());

    // Totals
    t.insert("totals.consumption".into(), "Total Bi-monthly Consumption: {kwh} kWh".into());
    t.insert("totals.bill".into(), "Total Estimated Bi-monthly Bill: {amount} {currency}".into());
    t.insert("totals.chart_title".into(), "Energy Consumption by Equipment".into());
    t.insert("totals.table".into(), "Total Consumption Data:".into());
    t.insert("totals.no_data".into(), "No equipment data available to calculate total bill.".into());

    // Export
    t.insert("export.saved".into(), "Report saved to {path}".into());
    t.insert("export.no_data".into(), "No equipment data available to export.".into());

    // Catalog
    t.insert("catalog.title".into(), "Common Power Ratings (W):".into());
    t.insert("catalog.action".into(), "Catalog action:".into());
    t.insert("catalog.set".into(), "Set or add a rating".into());
    t.insert("catalog.remove".into(), "Remove an item".into());
    t.insert("catalog.restore".into(), "Restore defaults".into());
    t.insert("catalog.save".into(), "Save as defaults".into());
    t.insert("catalog.back".into(), "Back".into());
    t.insert("catalog.name".into(), "Equipment name:".into());
    t.insert("catalog.not_offered".into(), "(not offered)".into());
    t.insert("catalog.empty".into(), "The catalog is empty.".into());

    // Settings
    t.insert("settings.rate".into(), "Enter the power rate per kWh:".into());
    t.insert("settings.currency".into(), "Select the currency for the power rate:".into());
    t.insert("settings.save".into(), "Save these settings as defaults?".into());
    t.insert("settings.saved".into(), "Settings saved to {path}".into());
    t.insert("settings.not_saved".into(), "{path} was left unchanged: {error}".into());

    // Reset
    t.insert("reset.confirm".into(), "Clear all equipment entries?".into());
    t.insert("reset.done".into(), "All equipment entries cleared.".into());

    // Errors
    t.insert("error.invalid_input".into(), "Please enter valid values for all fields.".into());
    t.insert("error.store".into(), "Equipment added, but writing it to {path} failed: {error}".into());
    t.insert("error.generic".into(), "Error: {error}".into());

    t
}
