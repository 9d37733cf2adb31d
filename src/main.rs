//! PowerCost Estimator - Main entry point
//!
//! Interactive terminal calculator for household electricity consumption
//! and bi-monthly bill estimates.

use anyhow::Context;
use clap::Parser;
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use powercost_estimator_lib::catalog::default_catalog_rows;
use powercost_estimator_lib::core::{Config, Currency, EquipmentEntry, LedgerRecord};
use powercost_estimator_lib::i18n::I18n;
use powercost_estimator_lib::report::{text_breakdown, text_table, ReportRenderer, XlsxReport};
use powercost_estimator_lib::session::Session;
use powercost_estimator_lib::store::CsvRecordStore;
use std::fmt;
use std::path::PathBuf;

/// Estimate household electricity consumption and bi-monthly bills.
///
/// Flags override the configuration file for this run only.
#[derive(Parser, Debug)]
#[command(name = "powercost-estimator", version, about, long_about)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Power rate per kWh
    #[arg(short, long)]
    rate: Option<f64>,
    /// Currency of the power rate
    #[arg(short, long, value_enum)]
    currency: Option<Currency>,
    /// CSV file every added entry is appended to
    #[arg(long)]
    record_file: Option<PathBuf>,
    /// Spreadsheet written by the export action
    #[arg(long)]
    export_file: Option<PathBuf>,
    /// Interface language: auto, en, fr
    #[arg(short, long)]
    language: Option<String>,
}

/// A menu option shown with a translated label
struct Choice<T> {
    value: T,
    label: String,
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Catalog,
    Totals,
    Export,
    Settings,
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogAction {
    Set,
    Remove,
    Restore,
    Save,
    Back,
}

/// Turn Esc into `None`; everything else, Ctrl-C included, is an error
fn ask<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

struct App {
    config: Config,
    config_path: PathBuf,
    session: Session,
    store: CsvRecordStore,
    i18n: I18n,
}

impl App {
    fn run(&mut self) -> anyhow::Result<()> {
        println!("{}", self.i18n.get("app.title"));
        println!(
            "{}",
            self.i18n.get_with(
                "app.rate",
                &[
                    ("rate", format!("{:.2}", self.session.pricing().rate_per_kwh())),
                    ("currency", self.session.pricing().currency().to_string()),
                ],
            )
        );
        if !self.session.pricing().is_configured() {
            println!("{}", self.i18n.get("app.rate_unset"));
        }

        loop {
            println!();
            let options = vec![
                self.choice(Action::Add, "menu.add"),
                self.choice(Action::Catalog, "menu.catalog"),
                self.choice(Action::Totals, "menu.totals"),
                self.choice(Action::Export, "menu.export"),
                self.choice(Action::Settings, "menu.settings"),
                self.choice(Action::Reset, "menu.reset"),
                self.choice(Action::Quit, "menu.quit"),
            ];
            let action = match ask(Select::new(&self.i18n.get("menu.prompt"), options).prompt())? {
                Some(choice) => choice.value,
                None => Action::Quit,
            };

            match action {
                Action::Add => self.add_equipment()?,
                Action::Catalog => self.edit_catalog()?,
                Action::Totals => self.show_totals(),
                Action::Export => self.export(),
                Action::Settings => self.settings()?,
                Action::Reset => self.reset()?,
                Action::Quit => break,
            }
        }

        log::info!("Session ended with {} entries", self.session.ledger().len());
        Ok(())
    }

    fn choice<T>(&self, value: T, key: &str) -> Choice<T> {
        Choice {
            value,
            label: self.i18n.get(key),
        }
    }

    fn ask_number(&self, key: &str, default: Option<f64>) -> anyhow::Result<Option<f64>> {
        let message = self.i18n.get(key);
        let error = self.i18n.get("form.invalid_number");
        let mut prompt = CustomType::<f64>::new(&message).with_error_message(&error);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        ask(prompt.prompt())
    }

    fn add_equipment(&mut self) -> anyhow::Result<()> {
        let mut options: Vec<Choice<Option<(String, f64)>>> = self
            .session
            .catalog()
            .selectable()
            .into_iter()
            .map(|(name, watts)| Choice {
                label: name.clone(),
                value: Some((name, watts)),
            })
            .collect();
        options.push(self.choice(None, "form.other"));

        let Some(selected) = ask(Select::new(&self.i18n.get("form.equipment"), options).prompt())? else {
            return Ok(());
        };
        let (name, default_rating) = match selected.value {
            Some((name, watts)) => (name, Some(watts)),
            None => {
                let Some(name) = ask(Text::new(&self.i18n.get("form.name")).prompt())? else {
                    return Ok(());
                };
                (name, None)
            }
        };
        let Some(rating_watts) = self.ask_number("form.rating", default_rating)? else {
            return Ok(());
        };
        let Some(daily_usage_hours) = self.ask_number("form.usage", None)? else {
            return Ok(());
        };
        let count_message = self.i18n.get("form.count");
        let count_error = self.i18n.get("form.invalid_number");
        let Some(count) = ask(
            CustomType::<u32>::new(&count_message)
                .with_default(1)
                .with_error_message(&count_error)
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let entry = EquipmentEntry::new(name, rating_watts, daily_usage_hours, count);
        match self.session.add_entry(entry, &mut self.store) {
            Ok(record) => self.print_record(&record),
            Err(e) if e.is_invalid_input() => {
                println!("{}", self.i18n.get("error.invalid_input"));
                return Ok(());
            }
            Err(e) => {
                if let Some(record) = self.session.ledger().records().last() {
                    self.print_record(record);
                }
                println!(
                    "{}",
                    self.i18n.get_with(
                        "error.store",
                        &[
                            ("path", self.store.path().display().to_string()),
                            ("error", e.to_string()),
                        ],
                    )
                );
            }
        }

        println!();
        println!("{}", self.i18n.get("ledger.current"));
        print!("{}", text_table(self.session.ledger().records()));
        Ok(())
    }

    fn print_record(&self, record: &LedgerRecord) {
        let count = record.entry.count.to_string();
        let name = record.entry.name.clone();
        println!(
            "{}",
            self.i18n.get_with(
                "result.daily",
                &[
                    ("count", count.clone()),
                    ("name", name.clone()),
                    ("kwh", format!("{:.2}", record.result.daily_kwh)),
                ],
            )
        );
        println!(
            "{}",
            self.i18n.get_with(
                "result.bi_monthly",
                &[
                    ("count", count),
                    ("name", name),
                    ("kwh", format!("{:.2}", record.result.bi_monthly_kwh)),
                ],
            )
        );
        println!(
            "{}",
            self.i18n.get_with(
                "result.bill",
                &[
                    ("amount", format!("{:.2}", record.result.estimated_bill)),
                    ("currency", record.currency.to_string()),
                ],
            )
        );
    }

    fn show_totals(&self) {
        let totals = self.session.totals();
        if totals.is_empty() {
            println!("{}", self.i18n.get("totals.no_data"));
            return;
        }

        println!(
            "{}",
            self.i18n.get_with(
                "totals.consumption",
                &[("kwh", format!("{:.2}", totals.total_consumption_kwh))],
            )
        );
        println!(
            "{}",
            self.i18n.get_with(
                "totals.bill",
                &[
                    ("amount", format!("{:.2}", totals.total_bill)),
                    ("currency", self.session.pricing().currency().to_string()),
                ],
            )
        );

        println!();
        println!("{}", self.i18n.get("totals.chart_title"));
        for line in text_breakdown(&totals) {
            println!("  {}", line);
        }

        println!();
        println!("{}", self.i18n.get("totals.table"));
        print!("{}", text_table(self.session.ledger().records()));
    }

    fn export(&self) {
        let renderer = XlsxReport::new();
        let path = &renderer.output_path(&self.config.storage.export_file);
        let written = self
            .session
            .export(&renderer)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| match bytes {
                Some(bytes) => std::fs::write(path, bytes)
                    .with_context(|| format!("writing {}", path.display()))
                    .map(|_| true),
                None => Ok(false),
            });

        match written {
            Ok(true) => println!(
                "{}",
                self.i18n.get_with("export.saved", &[("path", path.display().to_string())])
            ),
            Ok(false) => println!("{}", self.i18n.get("export.no_data")),
            Err(e) => {
                log::warn!("Export failed: {:#}", e);
                println!("{}", self.i18n.get_with("error.generic", &[("error", format!("{:#}", e))]));
            }
        }
    }

    fn print_catalog(&self) {
        println!("{}", self.i18n.get("catalog.title"));
        let rows = self.session.catalog().rows();
        if rows.is_empty() {
            println!("  {}", self.i18n.get("catalog.empty"));
        }
        let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
        let offered = self.session.catalog().selectable();
        for row in rows {
            let rating = row
                .rating_watts
                .map(|w| format!("{}", w))
                .unwrap_or_else(|| "-".to_string());
            let note = if offered.iter().any(|(n, _)| n == row.name.trim()) {
                String::new()
            } else {
                format!("  {}", self.i18n.get("catalog.not_offered"))
            };
            println!("  {:<width$}  {:>8}{}", row.name, rating, note, width = width);
        }
    }

    fn edit_catalog(&mut self) -> anyhow::Result<()> {
        loop {
            println!();
            self.print_catalog();

            let options = vec![
                self.choice(CatalogAction::Set, "catalog.set"),
                self.choice(CatalogAction::Remove, "catalog.remove"),
                self.choice(CatalogAction::Restore, "catalog.restore"),
                self.choice(CatalogAction::Save, "catalog.save"),
                self.choice(CatalogAction::Back, "catalog.back"),
            ];
            let action = match ask(Select::new(&self.i18n.get("catalog.action"), options).prompt())? {
                Some(choice) => choice.value,
                None => CatalogAction::Back,
            };

            match action {
                CatalogAction::Set => {
                    let Some(name) = ask(Text::new(&self.i18n.get("catalog.name")).prompt())? else {
                        continue;
                    };
                    let current = self.session.catalog().default_rating(&name);
                    let Some(watts) = self.ask_number("form.rating", current)? else {
                        continue;
                    };
                    let rows = self.session.catalog().with_rating(&name, watts);
                    self.session.update_catalog(rows);
                }
                CatalogAction::Remove => {
                    let names: Vec<String> = self
                        .session
                        .catalog()
                        .rows()
                        .iter()
                        .map(|r| r.name.clone())
                        .collect();
                    if names.is_empty() {
                        continue;
                    }
                    let Some(name) = ask(Select::new(&self.i18n.get("catalog.name"), names).prompt())? else {
                        continue;
                    };
                    let rows = self.session.catalog().without(&name);
                    self.session.update_catalog(rows);
                }
                CatalogAction::Restore => self.session.update_catalog(default_catalog_rows()),
                CatalogAction::Save => {
                    let rows = self.session.catalog().rows().to_vec();
                    self.save_config(|config| config.catalog = rows);
                }
                CatalogAction::Back => return Ok(()),
            }
        }
    }

    fn settings(&mut self) -> anyhow::Result<()> {
        let Some(rate) = self.ask_number("settings.rate", Some(self.session.pricing().rate_per_kwh()))? else {
            return Ok(());
        };
        if let Err(e) = self.session.set_rate(rate) {
            println!("{}", self.i18n.get_with("error.generic", &[("error", e.to_string())]));
            return Ok(());
        }

        let current = self.session.pricing().currency();
        let cursor = Currency::ALL.iter().position(|c| *c == current).unwrap_or(0);
        let Some(currency) = ask(
            Select::new(&self.i18n.get("settings.currency"), Currency::ALL.to_vec())
                .with_starting_cursor(cursor)
                .prompt(),
        )?
        else {
            return Ok(());
        };
        self.session.set_currency(currency);
        log::info!("Pricing set to {:.4} {}/kWh", rate, currency);

        let save = ask(Confirm::new(&self.i18n.get("settings.save")).with_default(false).prompt())?;
        if save == Some(true) {
            let pricing = self.session.pricing().config().clone();
            self.save_config(|config| config.pricing = pricing);
        }
        Ok(())
    }

    /// Apply `change` to the configuration file on disk, leaving out this run's flag overrides
    fn save_config(&self, change: impl FnOnce(&mut Config)) {
        let path = self.config_path.display().to_string();
        match Config::update_file(&self.config_path, change) {
            Ok(_) => println!("{}", self.i18n.get_with("settings.saved", &[("path", path)])),
            Err(e) => {
                log::warn!("Not saving {}: {}", path, e);
                println!(
                    "{}",
                    self.i18n.get_with("settings.not_saved", &[("path", path), ("error", e.to_string())])
                );
            }
        }
    }

    fn reset(&mut self) -> anyhow::Result<()> {
        let confirmed = ask(Confirm::new(&self.i18n.get("reset.confirm")).with_default(false).prompt())?;
        if confirmed == Some(true) {
            self.session.reset();
            println!("{}", self.i18n.get("reset.done"));
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("Starting PowerCost Estimator v{}", env!("CARGO_PKG_VERSION"));

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    // Load or create configuration
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(currency) = cli.currency {
        config.pricing.currency = currency;
    }
    if let Some(path) = cli.record_file {
        config.storage.record_file = path;
    }
    if let Some(path) = cli.export_file {
        config.storage.export_file = path;
    }
    if let Some(language) = cli.language {
        config.general.language = language;
    }

    let mut session = Session::from_config(&config);
    if let Some(rate) = cli.rate {
        session.set_rate(rate)?;
        config.pricing.rate_per_kwh = rate;
    }

    let store = CsvRecordStore::new(&config.storage.record_file);
    let i18n = I18n::new(&config.general.language);

    let mut app = App {
        config,
        config_path,
        session,
        store,
        i18n,
    };

    match app.run() {
        Err(e) if matches!(e.downcast_ref::<InquireError>(), Some(InquireError::OperationInterrupted)) => {
            log::info!("Interrupted");
            Ok(())
        }
        other => other,
    }
}
