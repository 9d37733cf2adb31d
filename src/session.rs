//! Estimation session
//!
//! A `Session` owns everything a user builds up while estimating a bill: the
//! catalog of default ratings, the ledger of added entries and the pricing in
//! effect. Side effects go through the `RecordStore` and `ReportRenderer`
//! passed in by the caller.

use crate::catalog::{Catalog, CatalogRow};
use crate::core::{Config, Currency, EquipmentEntry, Error, LedgerRecord, PricingConfig, Result};
use crate::ledger::{Ledger, Totals};
use crate::pricing::PricingEngine;
use crate::report::{Report, ReportRenderer};
use crate::store::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    ledger: Ledger,
    pricing: PricingEngine,
}

impl Session {
    pub fn new(catalog: Catalog, pricing: &PricingConfig) -> Self {
        Self {
            catalog,
            ledger: Ledger::new(),
            pricing: PricingEngine::new(pricing),
        }
    }

    /// Session seeded from the catalog and pricing of `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(Catalog::new(config.catalog.clone()), &config.pricing)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Validate, calculate and record `entry`.
    ///
    /// Invalid input changes nothing. If the store write fails the entry stays
    /// in the ledger and the store error is returned.
    pub fn add_entry(&mut self, entry: EquipmentEntry, store: &mut dyn RecordStore) -> Result<LedgerRecord> {
        if let Err(e) = entry.validate() {
            log::warn!("Rejected entry '{}': {}", entry.name, e);
            return Err(e);
        }

        let entry = EquipmentEntry {
            name: entry.name.trim().to_string(),
            ..entry
        };
        let record = LedgerRecord {
            result: self.pricing.estimate(&entry),
            currency: self.pricing.currency(),
            entry,
        };
        self.ledger.push(record.clone());
        log::info!(
            "Added {} x {} ({:.2} kWh, {})",
            record.entry.count,
            record.entry.name,
            record.result.bi_monthly_kwh,
            record.bill_label()
        );

        if let Err(e) = store.append(&record) {
            log::warn!("Failed to persist '{}': {}", record.entry.name, e);
            return Err(e);
        }
        Ok(record)
    }

    /// Totals of the ledger at the current rate
    pub fn totals(&self) -> Totals {
        self.ledger.totals(self.pricing.rate_per_kwh())
    }

    /// Replace the catalog with user-edited rows
    pub fn update_catalog(&mut self, rows: Vec<CatalogRow>) {
        self.catalog.replace(rows);
        log::info!("Catalog updated: {} selectable items", self.catalog.selectable().len());
    }

    /// Empty the ledger. Catalog and pricing are kept.
    pub fn reset(&mut self) {
        let dropped = self.ledger.len();
        self.ledger.clear();
        log::info!("Ledger reset ({} entries dropped)", dropped);
    }

    /// Change the rate for future calculations
    pub fn set_rate(&mut self, rate_per_kwh: f64) -> Result<()> {
        if !rate_per_kwh.is_finite() || rate_per_kwh < 0.0 {
            return Err(Error::InvalidInput(format!(
                "rate per kWh must be 0 or more, got {}",
                rate_per_kwh
            )));
        }
        let config = PricingConfig {
            rate_per_kwh,
            ..self.pricing.config().clone()
        };
        self.pricing.update_config(&config);
        Ok(())
    }

    /// Change the currency for future calculations
    pub fn set_currency(&mut self, currency: Currency) {
        let config = PricingConfig {
            currency,
            ..self.pricing.config().clone()
        };
        self.pricing.update_config(&config);
    }

    /// Render the ledger with `renderer`; `None` when there is nothing to export
    pub fn export(&self, renderer: &dyn ReportRenderer) -> Result<Option<Vec<u8>>> {
        if self.ledger.is_empty() {
            log::info!("Export skipped: ledger is empty");
            return Ok(None);
        }
        let totals = self.totals();
        let bytes = renderer.render(&Report {
            records: self.ledger.records(),
            totals: &totals,
        })?;
        log::info!("Exported {} entries ({} bytes)", self.ledger.len(), bytes.len());
        Ok(Some(bytes))
    }
}
