//! Session ledger and totals aggregation
//!
//! The ledger keeps records in arrival order for display. Totals are grouped
//! by equipment name and do not depend on that order.

use crate::core::LedgerRecord;
use crate::pricing::calculate_bill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered, append-only list of calculated entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<LedgerRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LedgerRecord) {
        self.records.push(record);
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[LedgerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum the ledger at `rate_per_kwh`
    pub fn totals(&self, rate_per_kwh: f64) -> Totals {
        let mut grouped: BTreeMap<String, f64> = BTreeMap::new();
        let mut total_consumption_kwh = 0.0;

        for record in &self.records {
            total_consumption_kwh += record.result.bi_monthly_kwh;
            *grouped.entry(record.entry.name.clone()).or_insert(0.0) += record.result.bi_monthly_kwh;
        }

        Totals {
            entry_count: self.records.len(),
            total_consumption_kwh,
            total_bill: calculate_bill(total_consumption_kwh, rate_per_kwh),
            grouped_consumption: grouped,
        }
    }
}

/// Ledger totals for one billing period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub entry_count: usize,
    pub total_consumption_kwh: f64,
    /// Bill for the total consumption, rounded to 2 decimals
    pub total_bill: f64,
    /// Billing-period kWh per equipment name
    pub grouped_consumption: BTreeMap<String, f64>,
}

impl Totals {
    /// No entries were summed; there is nothing to chart or export
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Percentage of the total consumption used by `name`
    pub fn share(&self, name: &str) -> Option<f64> {
        if self.total_consumption_kwh <= 0.0 {
            return None;
        }
        self.grouped_consumption
            .get(name)
            .map(|kwh| kwh / self.total_consumption_kwh * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Currency, EquipmentEntry, PricingConfig};
    use crate::pricing::PricingEngine;

    fn record(name: &str, watts: f64, hours: f64, count: u32) -> LedgerRecord {
        let pricing = PricingEngine::new(&PricingConfig {
            currency: Currency::Inr,
            rate_per_kwh: 6.5,
        });
        let entry = EquipmentEntry::new(name, watts, hours, count);
        LedgerRecord {
            result: pricing.estimate(&entry),
            entry,
            currency: Currency::Inr,
        }
    }

    #[test]
    fn test_two_entry_totals() {
        let mut ledger = Ledger::new();
        ledger.push(record("LED Light", 10.0, 4.0, 3));
        ledger.push(record("Refrigerator", 150.0, 24.0, 1));

        let totals = ledger.totals(6.5);
        assert_eq!(totals.entry_count, 2);
        assert!((totals.total_consumption_kwh - 111.6).abs() < 1e-9);
        assert_eq!(totals.total_bill, 725.4);
        assert_eq!(totals.grouped_consumption.len(), 2);
    }

    #[test]
    fn test_grouping_by_name() {
        let mut ledger = Ledger::new();
        ledger.push(record("Ceiling Fan", 70.0, 8.0, 2));
        ledger.push(record("Television", 100.0, 3.0, 1));
        ledger.push(record("Ceiling Fan", 70.0, 4.0, 1));

        let totals = ledger.totals(1.0);
        assert_eq!(totals.grouped_consumption.len(), 2);
        assert!((totals.grouped_consumption["Ceiling Fan"] - (33.6 + 8.4)).abs() < 1e-9);

        let grouped_sum: f64 = totals.grouped_consumption.values().sum();
        assert!((grouped_sum - totals.total_consumption_kwh).abs() < 1e-9);

        let shares: f64 = totals
            .grouped_consumption
            .keys()
            .filter_map(|name| totals.share(name))
            .sum();
        assert!((shares - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_independent() {
        let records = vec![
            record("Water Pump", 1000.0, 1.0, 1),
            record("LED Light", 10.0, 6.0, 8),
            record("Washing Machine", 500.0, 0.5, 1),
            record("LED Light", 10.0, 2.0, 2),
        ];

        let mut forward = Ledger::new();
        records.iter().cloned().for_each(|r| forward.push(r));
        let mut backward = Ledger::new();
        records.iter().rev().cloned().for_each(|r| backward.push(r));

        let a = forward.totals(7.25);
        let b = backward.totals(7.25);
        assert!((a.total_consumption_kwh - b.total_consumption_kwh).abs() < 1e-9);
        assert_eq!(a.total_bill, b.total_bill);
        assert_eq!(
            a.grouped_consumption.keys().collect::<Vec<_>>(),
            b.grouped_consumption.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_ledger_totals() {
        let mut ledger = Ledger::new();
        ledger.push(record("Television", 100.0, 3.0, 1));
        ledger.clear();

        let totals = ledger.totals(6.5);
        assert!(totals.is_empty());
        assert_eq!(totals.total_consumption_kwh, 0.0);
        assert_eq!(totals.total_bill, 0.0);
        assert!(totals.grouped_consumption.is_empty());
        assert_eq!(totals.share("Television"), None);
    }
}
