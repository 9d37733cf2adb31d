//! Common types used across the application

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency the power rate is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Inr, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// ISO 4217 code, as printed next to amounts
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Inr
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown currency: {}", s)))
    }
}

/// One piece of household equipment as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    /// Equipment name, also the grouping key for totals
    pub name: String,
    /// Power rating in watts
    pub rating_watts: f64,
    /// Average daily usage in hours
    pub daily_usage_hours: f64,
    /// Number of identical units
    pub count: u32,
}

impl EquipmentEntry {
    pub fn new(name: impl Into<String>, rating_watts: f64, daily_usage_hours: f64, count: u32) -> Self {
        Self {
            name: name.into(),
            rating_watts,
            daily_usage_hours,
            count,
        }
    }

    /// Check the entry can be added to the ledger.
    ///
    /// Stricter than the calculator: rating and usage must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("equipment name is empty".to_string()));
        }
        if !self.rating_watts.is_finite() || self.rating_watts <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "power rating must be greater than 0 W, got {}",
                self.rating_watts
            )));
        }
        if !self.daily_usage_hours.is_finite() || self.daily_usage_hours <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "daily usage must be greater than 0 hours, got {}",
                self.daily_usage_hours
            )));
        }
        if self.count < 1 {
            return Err(Error::InvalidInput("count must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Energy and cost derived from a single entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionResult {
    pub rating_kw: f64,
    pub daily_kwh: f64,
    pub bi_monthly_kwh: f64,
    /// Bill for the billing period, rounded to 2 decimals
    pub estimated_bill: f64,
}

/// A ledger line: the entry, what it was calculated to, and in which currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub entry: EquipmentEntry,
    pub result: ConsumptionResult,
    pub currency: Currency,
}

impl LedgerRecord {
    /// Bill with its currency, e.g. "3600.00 INR"
    pub fn bill_label(&self) -> String {
        format!("{:.2} {}", self.result.estimated_bill, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" GBP ".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!("JPY".parse::<Currency>().is_err());
        assert_eq!(Currency::default().to_string(), "INR");
    }

    #[test]
    fn test_entry_validation() {
        assert!(EquipmentEntry::new("Television", 100.0, 3.0, 1).validate().is_ok());

        let rejected = [
            EquipmentEntry::new("", 100.0, 3.0, 1),
            EquipmentEntry::new("   ", 100.0, 3.0, 1),
            EquipmentEntry::new("Television", 0.0, 3.0, 1),
            EquipmentEntry::new("Television", -5.0, 3.0, 1),
            EquipmentEntry::new("Television", 100.0, 0.0, 1),
            EquipmentEntry::new("Television", 100.0, f64::NAN, 1),
            EquipmentEntry::new("Television", 100.0, 3.0, 0),
        ];
        for entry in rejected {
            let err = entry.validate().unwrap_err();
            assert!(err.is_invalid_input(), "{:?} should be rejected", entry);
        }
    }

    #[test]
    fn test_bill_label() {
        let record = LedgerRecord {
            entry: EquipmentEntry::new("Air Conditioner", 1500.0, 5.0, 2),
            result: ConsumptionResult {
                rating_kw: 1.5,
                daily_kwh: 15.0,
                bi_monthly_kwh: 450.0,
                estimated_bill: 3600.0,
            },
            currency: Currency::Inr,
        };
        assert_eq!(record.bill_label(), "3600.00 INR");
    }
}
