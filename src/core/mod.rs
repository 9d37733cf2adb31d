//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, PricingConfig, StorageConfig};
pub use error::{Error, Result};
pub use types::{ConsumptionResult, Currency, EquipmentEntry, LedgerRecord};
