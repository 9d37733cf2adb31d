//! Pricing engine for electricity consumption and bill estimation
//!
//! All estimates use a flat rate per kWh and a fixed 30-day billing period.
//! The functions here are pure: no I/O, no clock, no shared state.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{ConsumptionResult, Currency, EquipmentEntry, PricingConfig};

/// Days in one billing period. Not calendar accurate; bills are defined against it.
pub const BILLING_PERIOD_DAYS: f64 = 30.0;

/// Convert a rating in watts to kilowatts
pub fn watts_to_kw(watts: f64) -> f64 {
    watts / 1000.0
}

/// Daily and billing-period energy for `count` units of `rating_watts` used `daily_usage_hours` a day.
///
/// Returns `(rating_kw, daily_kwh, bi_monthly_kwh)`.
pub fn calculate_consumption(rating_watts: f64, daily_usage_hours: f64, count: u32) -> (f64, f64, f64) {
    let rating_kw = watts_to_kw(rating_watts);
    let daily_kwh = rating_kw * daily_usage_hours * count as f64;
    let bi_monthly_kwh = daily_kwh * BILLING_PERIOD_DAYS;
    (rating_kw, daily_kwh, bi_monthly_kwh)
}

/// Bill for `kwh` at `rate_per_kwh`, rounded to 2 decimals
pub fn calculate_bill(kwh: f64, rate_per_kwh: f64) -> f64 {
    round_to_cents(kwh * rate_per_kwh)
}

/// Round to 2 decimal places, ties to even.
///
/// The tie is decided on the exact binary value of `amount`, so `0.075` (stored
/// as 0.07499...) rounds down while `5.625` (exact) rounds to `5.62`.
/// Non-finite amounts are returned unchanged.
pub fn round_to_cents(amount: f64) -> f64 {
    Decimal::from_f64_retain(amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(amount)
}

/// Pricing engine that turns equipment entries into consumption and cost
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Update the pricing configuration
    pub fn update_config(&mut self, config: &PricingConfig) {
        self.config = config.clone();
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn rate_per_kwh(&self) -> f64 {
        self.config.rate_per_kwh
    }

    pub fn currency(&self) -> Currency {
        self.config.currency
    }

    /// Estimate consumption and bill for one entry at the current rate
    pub fn estimate(&self, entry: &EquipmentEntry) -> ConsumptionResult {
        let (rating_kw, daily_kwh, bi_monthly_kwh) =
            calculate_consumption(entry.rating_watts, entry.daily_usage_hours, entry.count);
        ConsumptionResult {
            rating_kw,
            daily_kwh,
            bi_monthly_kwh,
            estimated_bill: self.calculate_cost(bi_monthly_kwh),
        }
    }

    /// Calculate cost for a given energy consumption in kWh
    pub fn calculate_cost(&self, kwh: f64) -> f64 {
        calculate_bill(kwh, self.config.rate_per_kwh)
    }

    /// Check if pricing is configured (rate set to something other than 0)
    pub fn is_configured(&self) -> bool {
        self.config.rate_per_kwh > 0.0
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}
