//! PowerCost Estimator library
//!
//! Household electricity consumption and bill estimation: equipment catalog,
//! session ledger, totals, CSV record store and spreadsheet export.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod ledger;
pub mod pricing;
pub mod report;
pub mod session;
pub mod store;
