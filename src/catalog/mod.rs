//! Equipment catalog: the editable table of default power ratings
//!
//! The catalog is replaced wholesale on every edit. Rows are kept as the user
//! wrote them; a row with a blank name or an unusable rating is stored but never
//! offered as a default.

use serde::{Deserialize, Serialize};

/// A single catalog row as edited by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub name: String,
    /// Default power rating in watts, if one was entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_watts: Option<f64>,
}

impl CatalogRow {
    pub fn new(name: impl Into<String>, rating_watts: Option<f64>) -> Self {
        Self {
            name: name.into(),
            rating_watts,
        }
    }

    /// The name and rating, when this row can be offered as a default
    fn usable(&self) -> Option<(&str, f64)> {
        let name = self.name.trim();
        match self.rating_watts {
            Some(watts) if !name.is_empty() && watts.is_finite() && watts >= 0.0 => Some((name, watts)),
            _ => None,
        }
    }
}

/// Built-in common power ratings (W)
pub fn default_catalog_rows() -> Vec<CatalogRow> {
    [
        ("Ceiling Fan", 70.0),
        ("LED Light", 10.0),
        ("Air Conditioner", 1500.0),
        ("Water Pump", 1000.0),
        ("Refrigerator", 150.0),
        ("Television", 100.0),
        ("Washing Machine", 500.0),
    ]
    .into_iter()
    .map(|(name, watts)| CatalogRow::new(name, Some(watts)))
    .collect()
}

/// Equipment name to default rating mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    /// Replace every row with `rows`
    pub fn replace(&mut self, rows: Vec<CatalogRow>) {
        log::debug!("Catalog replaced ({} rows)", rows.len());
        self.rows = rows;
    }

    /// All rows, including ones that are not selectable
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Selectable defaults in row order. A repeated name keeps its first
    /// position and takes the rating of its last row.
    pub fn selectable(&self) -> Vec<(String, f64)> {
        let mut out: Vec<(String, f64)> = Vec::new();
        for (name, watts) in self.rows.iter().filter_map(CatalogRow::usable) {
            match out.iter_mut().find(|(n, _)| n == name) {
                Some(existing) => existing.1 = watts,
                None => out.push((name.to_string(), watts)),
            }
        }
        out
    }

    /// Default rating for `name`, if it is selectable
    pub fn default_rating(&self, name: &str) -> Option<f64> {
        let name = name.trim();
        self.selectable()
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, watts)| watts)
    }

    /// Copy of the rows with `name` set to `rating_watts`, appended if absent
    pub fn with_rating(&self, name: &str, rating_watts: f64) -> Vec<CatalogRow> {
        let mut rows = self.rows.clone();
        let name = name.trim();
        let mut found = false;
        for row in rows.iter_mut().filter(|r| r.name.trim() == name) {
            row.rating_watts = Some(rating_watts);
            found = true;
        }
        if !found {
            rows.push(CatalogRow::new(name, Some(rating_watts)));
        }
        rows
    }

    /// Copy of the rows without any row named `name`
    pub fn without(&self, name: &str) -> Vec<CatalogRow> {
        let name = name.trim();
        self.rows
            .iter()
            .filter(|r| r.name.trim() != name)
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_catalog_rows())
    }
}
