//! Terminal rendering of the ledger table and consumption breakdown

use crate::core::LedgerRecord;
use crate::ledger::Totals;
use crate::store::HEADERS;

const BAR_WIDTH: usize = 30;

/// Ledger as an aligned text table, one line per record plus a header
pub fn text_table(records: &[LedgerRecord]) -> String {
    let rows: Vec<[String; 8]> = records
        .iter()
        .map(|r| {
            [
                r.entry.name.clone(),
                format!("{}", r.entry.rating_watts),
                format!("{:.3}", r.result.rating_kw),
                format!("{}", r.entry.daily_usage_hours),
                r.entry.count.to_string(),
                format!("{:.2}", r.result.daily_kwh),
                format!("{:.2}", r.result.bi_monthly_kwh),
                r.bill_label(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().map(|h| h.to_string()), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.into_iter(), &widths);
    for row in rows {
        push_line(&mut out, row.into_iter(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, w))| {
            // names left aligned, numbers right aligned
            if i == 0 {
                format!("{:<width$}", cell, width = *w)
            } else {
                format!("{:>width$}", cell, width = *w)
            }
        })
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Per-equipment share of consumption as text bars, largest first.
///
/// Returns no lines for an empty ledger.
pub fn text_breakdown(totals: &Totals) -> Vec<String> {
    if totals.is_empty() || totals.total_consumption_kwh <= 0.0 {
        return Vec::new();
    }

    let mut groups: Vec<(&String, &f64)> = totals.grouped_consumption.iter().collect();
    groups.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let name_width = groups.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);

    groups
        .into_iter()
        .map(|(name, kwh)| {
            let share = totals.share(name).unwrap_or(0.0);
            let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;
            format!(
                "{:<name_width$}  {:<bar_width$}  {:>5.1}%  ({:.2} kWh)",
                name,
                "#".repeat(filled.min(BAR_WIDTH)),
                share,
                kwh,
                name_width = name_width,
                bar_width = BAR_WIDTH,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Currency, EquipmentEntry, PricingConfig};
    use crate::ledger::Ledger;
    use crate::pricing::PricingEngine;

    fn sample_ledger() -> Ledger {
        let pricing = PricingEngine::new(&PricingConfig {
            currency: Currency::Inr,
            rate_per_kwh: 6.5,
        });
        let mut ledger = Ledger::new();
        for entry in [
            EquipmentEntry::new("LED Light", 10.0, 4.0, 3),
            EquipmentEntry::new("Refrigerator", 150.0, 24.0, 1),
        ] {
            ledger.push(LedgerRecord {
                result: pricing.estimate(&entry),
                entry,
                currency: Currency::Inr,
            });
        }
        ledger
    }

    #[test]
    fn test_table_layout() {
        let table = text_table(sample_ledger().records());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Equipment"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].starts_with("LED Light"));
        assert!(lines[2].ends_with("23.40 INR"));
        assert!(lines[3].ends_with("702.00 INR"));
    }

    #[test]
    fn test_breakdown_largest_first() {
        let totals = sample_ledger().totals(6.5);
        let lines = text_breakdown(&totals);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Refrigerator"));
        assert!(lines[0].contains("96.8%"));
        assert!(lines[0].contains("(108.00 kWh)"));
        assert!(lines[1].starts_with("LED Light"));
        assert!(lines[1].contains("3.2%"));
    }

    #[test]
    fn test_breakdown_empty() {
        assert!(text_breakdown(&Ledger::new().totals(6.5)).is_empty());
        assert_eq!(text_table(&[]).lines().count(), 2);
    }
}
