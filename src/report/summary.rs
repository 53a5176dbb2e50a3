use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{round2, RunStats};
use crate::state::Ledgers;

/// Headline numbers of a finished run, saved next to the CSV reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub report_date: NaiveDate,
    pub start_date: NaiveDate,
    /// Seed that replays this run.
    pub seed: u64,
    pub days: u32,
    pub family_size: u32,
    pub meals_cooked: usize,
    pub receipts: usize,
    pub purchases: usize,
    pub consumptions: usize,
    pub total_spent: f64,
    /// Amount paid per purchase location label.
    pub spent_by_location: BTreeMap<String, f64>,
    /// Logged consumption per provenance label, summed across units.
    pub consumed_by_provenance: BTreeMap<String, f64>,
}

impl RunSummary {
    pub fn new(
        ledgers: &Ledgers,
        stats: &RunStats,
        seed: u64,
        family_size: u32,
        start_date: NaiveDate,
        report_date: NaiveDate,
    ) -> Self {
        let mut spent_by_location: BTreeMap<String, f64> = BTreeMap::new();
        for p in ledgers.purchases() {
            *spent_by_location.entry(p.location.label().to_string()).or_insert(0.0) += p.paid;
        }

        let mut consumed_by_provenance: BTreeMap<String, f64> = BTreeMap::new();
        for c in ledgers.consumptions() {
            *consumed_by_provenance
                .entry(c.provenance.label().to_string())
                .or_insert(0.0) += c.quantity;
        }

        for value in spent_by_location
            .values_mut()
            .chain(consumed_by_provenance.values_mut())
        {
            *value = round2(*value);
        }

        Self {
            report_date,
            start_date,
            seed,
            days: stats.days,
            family_size,
            meals_cooked: stats.meals_cooked,
            receipts: stats.receipts,
            purchases: ledgers.purchases().len(),
            consumptions: ledgers.consumptions().len(),
            total_spent: round2(ledgers.total_spent()),
            spent_by_location,
            consumed_by_provenance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConsumptionRecord, Provenance, PurchaseLocation, PurchaseRecord};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn purchase(location: PurchaseLocation, paid: f64) -> PurchaseRecord {
        PurchaseRecord {
            date: date(),
            product: "milk".to_string(),
            location,
            quantity: 1.0,
            unit: "l".to_string(),
            paid,
            note: String::new(),
        }
    }

    #[test]
    fn test_totals_grouped_by_label() {
        let mut ledgers = Ledgers::new();
        ledgers.record_purchase(purchase(PurchaseLocation::Store, 10.1));
        ledgers.record_purchase(purchase(PurchaseLocation::Store, 0.2));
        ledgers.record_purchase(purchase(PurchaseLocation::Market, 5.0));
        ledgers.record_consumption(ConsumptionRecord {
            date: date(),
            product: "milk".to_string(),
            provenance: Provenance::Gift,
            quantity: 0.5,
            unit: "l".to_string(),
            note: String::new(),
        });

        let stats = RunStats {
            days: 1,
            meals_cooked: 3,
            receipts: 0,
            purchases: 3,
        };
        let summary = RunSummary::new(&ledgers, &stats, 5, 4, date(), date());

        assert_eq!(summary.purchases, 3);
        assert_eq!(summary.consumptions, 1);
        assert_eq!(summary.total_spent, 15.3);
        assert_eq!(summary.spent_by_location["магазин"], 10.3);
        assert_eq!(summary.spent_by_location["рынок"], 5.0);
        assert_eq!(summary.consumed_by_provenance["в подарок"], 0.5);
    }
}
