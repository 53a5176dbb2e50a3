use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use crate::engine::constants::{RECEIPT_MASS_FACTOR, RECEIPT_ODDS};
use crate::engine::sampling::{receipt_provenance, round2};
use crate::engine::simulator::FamilySimulator;
use crate::models::Provenance;

/// Food that arrived without a purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub product: String,
    pub amount: f64,
    pub unit: String,
    pub source: Provenance,
}

impl<R: Rng> FamilySimulator<R> {
    /// Maybe receive a random product as a gift or from own production.
    ///
    /// The amount is credited to both the pantry and the tracker, so it
    /// stays eligible for consumption logging. Receipts are not logged.
    pub fn receive_products(&mut self, date: NaiveDate) -> Option<Receipt> {
        if self.rng.gen_range(1..=RECEIPT_ODDS) != 1 || self.catalog.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..self.catalog.len());
        let product = self.catalog.product_at(index)?;
        let name = product.name.clone();
        let unit = product.unit.clone();
        let amount = round2(product.mass * self.rng.gen_range(RECEIPT_MASS_FACTOR));
        let source = receipt_provenance(self.rng.gen_range(0.0..1.0));

        info!(date = %date, product = %name, amount, unit = %unit, source = %source, "received product");

        self.pantry.adjust(&name, amount);
        self.tracker.add(&name, amount);

        Some(Receipt {
            product: name,
            amount,
            unit,
            source,
        })
    }
}
