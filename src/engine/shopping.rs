use chrono::NaiveDate;
use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::engine::constants::{IMPULSE_BUY_ODDS, PRODUCTS_CHECKED_PER_DAY, QUANTITY_TO_BUY};
use crate::engine::sampling::{random_location, round2, sample_price_and_mass};
use crate::engine::simulator::FamilySimulator;
use crate::models::{Product, PurchaseRecord, UnitKind};

/// Amount paid for one purchase.
///
/// Measured products cost one sampled unit price; count-based products
/// cost the unit price times the number of pieces.
pub fn purchase_total(unit_kind: UnitKind, unit_price: f64, quantity: u32) -> f64 {
    match unit_kind {
        UnitKind::Measured => round2(unit_price),
        UnitKind::Count => round2(unit_price * quantity as f64),
    }
}

impl<R: Rng> FamilySimulator<R> {
    /// Check a random subset of the catalog and buy what runs low,
    /// plus the occasional impulse buy. Returns the number of purchases.
    pub fn go_shopping(&mut self, date: NaiveDate) -> usize {
        if self.catalog.is_empty() {
            return 0;
        }

        let wanted = self.rng.gen_range(PRODUCTS_CHECKED_PER_DAY);
        let amount = wanted.min(self.catalog.len());
        let candidates: Vec<Product> = index::sample(&mut self.rng, self.catalog.len(), amount)
            .iter()
            .filter_map(|i| self.catalog.product_at(i).cloned())
            .collect();

        let mut bought = 0;
        for product in &candidates {
            if self.buy_if_needed(product, date) {
                bought += 1;
            }
        }
        bought
    }

    /// Buy `product` if it is low on stock or on impulse.
    fn buy_if_needed(&mut self, product: &Product, date: NaiveDate) -> bool {
        let is_low_on_stock = self.pantry.get(&product.name) < product.low_stock_threshold();
        let is_impulse_buy = self.rng.gen_range(1..=IMPULSE_BUY_ODDS) == 1;

        if !is_low_on_stock && !is_impulse_buy {
            return false;
        }
        if is_impulse_buy && !is_low_on_stock {
            debug!(product = %product.name, "impulse buy");
        }

        // Only scales the price of count-based products; bought mass is one unit.
        let quantity_to_buy = self.rng.gen_range(QUANTITY_TO_BUY);
        let (unit_price, unit_mass) = sample_price_and_mass(&mut self.rng, product);

        let bought = round2(unit_mass);
        let paid = purchase_total(product.unit_kind, unit_price, quantity_to_buy);

        self.ledgers.record_purchase(PurchaseRecord {
            date,
            product: product.name.clone(),
            location: random_location(&mut self.rng),
            quantity: bought,
            unit: product.unit.clone(),
            paid,
            note: format!("цена в базе: {}", unit_price),
        });

        self.pantry.adjust(&product.name, bought);
        self.purchased.insert(product.name.clone());
        true
    }
}
