use std::collections::BTreeMap;

use crate::engine::round2;

/// Live quantity of every product in the household.
///
/// Quantities may go negative: a negative value is the amount still
/// needed before a purchase covers what was already cooked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pantry {
    stock: BTreeMap<String, f64>,
}

impl Pantry {
    pub fn new(initial: BTreeMap<String, f64>) -> Self {
        Self { stock: initial }
    }

    /// Current quantity of a product, 0 for products never stocked.
    pub fn get(&self, product: &str) -> f64 {
        self.stock.get(product).copied().unwrap_or(0.0)
    }

    /// Add `delta` (negative to remove), creating the entry if absent.
    pub fn adjust(&mut self, product: &str, delta: f64) {
        *self.stock.entry(product.to_string()).or_insert(0.0) += delta;
    }

    /// Round every entry to two decimals.
    pub fn round_all(&mut self) {
        for qty in self.stock.values_mut() {
            *qty = round2(*qty);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.stock.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}

/// Remaining quantity of each product that did not come from a purchase:
/// the initial stock plus later gifts and own production.
///
/// Only consumption covered by this balance is logged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockTracker {
    remaining: BTreeMap<String, f64>,
}

impl StockTracker {
    pub fn new(initial: BTreeMap<String, f64>) -> Self {
        Self { remaining: initial }
    }

    pub fn get(&self, product: &str) -> f64 {
        self.remaining.get(product).copied().unwrap_or(0.0)
    }

    /// Credit a non-purchase inflow.
    pub fn add(&mut self, product: &str, amount: f64) {
        *self.remaining.entry(product.to_string()).or_insert(0.0) += amount;
    }

    /// Take up to `amount` from the balance and return what was taken.
    ///
    /// Never takes more than the balance, so the balance never drops below 0.
    pub fn take_capped(&mut self, product: &str, amount: f64) -> f64 {
        let Some(balance) = self.remaining.get_mut(product) else {
            return 0.0;
        };
        if *balance <= 0.0 || amount <= 0.0 {
            return 0.0;
        }

        let taken = amount.min(*balance);
        *balance = (*balance - taken).max(0.0);
        taken
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.remaining.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
