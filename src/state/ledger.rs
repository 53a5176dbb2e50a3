use crate::models::{ConsumptionRecord, PurchaseRecord};

/// Append-only purchase and consumption logs produced by a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledgers {
    purchases: Vec<PurchaseRecord>,
    consumptions: Vec<ConsumptionRecord>,
}

impl Ledgers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_purchase(&mut self, record: PurchaseRecord) {
        self.purchases.push(record);
    }

    pub fn record_consumption(&mut self, record: ConsumptionRecord) {
        self.consumptions.push(record);
    }

    pub fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    pub fn consumptions(&self) -> &[ConsumptionRecord] {
        &self.consumptions
    }

    /// Sum of all amounts paid.
    pub fn total_spent(&self) -> f64 {
        self.purchases.iter().map(|p| p.paid).sum()
    }
}
