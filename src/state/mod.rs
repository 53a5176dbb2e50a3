mod ledger;
mod stock;

pub use ledger::Ledgers;
pub use stock::{Pantry, StockTracker};
