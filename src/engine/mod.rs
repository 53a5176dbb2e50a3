pub mod constants;
mod consumption;
mod receipt;
pub mod sampling;
mod shopping;
mod simulator;

pub use consumption::CookedMeal;
pub use receipt::Receipt;
pub use sampling::{generate_initial_stock, round2, sample_price_and_mass};
pub use shopping::purchase_total;
pub use simulator::{DayOutcome, FamilySimulator, RunStats};
