pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod report;
pub mod state;

pub use catalog::Catalog;
pub use config::SimulationConfig;
pub use engine::FamilySimulator;
pub use error::{Result, SimError};
pub use state::Ledgers;
