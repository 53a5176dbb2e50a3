use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::SimulationConfig;

/// PantrySim — simulates a household's food purchases and consumption of its initial stock.
#[derive(Parser, Debug)]
#[command(name = "pantry_sim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// YAML config file; command-line flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of product YAML files.
    #[arg(long)]
    pub products: Option<PathBuf>,

    /// Directory of recipe YAML files (breakfast.yaml, lunch.yaml, dinner.yaml).
    #[arg(long)]
    pub recipes: Option<PathBuf>,

    /// Directory the reports are written to.
    #[arg(long)]
    pub reports: Option<PathBuf>,

    /// Number of days to simulate.
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Number of people in the household.
    #[arg(long)]
    pub family_size: Option<u32>,

    /// Random seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// First simulated day (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Overwrite existing reports without asking.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the simulation and write the reports.
    Run,

    /// Load the catalog and list problems without simulating.
    Validate,
}

impl Default for Command {
    fn default() -> Self {
        Command::Run
    }
}

impl Cli {
    /// Apply command-line overrides on top of a base config.
    pub fn apply_to(&self, mut config: SimulationConfig) -> SimulationConfig {
        if let Some(dir) = &self.products {
            config.products_dir = dir.clone();
        }
        if let Some(dir) = &self.recipes {
            config.recipes_dir = dir.clone();
        }
        if let Some(dir) = &self.reports {
            config.reports_dir = dir.clone();
        }
        if let Some(days) = self.days {
            config.days = days;
        }
        if let Some(size) = self.family_size {
            config.family_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.start_date.is_some() {
            config.start_date = self.start_date;
        }
        config
    }
}
