use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pantry_sim_rs::catalog::{load_catalog, validate_catalog};
use pantry_sim_rs::cli::{Cli, Command};
use pantry_sim_rs::config::SimulationConfig;
use pantry_sim_rs::engine::FamilySimulator;
use pantry_sim_rs::error::Result;
use pantry_sim_rs::interface::{
    confirm_overwrite, display_initial_stock, display_issues, display_summary,
};
use pantry_sim_rs::report::{save_reports, ReportPaths, RunSummary};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    let config = cli.apply_to(base);
    config.validate()?;

    match cli.command.unwrap_or_default() {
        Command::Run => cmd_run(&config, cli.yes),
        Command::Validate => cmd_validate(&config),
    }
}

/// Simulate the household and write the reports.
fn cmd_run(config: &SimulationConfig, assume_yes: bool) -> Result<()> {
    let catalog = load_catalog(&config.products_dir, &config.recipes_dir)?;
    info!(
        products = catalog.len(),
        recipes = catalog.recipe_count(),
        "catalog loaded"
    );
    for issue in validate_catalog(&catalog) {
        warn!("{}", issue);
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "random generator seeded");

    let today: NaiveDate = Local::now().date_naive();
    let start_date = config.start_date.unwrap_or(today);

    let mut sim = FamilySimulator::seeded(
        config.family_size,
        catalog,
        seed,
        config.stock_multiplier.min,
        config.stock_multiplier.max,
    );
    display_initial_stock(sim.pantry(), sim.catalog());

    let stats = sim.run(start_date, config.days);
    let summary = RunSummary::new(
        sim.ledgers(),
        &stats,
        seed,
        sim.family_size(),
        start_date,
        today,
    );

    let paths = ReportPaths::new(&config.reports_dir, today);
    if let Some(existing) = paths.existing() {
        if !assume_yes && !confirm_overwrite(existing)? {
            println!("Reports not saved.");
            display_summary(&summary, None);
            return Ok(());
        }
    }

    let paths = save_reports(&config.reports_dir, today, sim.ledgers(), &summary)?;
    display_summary(&summary, Some(&paths));

    Ok(())
}

/// Load the catalog and report problems.
fn cmd_validate(config: &SimulationConfig) -> Result<()> {
    let catalog = load_catalog(&config.products_dir, &config.recipes_dir)?;
    println!(
        "Loaded {} products and {} recipes",
        catalog.len(),
        catalog.recipe_count()
    );

    display_issues(&validate_catalog(&catalog));
    Ok(())
}
