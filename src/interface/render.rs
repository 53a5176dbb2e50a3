use crate::catalog::{Catalog, CatalogIssue};
use crate::report::{ReportPaths, RunSummary};
use crate::state::Pantry;

/// Display the generated starting stock.
pub fn display_initial_stock(pantry: &Pantry, catalog: &Catalog) {
    if pantry.is_empty() {
        println!("Initial stock: (empty)");
        return;
    }

    println!();
    println!("=== Initial Stock ({} products) ===", pantry.len());
    println!();

    let max_name_len = pantry.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(10);

    for (name, qty) in pantry.iter() {
        let unit = catalog.product(name).map(|p| p.unit.as_str()).unwrap_or("");
        println!("  {:<width$}  {:>8.2} {}", name, qty, unit, width = max_name_len);
    }

    println!();
}

/// Display the outcome of a run.
pub fn display_summary(summary: &RunSummary, paths: Option<&ReportPaths>) {
    println!();
    println!("=== Simulation Summary ===");
    println!();
    println!(
        "Period: {} .. {} ({} days)",
        summary.start_date,
        summary
            .start_date
            .checked_add_days(chrono::Days::new(u64::from(summary.days.saturating_sub(1))))
            .unwrap_or(summary.start_date),
        summary.days
    );
    println!("Family size: {}", summary.family_size);
    println!("Seed: {}", summary.seed);
    println!("Meals cooked: {}", summary.meals_cooked);
    println!("Receipts: {}", summary.receipts);
    println!();
    println!("Purchases: {} (total {:.2})", summary.purchases, summary.total_spent);
    for (location, spent) in &summary.spent_by_location {
        println!("  {:<12} {:>10.2}", location, spent);
    }
    println!("Consumption records: {}", summary.consumptions);
    for (source, qty) in &summary.consumed_by_provenance {
        println!("  {:<32} {:>8.2}", source, qty);
    }

    if let Some(paths) = paths {
        println!();
        println!("Reports written:");
        println!("  {}", paths.purchases.display());
        println!("  {}", paths.consumption.display());
        println!("  {}", paths.summary.display());
    }
    println!();
}

/// Display catalog validation results.
pub fn display_issues(issues: &[CatalogIssue]) {
    if issues.is_empty() {
        println!("Catalog OK.");
        return;
    }

    println!("Found {} catalog issue(s):", issues.len());
    for issue in issues {
        println!("  - {}", issue);
    }
}
