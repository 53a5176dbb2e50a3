use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::catalog::Catalog;
use crate::engine::constants::MEAL_REPEATS;
use crate::engine::consumption::CookedMeal;
use crate::engine::receipt::Receipt;
use crate::engine::sampling::generate_initial_stock;
use crate::models::MealType;
use crate::state::{Ledgers, Pantry, StockTracker};

/// Everything that happened on one simulated day.
#[derive(Debug, Clone)]
pub struct DayOutcome {
    pub date: NaiveDate,
    pub meals: Vec<CookedMeal>,
    pub receipt: Option<Receipt>,
    pub purchases: usize,
}

/// Totals over a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub days: u32,
    pub meals_cooked: usize,
    pub receipts: usize,
    pub purchases: usize,
}

/// Simulates one household's cooking and shopping, day by day.
///
/// Owns its random generator so a seeded instance replays exactly.
pub struct FamilySimulator<R: Rng> {
    pub(super) family_size: u32,
    pub(super) catalog: Catalog,
    pub(super) pantry: Pantry,
    pub(super) tracker: StockTracker,
    /// Products bought at least once; their consumption is never logged again.
    pub(super) purchased: BTreeSet<String>,
    pub(super) ledgers: Ledgers,
    pub(super) rng: R,
}

impl<R: Rng> FamilySimulator<R> {
    /// Create a simulator whose pantry and tracker both start at `initial_stock`.
    pub fn new(
        family_size: u32,
        initial_stock: BTreeMap<String, f64>,
        catalog: Catalog,
        rng: R,
    ) -> Self {
        info!(
            family_size,
            products = catalog.len(),
            recipes = catalog.recipe_count(),
            stocked = initial_stock.len(),
            "simulation starting"
        );

        Self {
            family_size,
            catalog,
            pantry: Pantry::new(initial_stock.clone()),
            tracker: StockTracker::new(initial_stock),
            purchased: BTreeSet::new(),
            ledgers: Ledgers::new(),
            rng,
        }
    }

    /// Simulate one day: meals, a possible receipt, then shopping.
    pub fn run_day(&mut self, date: NaiveDate) -> DayOutcome {
        let mut meals = Vec::new();
        for meal in MealType::ALL {
            let repeats = self.rng.gen_range(MEAL_REPEATS);
            for _ in 0..repeats {
                if let Some(cooked) = self.consume_meal(meal, date) {
                    meals.push(cooked);
                }
            }
        }

        let receipt = self.receive_products(date);
        let purchases = self.go_shopping(date);

        self.pantry.round_all();

        DayOutcome {
            date,
            meals,
            receipt,
            purchases,
        }
    }

    /// Simulate `days` consecutive days starting at `start_date`.
    pub fn run(&mut self, start_date: NaiveDate, days: u32) -> RunStats {
        let mut stats = RunStats::default();

        for (day, date) in (1..=days).zip(start_date.iter_days()) {
            info!(day, date = %date, "simulating day");
            let outcome = self.run_day(date);

            stats.days = day;
            stats.meals_cooked += outcome.meals.len();
            stats.receipts += usize::from(outcome.receipt.is_some());
            stats.purchases += outcome.purchases;
        }

        info!(
            purchases = self.ledgers.purchases().len(),
            consumptions = self.ledgers.consumptions().len(),
            "simulation finished"
        );
        stats
    }

    pub fn family_size(&self) -> u32 {
        self.family_size
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn tracker(&self) -> &StockTracker {
        &self.tracker
    }

    pub fn purchased(&self) -> &BTreeSet<String> {
        &self.purchased
    }

    pub fn ledgers(&self) -> &Ledgers {
        &self.ledgers
    }

    /// Hand over the ledgers at the end of a run.
    pub fn into_ledgers(self) -> Ledgers {
        self.ledgers
    }
}

impl FamilySimulator<StdRng> {
    /// Seeded simulator whose initial stock is drawn from the same generator.
    ///
    /// Each product starts with its reference mass times a whole multiplier
    /// in `[min_multiplier, max_multiplier]`.
    pub fn seeded(
        family_size: u32,
        catalog: Catalog,
        seed: u64,
        min_multiplier: u32,
        max_multiplier: u32,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = generate_initial_stock(&mut rng, &catalog, min_multiplier, max_multiplier);
        Self::new(family_size, initial, catalog, rng)
    }
}
