use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::engine::sampling::{random_provenance, round2};
use crate::engine::simulator::FamilySimulator;
use crate::models::{ConsumptionRecord, MealType};

/// A recipe that was cooked, with the number of ingredients it logged.
#[derive(Debug, Clone, PartialEq)]
pub struct CookedMeal {
    pub meal: MealType,
    pub recipe: String,
    pub logged: usize,
}

impl<R: Rng> FamilySimulator<R> {
    /// Cook a random recipe for `meal`.
    ///
    /// Every ingredient is taken out of the pantry. Only the part covered
    /// by never-purchased stock is logged, and nothing is logged for a
    /// product that has been bought during the run. Returns `None` when
    /// the catalog has no recipe for the meal.
    pub fn consume_meal(&mut self, meal: MealType, date: NaiveDate) -> Option<CookedMeal> {
        let Some(recipe) = self.catalog.recipes(meal).choose(&mut self.rng).cloned() else {
            warn!(meal = %meal, "no recipes for meal type");
            return None;
        };
        debug!(recipe = %recipe.name, meal = %meal, "cooking");

        let mut logged = 0;
        for item in &recipe.ingredients {
            self.pantry.adjust(&item.product, -item.amount);

            if self.purchased.contains(&item.product) {
                continue;
            }

            let taken = self.tracker.take_capped(&item.product, item.amount);
            if taken <= 0.0 {
                continue;
            }

            self.ledgers.record_consumption(ConsumptionRecord {
                date,
                product: item.product.clone(),
                provenance: random_provenance(&mut self.rng),
                quantity: round2(taken),
                unit: item.unit.clone(),
                note: format!("для блюда '{}'", recipe.name),
            });
            logged += 1;
        }

        Some(CookedMeal {
            meal,
            recipe: recipe.name,
            logged,
        })
    }
}
