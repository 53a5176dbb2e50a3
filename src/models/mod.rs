mod product;
mod recipe;
mod record;

pub use product::{Product, UnitKind, Variation, COUNT_UNIT_LABEL};
pub use recipe::{Ingredient, MealType, Recipe};
pub use record::{ConsumptionRecord, Provenance, PurchaseLocation, PurchaseRecord};
