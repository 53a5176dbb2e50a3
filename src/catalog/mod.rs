mod loader;
mod validate;

pub use loader::{load_catalog, load_products, load_recipes};
pub use validate::{validate_catalog, CatalogIssue};

use std::collections::BTreeMap;

use crate::models::{MealType, Product, Recipe};

/// Read-only product and recipe reference data.
///
/// Both maps are ordered so that a seeded run resolves the same random
/// index to the same product in every process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
    recipes: BTreeMap<MealType, Vec<Recipe>>,
}

impl Catalog {
    pub fn new(
        products: BTreeMap<String, Product>,
        recipes: BTreeMap<MealType, Vec<Recipe>>,
    ) -> Self {
        Self { products, recipes }
    }

    /// Build a catalog from plain lists, keyed by product name.
    pub fn from_parts(
        products: impl IntoIterator<Item = Product>,
        recipes: impl IntoIterator<Item = (MealType, Recipe)>,
    ) -> Self {
        let products = products
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();

        let mut by_meal: BTreeMap<MealType, Vec<Recipe>> = BTreeMap::new();
        for (meal, recipe) in recipes {
            by_meal.entry(meal).or_default().push(recipe);
        }

        Self {
            products,
            recipes: by_meal,
        }
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Product at a position in name order.
    pub fn product_at(&self, index: usize) -> Option<&Product> {
        self.products.values().nth(index)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn product_names(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Recipes for a meal type; empty when none were loaded.
    pub fn recipes(&self, meal: MealType) -> &[Recipe] {
        self.recipes.get(&meal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
