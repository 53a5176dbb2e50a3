use std::collections::BTreeSet;
use std::fmt;

use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::models::MealType;

/// Minimum similarity for a product name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A catalog problem that does not stop a simulation but skews its results.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    /// A recipe uses a product the catalog does not define.
    UnknownIngredient {
        meal: MealType,
        recipe: String,
        product: String,
        suggestion: Option<String>,
    },
    /// No recipes were loaded for a meal type.
    NoRecipes(MealType),
    /// No products were loaded at all.
    NoProducts,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::UnknownIngredient {
                meal,
                recipe,
                product,
                suggestion,
            } => {
                write!(f, "{} recipe '{}' uses unknown product '{}'", meal, recipe, product)?;
                if let Some(s) = suggestion {
                    write!(f, " (did you mean '{}'?)", s)?;
                }
                Ok(())
            }
            CatalogIssue::NoRecipes(meal) => write!(f, "no recipes for {}", meal),
            CatalogIssue::NoProducts => write!(f, "catalog has no products"),
        }
    }
}

/// Closest known product name, if any is similar enough.
fn suggest(catalog: &Catalog, unknown: &str) -> Option<String> {
    let needle = unknown.to_lowercase();
    catalog
        .product_names()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.to_string())
}

/// Check that recipes only reference known products and every meal can be cooked.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if catalog.is_empty() {
        issues.push(CatalogIssue::NoProducts);
    }

    for meal in MealType::ALL {
        let recipes = catalog.recipes(meal);
        if recipes.is_empty() {
            issues.push(CatalogIssue::NoRecipes(meal));
            continue;
        }

        for recipe in recipes {
            // One issue per product per recipe, even if it is listed twice.
            let mut reported = BTreeSet::new();
            for ingredient in &recipe.ingredients {
                if catalog.product(&ingredient.product).is_some()
                    || !reported.insert(ingredient.product.as_str())
                {
                    continue;
                }
                issues.push(CatalogIssue::UnknownIngredient {
                    meal,
                    recipe: recipe.name.clone(),
                    product: ingredient.product.clone(),
                    suggestion: suggest(catalog, &ingredient.product),
                });
            }
        }
    }

    issues
}
