use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{Result, SimError};
use crate::models::{MealType, Product, Recipe, Variation};

/// Product entry as written in a catalog file; the name is the map key.
#[derive(Debug, Deserialize)]
struct RawProduct {
    mass: f64,
    price: f64,
    unit: String,
    variation_percent: Variation,
}

/// List `*.yaml` files in a directory, sorted by file name.
fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "yaml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load products from every YAML file in `dir`.
///
/// Each file is a mapping of product name to its attributes; the file stem
/// becomes the product category. A later duplicate name replaces an earlier one.
pub fn load_products<P: AsRef<Path>>(dir: P) -> Result<BTreeMap<String, Product>> {
    let mut products = BTreeMap::new();

    for path in yaml_files(dir.as_ref())? {
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            continue;
        }

        let category = file_stem(&path);
        let entries: BTreeMap<String, RawProduct> = serde_yml::from_str(&content)?;
        debug!(file = %path.display(), count = entries.len(), "loaded product file");

        for (name, raw) in entries {
            let product = Product::new(
                name.clone(),
                raw.mass,
                raw.price,
                raw.unit,
                raw.variation_percent,
                category.clone(),
            );

            if !product.is_valid() {
                return Err(SimError::InvalidCatalog(format!(
                    "{}: product '{}' needs a name, positive mass and price, and variation within 0..=100",
                    path.display(),
                    name
                )));
            }

            if products.insert(name.clone(), product).is_some() {
                warn!(product = %name, file = %path.display(), "duplicate product definition overrides earlier one");
            }
        }
    }

    Ok(products)
}

/// Load recipes from every YAML file in `dir` named after a meal type.
pub fn load_recipes<P: AsRef<Path>>(dir: P) -> Result<BTreeMap<MealType, Vec<Recipe>>> {
    let mut recipes: BTreeMap<MealType, Vec<Recipe>> = BTreeMap::new();

    for path in yaml_files(dir.as_ref())? {
        let stem = file_stem(&path);
        let meal: MealType = match stem.parse() {
            Ok(meal) => meal,
            Err(_) => {
                warn!(file = %path.display(), "skipping recipe file not named after a meal type");
                continue;
            }
        };

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            continue;
        }

        let list: Vec<Recipe> = serde_yml::from_str(&content)?;
        if let Some(bad) = list.iter().find(|r| !r.is_valid()) {
            return Err(SimError::InvalidCatalog(format!(
                "{}: recipe '{}' needs a name and ingredients with positive amounts",
                path.display(),
                bad.name
            )));
        }

        debug!(file = %path.display(), count = list.len(), meal = %meal, "loaded recipe file");
        recipes.entry(meal).or_default().extend(list);
    }

    Ok(recipes)
}

/// Load the full catalog from a product directory and a recipe directory.
pub fn load_catalog<P: AsRef<Path>, Q: AsRef<Path>>(products_dir: P, recipes_dir: Q) -> Result<Catalog> {
    let products = load_products(products_dir)?;
    let recipes = load_recipes(recipes_dir)?;
    Ok(Catalog::new(products, recipes))
}
