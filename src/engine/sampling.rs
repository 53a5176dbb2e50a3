use std::collections::BTreeMap;

use rand::Rng;

use crate::catalog::Catalog;
use crate::engine::constants::{GIFT_THRESHOLD, OWN_PRODUCTION_THRESHOLD};
use crate::models::{Product, Provenance, PurchaseLocation};

/// Round to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sample a `(price, mass)` pair around the product's reference values.
///
/// A fair coin picks the side: either both values are drawn from
/// `[base, base + deviation]` or both from `[base - deviation, base]`,
/// where the deviation is the product's variation percent of the base.
pub fn sample_price_and_mass(rng: &mut impl Rng, product: &Product) -> (f64, f64) {
    let price = product.price;
    let mass = product.mass;
    let price_dev = price * product.variation.price / 100.0;
    let mass_dev = mass * product.variation.mass / 100.0;

    if rng.gen_bool(0.5) {
        (
            round2(rng.gen_range(price..=price + price_dev)),
            round2(rng.gen_range(mass..=mass + mass_dev)),
        )
    } else {
        (
            round2(rng.gen_range(price - price_dev..=price)),
            round2(rng.gen_range(mass - mass_dev..=mass)),
        )
    }
}

/// Provenance of a receipt for a uniform draw in `[0, 1)`.
pub fn receipt_provenance(draw: f64) -> Provenance {
    if draw < OWN_PRODUCTION_THRESHOLD {
        Provenance::OwnProduction
    } else if draw < GIFT_THRESHOLD {
        Provenance::Gift
    } else {
        Provenance::PreviouslyPurchased
    }
}

pub fn random_provenance(rng: &mut impl Rng) -> Provenance {
    Provenance::ALL[rng.gen_range(0..Provenance::ALL.len())]
}

pub fn random_location(rng: &mut impl Rng) -> PurchaseLocation {
    PurchaseLocation::ALL[rng.gen_range(0..PurchaseLocation::ALL.len())]
}

/// Stock every catalog product with its reference mass times a random
/// whole multiplier in `[min_multiplier, max_multiplier]`.
pub fn generate_initial_stock(
    rng: &mut impl Rng,
    catalog: &Catalog,
    min_multiplier: u32,
    max_multiplier: u32,
) -> BTreeMap<String, f64> {
    catalog
        .products()
        .map(|p| {
            let multiplier = rng.gen_range(min_multiplier..=max_multiplier);
            (p.name.clone(), p.mass * multiplier as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(-0.504), -0.5);
    }

    #[test]
    fn test_zero_variation_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let milk = Product::new("milk", 1.0, 2.0, "l", Variation::none(), "dairy");
        for _ in 0..20 {
            assert_eq!(sample_price_and_mass(&mut rng, &milk), (2.0, 1.0));
        }
    }

    #[test]
    fn test_variation_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let cheese = Product::new(
            "cheese",
            0.4,
            300.0,
            "кг",
            Variation {
                mass: 10.0,
                price: 20.0,
            },
            "dairy",
        );

        let mut above = 0;
        for _ in 0..500 {
            let (price, mass) = sample_price_and_mass(&mut rng, &cheese);
            assert!((240.0..=360.0).contains(&price), "price {}", price);
            assert!((0.36..=0.44).contains(&mass), "mass {}", mass);
            // Price and mass always deviate to the same side.
            if price > 300.0 {
                above += 1;
                assert!(mass >= 0.4);
            } else if price < 300.0 {
                assert!(mass <= 0.4);
            }
        }
        assert!(above > 150 && above < 350);
    }

    #[test]
    fn test_receipt_provenance_thresholds() {
        assert_eq!(receipt_provenance(0.0), Provenance::OwnProduction);
        assert_eq!(receipt_provenance(0.099), Provenance::OwnProduction);
        assert_eq!(receipt_provenance(0.10), Provenance::Gift);
        assert_eq!(receipt_provenance(0.199), Provenance::Gift);
        assert_eq!(receipt_provenance(0.20), Provenance::PreviouslyPurchased);
        assert_eq!(receipt_provenance(0.99), Provenance::PreviouslyPurchased);
    }

    #[test]
    fn test_initial_stock_is_whole_multiple_of_mass() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = Catalog::from_parts(
            vec![
                Product::new("milk", 1.0, 2.0, "l", Variation::none(), "dairy"),
                Product::new("flour", 2.0, 1.5, "кг", Variation::none(), "dry"),
            ],
            vec![],
        );

        let stock = generate_initial_stock(&mut rng, &catalog, 1, 3);
        assert_eq!(stock.len(), 2);
        for (name, qty) in &stock {
            let mass = catalog.product(name).unwrap().mass;
            let multiplier = qty / mass;
            assert!([1.0, 2.0, 3.0].contains(&multiplier), "{} x{}", name, multiplier);
        }
    }
}
