use serde::{Deserialize, Serialize};

/// Unit label that marks a product as sold by the piece.
pub const COUNT_UNIT_LABEL: &str = "шт";

/// How a product is measured, which decides the purchase pricing formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    /// Mass or volume (kg, l, ...). A purchase costs one sampled unit price.
    Measured,
    /// Discrete pieces. A purchase costs unit price times quantity.
    Count,
}

impl UnitKind {
    pub fn from_label(unit: &str) -> Self {
        if unit == COUNT_UNIT_LABEL {
            UnitKind::Count
        } else {
            UnitKind::Measured
        }
    }
}

/// Maximum random deviation from the reference mass and price, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub mass: f64,
    pub price: f64,
}

impl Variation {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=100.0).contains(&self.mass) && (0.0..=100.0).contains(&self.price)
    }
}

/// A purchasable product with its reference quantity and price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,

    /// Reference purchase quantity.
    pub mass: f64,

    /// Reference unit price.
    pub price: f64,

    pub unit: String,

    pub unit_kind: UnitKind,

    pub variation: Variation,

    /// Provenance tag taken from the catalog file the product came from.
    pub category: String,
}

impl Product {
    /// Build a product, deriving its unit kind from the unit label.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        price: f64,
        unit: impl Into<String>,
        variation: Variation,
        category: impl Into<String>,
    ) -> Self {
        let unit = unit.into();
        Self {
            name: name.into(),
            mass,
            price,
            unit_kind: UnitKind::from_label(&unit),
            unit,
            variation,
            category: category.into(),
        }
    }

    /// Stock level below which the household goes to buy more.
    #[inline]
    pub fn low_stock_threshold(&self) -> f64 {
        self.mass * 2.0
    }

    /// Basic validation: positive reference values and bounded variation.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.mass > 0.0
            && self.price > 0.0
            && self.variation.is_valid()
    }
}
