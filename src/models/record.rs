use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a purchase was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PurchaseLocation {
    #[serde(rename = "магазин")]
    Store,
    #[serde(rename = "рынок")]
    Market,
    #[serde(rename = "физ. лицо")]
    PrivateSeller,
}

impl PurchaseLocation {
    pub const ALL: [PurchaseLocation; 3] = [
        PurchaseLocation::Store,
        PurchaseLocation::Market,
        PurchaseLocation::PrivateSeller,
    ];

    /// Label written to the report.
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseLocation::Store => "магазин",
            PurchaseLocation::Market => "рынок",
            PurchaseLocation::PrivateSeller => "физ. лицо",
        }
    }
}

impl fmt::Display for PurchaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where consumed or received food originally came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "куплено ранее")]
    PreviouslyPurchased,
    #[serde(rename = "из личного подсобного хозяйства")]
    OwnProduction,
    #[serde(rename = "в подарок")]
    Gift,
}

impl Provenance {
    pub const ALL: [Provenance; 3] = [
        Provenance::PreviouslyPurchased,
        Provenance::OwnProduction,
        Provenance::Gift,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Provenance::PreviouslyPurchased => "куплено ранее",
            Provenance::OwnProduction => "из личного подсобного хозяйства",
            Provenance::Gift => "в подарок",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the purchase report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(rename = "Дата")]
    pub date: NaiveDate,

    #[serde(rename = "Что купили")]
    pub product: String,

    #[serde(rename = "Где купили")]
    pub location: PurchaseLocation,

    #[serde(rename = "Сколько купили")]
    pub quantity: f64,

    #[serde(rename = "Единица измерения")]
    pub unit: String,

    #[serde(rename = "Сколько уплачено")]
    pub paid: f64,

    #[serde(rename = "Примечание")]
    pub note: String,
}

/// One row of the consumption report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    #[serde(rename = "Дата")]
    pub date: NaiveDate,

    #[serde(rename = "Название продукта")]
    pub product: String,

    #[serde(rename = "Откуда получено")]
    pub provenance: Provenance,

    #[serde(rename = "Сколько потреблено")]
    pub quantity: f64,

    #[serde(rename = "Единица измерения")]
    pub unit: String,

    #[serde(rename = "Примечание")]
    pub note: String,
}
