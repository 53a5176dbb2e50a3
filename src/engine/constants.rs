use std::ops::RangeInclusive;

/// Times each meal type is cooked per day.
pub const MEAL_REPEATS: RangeInclusive<u32> = 2..=3;

// ─────────────────────────────────────────────────────────────────────────────
// Unsolicited receipts (gifts, own production)
// ─────────────────────────────────────────────────────────────────────────────

/// A receipt happens on one day in this many.
pub const RECEIPT_ODDS: u32 = 10;

/// Received quantity as a factor of the product's reference mass.
pub const RECEIPT_MASS_FACTOR: RangeInclusive<f64> = 0.5..=1.5;

/// Draws below this are own production.
pub const OWN_PRODUCTION_THRESHOLD: f64 = 0.10;

/// Draws below this (and above the own-production threshold) are gifts.
pub const GIFT_THRESHOLD: f64 = 0.20;

// ─────────────────────────────────────────────────────────────────────────────
// Shopping
// ─────────────────────────────────────────────────────────────────────────────

/// Number of distinct products checked on each shopping trip.
pub const PRODUCTS_CHECKED_PER_DAY: RangeInclusive<usize> = 20..=30;

/// A product that is not low on stock is still bought one time in this many.
pub const IMPULSE_BUY_ODDS: u32 = 20;

/// Pieces bought of a count-based product.
pub const QUANTITY_TO_BUY: RangeInclusive<u32> = 1..=4;

// ─────────────────────────────────────────────────────────────────────────────
// Initial stock
// ─────────────────────────────────────────────────────────────────────────────

/// Initial stock per product, as a multiple of its reference mass.
pub const DEFAULT_STOCK_MULTIPLIER_MIN: u32 = 1;
pub const DEFAULT_STOCK_MULTIPLIER_MAX: u32 = 3;

/// Default simulated horizon in days.
pub const DEFAULT_DAYS: u32 = 14;

pub const DEFAULT_FAMILY_SIZE: u32 = 4;
