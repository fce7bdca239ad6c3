//! Comfort threshold tables
//!
//! This module defines the static three-band threshold tables used to
//! classify readings. Bands of a table are contiguous and exhaustive:
//! every finite value maps to exactly one band, with no overlap and no gap.

use crate::reading::{Quantity, Rgb};

/// A labeled, colored numeric range
///
/// `None` bounds are unbounded. Boundary values (15, 22, 55, 65) belong to
/// the inclusive middle band, not the adjacent extreme band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    /// Lower bound, `None` = unbounded below
    pub lower: Option<f64>,
    /// Whether `lower` itself is inside the band
    pub lower_inclusive: bool,
    /// Upper bound, `None` = unbounded above
    pub upper: Option<f64>,
    /// Whether `upper` itself is inside the band
    pub upper_inclusive: bool,
    /// Comfort label, e.g. "Comfortable"
    pub label: &'static str,
    /// LED matrix color for this band
    pub color: Rgb,
}

impl ThresholdBand {
    /// Check whether a value falls inside this band
    pub fn contains(&self, value: f64) -> bool {
        let above = match (self.lower, self.lower_inclusive) {
            (None, _) => true,
            (Some(lower), true) => value >= lower,
            (Some(lower), false) => value > lower,
        };
        let below = match (self.upper, self.upper_inclusive) {
            (None, _) => true,
            (Some(upper), true) => value <= upper,
            (Some(upper), false) => value < upper,
        };
        above && below
    }
}

/// Ordered band table for one quantity
///
/// Always exactly three bands, ascending, first unbounded below and last
/// unbounded above. Only the two const tables below are ever constructed,
/// which is what makes classification total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    quantity: Quantity,
    bands: [ThresholdBand; 3],
}

/// Cold <15°C, Comfortable 15–22°C, Hot >22°C
pub const TEMPERATURE_TABLE: ThresholdTable = ThresholdTable {
    quantity: Quantity::Temperature,
    bands: [
        ThresholdBand {
            lower: None,
            lower_inclusive: false,
            upper: Some(15.0),
            upper_inclusive: false,
            label: "Cold",
            color: Rgb::BLUE,
        },
        ThresholdBand {
            lower: Some(15.0),
            lower_inclusive: true,
            upper: Some(22.0),
            upper_inclusive: true,
            label: "Comfortable",
            color: Rgb::GREEN,
        },
        ThresholdBand {
            lower: Some(22.0),
            lower_inclusive: false,
            upper: None,
            upper_inclusive: false,
            label: "Hot",
            color: Rgb::RED,
        },
    ],
};

/// Dry <55%, Sticky 55–65%, Oppressive >65%
pub const HUMIDITY_TABLE: ThresholdTable = ThresholdTable {
    quantity: Quantity::Humidity,
    bands: [
        ThresholdBand {
            lower: None,
            lower_inclusive: false,
            upper: Some(55.0),
            upper_inclusive: false,
            label: "Dry",
            color: Rgb::BLUE,
        },
        ThresholdBand {
            lower: Some(55.0),
            lower_inclusive: true,
            upper: Some(65.0),
            upper_inclusive: true,
            label: "Sticky",
            color: Rgb::YELLOW,
        },
        ThresholdBand {
            lower: Some(65.0),
            lower_inclusive: false,
            upper: None,
            upper_inclusive: false,
            label: "Oppressive",
            color: Rgb::RED,
        },
    ],
};

impl ThresholdTable {
    /// Look up the static table for a quantity
    ///
    /// Both quantities are statically known, so there is no error path.
    pub const fn for_quantity(quantity: Quantity) -> &'static ThresholdTable {
        match quantity {
            Quantity::Temperature => &TEMPERATURE_TABLE,
            Quantity::Humidity => &HUMIDITY_TABLE,
        }
    }

    /// Quantity this table classifies
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Ordered bands, low to high
    pub const fn bands(&self) -> &[ThresholdBand; 3] {
        &self.bands
    }
}
