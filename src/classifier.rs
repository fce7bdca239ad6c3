//! Reading classification
//!
//! This module maps a numeric reading to a comfort label and display color
//! through a threshold table. Classification is a pure function: no state,
//! no side effects, total over all finite values.

use crate::reading::Rgb;
use crate::thresholds::{ThresholdBand, ThresholdTable};

/// Classification result: a comfort label plus its display color
///
/// Derived on demand from a reading and a table, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Comfort label, e.g. "Comfortable"
    pub label: &'static str,
    /// Color to scroll on the LED matrix
    pub color: Rgb,
}

impl Classification {
    fn from_band(band: &ThresholdBand) -> Self {
        Self {
            label: band.label,
            color: band.color,
        }
    }
}

/// Classify a value against a threshold table
///
/// Walks the bands in ascending order and returns the first match. The
/// tables guarantee a final open-ended band, so every finite value
/// classifies; boundary values land in the inclusive middle band.
pub fn classify(value: f64, table: &ThresholdTable) -> Classification {
    let [low, mid, high] = table.bands();
    if low.contains(value) {
        Classification::from_band(low)
    } else if mid.contains(value) {
        Classification::from_band(mid)
    } else {
        Classification::from_band(high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::{HUMIDITY_TABLE, TEMPERATURE_TABLE};

    #[test]
    fn test_temperature_bands() {
        assert_eq!(classify(-5.0, &TEMPERATURE_TABLE).label, "Cold");
        assert_eq!(classify(14.9, &TEMPERATURE_TABLE).label, "Cold");
        assert_eq!(classify(18.0, &TEMPERATURE_TABLE).label, "Comfortable");
        assert_eq!(classify(22.1, &TEMPERATURE_TABLE).label, "Hot");
        assert_eq!(classify(40.0, &TEMPERATURE_TABLE).label, "Hot");
    }

    #[test]
    fn test_temperature_boundaries_are_comfortable() {
        assert_eq!(classify(15.0, &TEMPERATURE_TABLE).label, "Comfortable");
        assert_eq!(classify(22.0, &TEMPERATURE_TABLE).label, "Comfortable");
    }

    #[test]
    fn test_temperature_colors() {
        assert_eq!(classify(10.0, &TEMPERATURE_TABLE).color, Rgb::BLUE);
        assert_eq!(classify(20.0, &TEMPERATURE_TABLE).color, Rgb::GREEN);
        assert_eq!(classify(30.0, &TEMPERATURE_TABLE).color, Rgb::RED);
    }

    #[test]
    fn test_humidity_bands() {
        assert_eq!(classify(30.0, &HUMIDITY_TABLE).label, "Dry");
        assert_eq!(classify(54.9, &HUMIDITY_TABLE).label, "Dry");
        assert_eq!(classify(60.0, &HUMIDITY_TABLE).label, "Sticky");
        assert_eq!(classify(65.1, &HUMIDITY_TABLE).label, "Oppressive");
        assert_eq!(classify(90.0, &HUMIDITY_TABLE).label, "Oppressive");
    }

    #[test]
    fn test_humidity_boundaries_are_sticky() {
        assert_eq!(classify(55.0, &HUMIDITY_TABLE).label, "Sticky");
        assert_eq!(classify(65.0, &HUMIDITY_TABLE).label, "Sticky");
    }

    #[test]
    fn test_humidity_colors() {
        assert_eq!(classify(60.0, &HUMIDITY_TABLE).color, Rgb::YELLOW);
        assert_eq!(classify(80.0, &HUMIDITY_TABLE).color, Rgb::RED);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let first = classify(21.5, &TEMPERATURE_TABLE);
        let second = classify(21.5, &TEMPERATURE_TABLE);
        assert_eq!(first, second);
    }

    /// Random values over the realistic sensor domain always classify into
    /// one of the three labels of the right table.
    #[test]
    fn test_classification_total_over_domain() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let value: f64 = rng.gen_range(-50.0..150.0);
            let label = classify(value, &TEMPERATURE_TABLE).label;
            assert!(["Cold", "Comfortable", "Hot"].contains(&label));
            let label = classify(value, &HUMIDITY_TABLE).label;
            assert!(["Dry", "Sticky", "Oppressive"].contains(&label));
        }
    }
}
