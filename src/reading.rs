//! Core data types for the comfort monitor
//!
//! This module defines the types shared by every component:
//! - Monitored quantities and their units
//! - Sensor readings and per-session reading series
//! - RGB colors for the LED matrix

use std::fmt;

/// A quantity the monitor can sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quantity {
    /// Ambient temperature in degrees Celsius
    #[default]
    Temperature,
    /// Relative humidity in percent
    Humidity,
}

impl Quantity {
    /// Unit suffix printed after a reading value
    pub const fn unit(&self) -> &'static str {
        match self {
            Quantity::Temperature => "°C",
            Quantity::Humidity => "%",
        }
    }

    /// Human-readable name of the quantity
    pub const fn label(&self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::Humidity => "Humidity",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An RGB color for the LED matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    /// Create a color from raw channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// Named palette colors print their name, anything else as `#rrggbb`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rgb::RED => write!(f, "Red"),
            Rgb::GREEN => write!(f, "Green"),
            Rgb::BLUE => write!(f, "Blue"),
            Rgb::YELLOW => write!(f, "Yellow"),
            Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Round a value to one decimal place (the display precision)
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One sensor sample, immutable once recorded
///
/// Carries both the raw sensor value and the value rounded to one decimal
/// place. Classification acts on `raw`; `value` is what gets stored and
/// printed, so the displayed number and its precision never drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Quantity this reading measures
    pub quantity: Quantity,
    /// Raw value as returned by the sensor
    pub raw: f64,
    /// Raw value rounded to one decimal place
    pub value: f64,
}

impl Reading {
    /// Record a raw sensor value, rounding it for display
    pub fn record(quantity: Quantity, raw: f64) -> Self {
        Self {
            quantity,
            raw,
            value: round_to_tenth(raw),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value, self.quantity.unit())
    }
}

/// An ordered series of readings of one quantity, gathered in one session
///
/// Order is insertion order. The fixed sample count (10 per session) is
/// enforced by the [`Sampler`](crate::sampler::Sampler) loop, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSeries {
    quantity: Quantity,
    readings: Vec<Reading>,
}

impl ReadingSeries {
    /// Create an empty series for a quantity
    pub fn new(quantity: Quantity) -> Self {
        Self {
            quantity,
            readings: Vec::new(),
        }
    }

    /// Create an empty series with capacity for a known sample count
    pub fn with_capacity(quantity: Quantity, capacity: usize) -> Self {
        Self {
            quantity,
            readings: Vec::with_capacity(capacity),
        }
    }

    /// Append a reading in collection order
    pub fn push(&mut self, reading: Reading) {
        debug_assert_eq!(reading.quantity, self.quantity);
        self.readings.push(reading);
    }

    /// Quantity this series measures
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Number of readings collected so far
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the series has no readings yet
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Most recently collected reading
    pub fn last(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// Iterate readings in collection order
    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_tenth() {
        assert_relative_eq!(round_to_tenth(21.47), 21.5);
        assert_relative_eq!(round_to_tenth(21.55), 21.6); // half rounds away from zero
        assert_relative_eq!(round_to_tenth(21.63), 21.6);
        assert_relative_eq!(round_to_tenth(-0.04), 0.0);
        assert_relative_eq!(round_to_tenth(-0.05), -0.1);
    }

    #[test]
    fn test_reading_records_raw_and_rounded() {
        let reading = Reading::record(Quantity::Temperature, 21.47);
        assert_relative_eq!(reading.raw, 21.47);
        assert_relative_eq!(reading.value, 21.5);
        assert_eq!(format!("{}", reading), "21.5 °C");
    }

    #[test]
    fn test_quantity_units() {
        assert_eq!(Quantity::Temperature.unit(), "°C");
        assert_eq!(Quantity::Humidity.unit(), "%");
        assert_eq!(format!("{}", Quantity::Humidity), "Humidity");
    }

    #[test]
    fn test_rgb_display_names() {
        assert_eq!(format!("{}", Rgb::GREEN), "Green");
        assert_eq!(format!("{}", Rgb::YELLOW), "Yellow");
        assert_eq!(format!("{}", Rgb::new(16, 32, 48)), "#102030");
    }

    #[test]
    fn test_series_preserves_insertion_order() {
        let mut series = ReadingSeries::new(Quantity::Humidity);
        for raw in [48.2, 51.9, 47.3] {
            series.push(Reading::record(Quantity::Humidity, raw));
        }

        assert_eq!(series.len(), 3);
        let values: Vec<f64> = series.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![48.2, 51.9, 47.3]);
        assert_relative_eq!(series.last().unwrap().raw, 47.3);
    }

    #[test]
    fn test_empty_series() {
        let series = ReadingSeries::new(Quantity::Temperature);
        assert!(series.is_empty());
        assert!(series.last().is_none());
    }
}
