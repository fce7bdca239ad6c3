//! Sensor source abstraction
//!
//! This module provides the trait for sensor collaborators and two software
//! implementations: a scripted source for tests and replay, and a
//! deterministic simulated source so demos run without hardware.
//!
//! Real hardware adapters (Sense HAT over I²C and friends) implement
//! [`SensorSource`] out of tree; the trait is the seam where they plug in.

use crate::error::SensorError;
use crate::reading::Quantity;
use std::collections::VecDeque;

/// Trait for sensor collaborators
///
/// Each call returns one current instantaneous reading or fails with a
/// hardware/I-O error. Reads are blocking; there is no retry and no timeout
/// at this layer.
pub trait SensorSource {
    /// Read the current temperature in degrees Celsius
    fn temperature_c(&mut self) -> Result<f64, SensorError>;

    /// Read the current relative humidity in percent
    fn relative_humidity(&mut self) -> Result<f64, SensorError>;

    /// Read the current value of a quantity
    fn sample(&mut self, quantity: Quantity) -> Result<f64, SensorError> {
        match quantity {
            Quantity::Temperature => self.temperature_c(),
            Quantity::Humidity => self.relative_humidity(),
        }
    }
}

/// A sensor that replays a fixed queue of values
///
/// Both `temperature_c` and `relative_humidity` pop from the same queue, so
/// a script drives whichever quantity the session asks for. Draining the
/// queue yields [`SensorError::Exhausted`], which is also the easiest way to
/// exercise the fatal-sensor-failure path in tests.
#[derive(Debug, Clone)]
pub struct ScriptedSensor {
    values: VecDeque<f64>,
    yielded: usize,
}

impl ScriptedSensor {
    /// Create a scripted sensor from a value sequence
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            yielded: 0,
        }
    }

    /// Number of values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next_value(&mut self) -> Result<f64, SensorError> {
        match self.values.pop_front() {
            Some(value) => {
                self.yielded += 1;
                Ok(value)
            }
            None => Err(SensorError::Exhausted {
                yielded: self.yielded,
            }),
        }
    }
}

impl SensorSource for ScriptedSensor {
    fn temperature_c(&mut self) -> Result<f64, SensorError> {
        self.next_value()
    }

    fn relative_humidity(&mut self) -> Result<f64, SensorError> {
        self.next_value()
    }
}

/// A deterministic simulated sensor for demos
///
/// Produces small noise around a fixed baseline (21 °C / 48 % RH) using a
/// simple LCG, so the same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SimulatedSensor {
    rng_state: u64,
    base_temperature_c: f64,
    base_humidity_pct: f64,
}

impl SimulatedSensor {
    /// Create a simulated sensor with a given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng_state: seed,
            base_temperature_c: 21.0,
            base_humidity_pct: 48.0,
        }
    }

    /// Override the baselines the noise is centered on
    pub fn with_baselines(mut self, temperature_c: f64, humidity_pct: f64) -> Self {
        self.base_temperature_c = temperature_c;
        self.base_humidity_pct = humidity_pct;
        self
    }

    /// Simple PRNG, uniform in [0, 1)
    fn next_random(&mut self) -> f64 {
        self.rng_state = self.rng_state.wrapping_mul(1103515245).wrapping_add(12345);
        ((self.rng_state >> 16) & 0x7fff) as f64 / 32768.0
    }

    /// Noise in [-spread, +spread)
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_random() * 2.0 - 1.0) * spread
    }
}

impl SensorSource for SimulatedSensor {
    fn temperature_c(&mut self) -> Result<f64, SensorError> {
        let jitter = self.jitter(0.8);
        Ok(self.base_temperature_c + jitter)
    }

    fn relative_humidity(&mut self) -> Result<f64, SensorError> {
        let jitter = self.jitter(3.0);
        Ok(self.base_humidity_pct + jitter)
    }
}
