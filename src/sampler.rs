//! Sample collection
//!
//! This module collects a fixed count of readings from a sensor source,
//! rounding and storing each in collection order. Reads are sequential and
//! blocking: repeated reads smooth out sensor noise, so they must reflect
//! real elapsed time between samples.

use crate::error::SensorError;
use crate::reading::{Quantity, Reading, ReadingSeries};
use crate::sensor::SensorSource;
use std::thread;
use std::time::Duration;

/// Configuration for sample collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of readings per session
    pub samples: usize,
    /// Settling delay between consecutive reads
    pub sample_delay: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples: 10,
            sample_delay: Duration::from_secs(5),
        }
    }
}

impl SamplerConfig {
    /// Create config without settling delay (tests, simulated sensors)
    pub const fn rapid() -> Self {
        Self {
            samples: 10,
            sample_delay: Duration::ZERO,
        }
    }
}

/// Collects readings from a sensor source
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Create a sampler with default configuration
    pub fn new() -> Self {
        Self {
            config: SamplerConfig::default(),
        }
    }

    /// Create a sampler with custom configuration
    pub fn with_config(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Collect one session's worth of readings
    ///
    /// Pulls exactly `config.samples` values, rejecting non-finite ones,
    /// rounding each to one decimal place and appending in collection order.
    /// Each reading is logged as it arrives so callers can show incremental
    /// progress independent of final reporting. A sensor error aborts the
    /// session; there is no retry.
    pub fn collect<S: SensorSource + ?Sized>(
        &self,
        sensor: &mut S,
        quantity: Quantity,
    ) -> Result<ReadingSeries, SensorError> {
        let mut series = ReadingSeries::with_capacity(quantity, self.config.samples);

        for i in 0..self.config.samples {
            let raw = sensor.sample(quantity)?;
            if !raw.is_finite() {
                return Err(SensorError::InvalidReading);
            }

            let reading = Reading::record(quantity, raw);
            log::info!(
                "{} [{}/{}]: {}",
                quantity.label(),
                i + 1,
                self.config.samples,
                reading
            );
            series.push(reading);

            if !self.config.sample_delay.is_zero() && i + 1 < self.config.samples {
                thread::sleep(self.config.sample_delay);
            }
        }

        Ok(series)
    }
}
