//! # EnvMon - Environment Comfort Monitor
//!
//! The sampling and classification core of a Sense HAT-style comfort
//! monitor: collect a fixed count of temperature or humidity readings,
//! classify them against three-band threshold tables, and scroll a
//! color-coded status on an LED matrix.
//!
//! Hardware is injected through two trait seams, so the core runs and tests
//! without a sensor or matrix attached:
//!
//! - [`SensorSource`]: returns one raw reading on demand
//! - [`DisplaySink`]: scrolls a colored message, blocking until done
//!
//! ## Quick Start
//!
//! ```rust
//! use envmon::{
//!     classify, MemoryDisplay, Quantity, Sampler, SamplerConfig, ScriptedSensor,
//!     ThresholdTable,
//! };
//!
//! let mut sensor = ScriptedSensor::new(&[
//!     21.47, 21.55, 21.50, 21.63, 21.48, 21.52, 21.58, 21.61, 21.49, 21.55,
//! ]);
//! let mut display = MemoryDisplay::new();
//!
//! // Collect a session's readings
//! let sampler = Sampler::with_config(SamplerConfig::rapid());
//! let series = sampler.collect(&mut sensor, Quantity::Temperature).unwrap();
//! assert_eq!(series.len(), 10);
//!
//! // Classify the last reading and report
//! let last = series.last().unwrap();
//! let result = classify(last.raw, ThresholdTable::for_quantity(Quantity::Temperature));
//! assert_eq!(result.label, "Comfortable");
//!
//! let mut out = Vec::new();
//! envmon::report(&series, &result, &mut out, &mut display).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`reading`]: quantities, readings, reading series, RGB colors
//! - [`thresholds`]: static comfort threshold tables
//! - [`classifier`]: reading -> label/color classification
//! - [`sensor`]: sensor collaborator trait and software sources
//! - [`display`]: display collaborator trait and software sinks
//! - [`sampler`]: fixed-count sample collection
//! - [`reporter`]: console report + display trigger
//! - [`menu`] / [`session`]: interactive driver

// Modules
pub mod classifier;
pub mod display;
pub mod error;
pub mod menu;
pub mod reading;
pub mod reporter;
pub mod sampler;
pub mod sensor;
pub mod session;
pub mod thresholds;

// Re-exports for convenient access
pub use classifier::{classify, Classification};
pub use display::{ConsoleDisplay, DisplaySink, MemoryDisplay};
pub use error::{DisplayError, MonitorError, Result, SensorError};
pub use menu::{prompt_choice, MenuChoice};
pub use reading::{round_to_tenth, Quantity, Reading, ReadingSeries, Rgb};
pub use reporter::report;
pub use sampler::{Sampler, SamplerConfig};
pub use sensor::{ScriptedSensor, SensorSource, SimulatedSensor};
pub use session::{run_interactive, run_session};
pub use thresholds::{ThresholdBand, ThresholdTable, HUMIDITY_TABLE, TEMPERATURE_TABLE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Readings collected per monitoring session
pub const READINGS_PER_SESSION: usize = 10;
