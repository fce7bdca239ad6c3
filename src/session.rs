//! Session orchestration
//!
//! A session is a linear pipeline: collect readings, classify the last one,
//! report. The interactive driver wraps sessions in the menu loop. Each
//! session owns its series exclusively and discards it on completion; no
//! state survives between sessions.

use crate::classifier::{classify, Classification};
use crate::display::DisplaySink;
use crate::error::{MonitorError, Result};
use crate::menu::{prompt_choice, MenuChoice};
use crate::reading::Quantity;
use crate::sampler::{Sampler, SamplerConfig};
use crate::sensor::SensorSource;
use crate::thresholds::ThresholdTable;
use std::io::{BufRead, Write};

/// Run one monitoring session for a quantity
///
/// Collects the configured number of readings, classifies the last one
/// against the quantity's threshold table (on the raw value, per the
/// classify-then-round-for-display convention), prints the series and
/// status, and scrolls the status on the display. Collaborator failures
/// abort the session and propagate; nothing is retried.
pub fn run_session<S, D, W>(
    quantity: Quantity,
    sensor: &mut S,
    display: &mut D,
    out: &mut W,
    config: SamplerConfig,
) -> Result<Classification>
where
    S: SensorSource + ?Sized,
    D: DisplaySink + ?Sized,
    W: Write,
{
    log::info!("Starting {} session ({} samples)", quantity, config.samples);
    writeln!(out, "\nCollecting {} Data...\n", quantity.label())?;

    let sampler = Sampler::with_config(config);
    let series = sampler.collect(sensor, quantity)?;

    let last = series.last().ok_or(MonitorError::NoReadings)?;
    let result = classify(last.raw, ThresholdTable::for_quantity(quantity));
    log::info!("Session result: {} -> {}", last, result.label);

    crate::reporter::report(&series, &result, out, display)?;
    Ok(result)
}

/// Run the interactive menu loop until the user quits
///
/// Each pass prompts for a quantity and runs one session. Invalid menu
/// input is re-prompted inside [`prompt_choice`]; sensor and display
/// failures are fatal and propagate to the caller, matching the foreground
/// single-user design of the tool.
pub fn run_interactive<S, D, R, W>(
    sensor: &mut S,
    display: &mut D,
    input: &mut R,
    output: &mut W,
    config: SamplerConfig,
) -> Result<()>
where
    S: SensorSource + ?Sized,
    D: DisplaySink + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        match prompt_choice(input, output)? {
            MenuChoice::Quit => {
                log::info!("Leaving menu loop");
                return Ok(());
            }
            MenuChoice::Monitor(quantity) => {
                run_session(quantity, sensor, display, output, config)?;
                writeln!(output)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemoryDisplay;
    use crate::error::SensorError;
    use crate::reading::Rgb;
    use crate::sensor::ScriptedSensor;
    use std::io::Cursor;

    #[test]
    fn test_session_comfortable_temperature() {
        let mut sensor = ScriptedSensor::new(&[
            21.47, 21.55, 21.50, 21.63, 21.48, 21.52, 21.58, 21.61, 21.49, 21.55,
        ]);
        let mut display = MemoryDisplay::new();
        let mut out = Vec::new();

        let result = run_session(
            Quantity::Temperature,
            &mut sensor,
            &mut display,
            &mut out,
            SamplerConfig::rapid(),
        )
        .unwrap();

        assert_eq!(result.label, "Comfortable");
        assert_eq!(result.color, Rgb::GREEN);
        assert_eq!(
            display.messages(),
            &[("Comfortable".to_string(), Rgb::GREEN)]
        );
    }

    #[test]
    fn test_session_boundary_reading_is_comfortable() {
        let mut sensor = ScriptedSensor::new(&[15.0]);
        let mut display = MemoryDisplay::new();
        let mut out = Vec::new();
        let config = SamplerConfig {
            samples: 1,
            sample_delay: std::time::Duration::ZERO,
        };

        let result = run_session(
            Quantity::Temperature,
            &mut sensor,
            &mut display,
            &mut out,
            config,
        )
        .unwrap();

        assert_eq!(result.label, "Comfortable");
    }

    #[test]
    fn test_session_boundary_humidity_is_sticky() {
        let mut sensor = ScriptedSensor::new(&[65.0]);
        let mut display = MemoryDisplay::new();
        let mut out = Vec::new();
        let config = SamplerConfig {
            samples: 1,
            sample_delay: std::time::Duration::ZERO,
        };

        let result = run_session(
            Quantity::Humidity,
            &mut sensor,
            &mut display,
            &mut out,
            config,
        )
        .unwrap();

        assert_eq!(result.label, "Sticky");
        assert_eq!(result.color, Rgb::YELLOW);
    }

    #[test]
    fn test_session_sensor_failure_aborts() {
        let mut sensor = ScriptedSensor::new(&[20.0, 20.1]);
        let mut display = MemoryDisplay::new();
        let mut out = Vec::new();

        let err = run_session(
            Quantity::Temperature,
            &mut sensor,
            &mut display,
            &mut out,
            SamplerConfig::rapid(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            MonitorError::Sensor(SensorError::Exhausted { yielded: 2 })
        );
        assert!(display.messages().is_empty());
    }

    #[test]
    fn test_interactive_reprompt_then_session_then_quit() {
        let mut sensor = ScriptedSensor::new(&[
            21.0, 21.1, 21.2, 21.3, 21.4, 21.5, 21.6, 21.7, 21.8, 21.9,
        ]);
        let mut display = MemoryDisplay::new();
        let mut input = Cursor::new("3\n1\nq\n".to_string());
        let mut output = Vec::new();

        run_interactive(
            &mut sensor,
            &mut display,
            &mut input,
            &mut output,
            SamplerConfig::rapid(),
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Invalid choice"));
        assert!(text.contains("Status: Comfortable (Scrolling Green on LED Matrix)"));
        assert_eq!(display.messages().len(), 1);
    }

    #[test]
    fn test_interactive_quits_on_eof() {
        let mut sensor = ScriptedSensor::new(&[]);
        let mut display = MemoryDisplay::new();
        let mut input = Cursor::new(String::new());
        let mut output = Vec::new();

        run_interactive(
            &mut sensor,
            &mut display,
            &mut input,
            &mut output,
            SamplerConfig::rapid(),
        )
        .unwrap();

        assert!(display.messages().is_empty());
    }
}
