//! Interactive comfort monitor demo
//!
//! Runs the full menu loop against a simulated sensor and a console
//! stand-in for the LED matrix.
//!
//! Run with: `cargo run --example interactive_monitor`
//! (`RUST_LOG=info` shows per-sample progress)

use envmon::{run_interactive, ConsoleDisplay, SamplerConfig, SimulatedSensor};
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn main() -> envmon::Result<()> {
    env_logger::init();

    println!("=== EnvMon Interactive Monitor ===\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(1);
    let mut sensor = SimulatedSensor::new(seed);
    let mut display = ConsoleDisplay::new();

    // One second between samples; the real tool settles for five.
    let config = SamplerConfig {
        samples: 10,
        sample_delay: Duration::from_secs(1),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_interactive(&mut sensor, &mut display, &mut input, &mut output, config)
}
