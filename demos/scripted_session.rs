//! Scripted session demo
//!
//! Replays a fixed temperature sequence through the pipeline and prints
//! each sample with its interim classification, without any hardware.
//!
//! Run with: `cargo run --example scripted_session`

use envmon::{
    classify, report, MemoryDisplay, Quantity, Sampler, SamplerConfig, ScriptedSensor,
    ThresholdTable,
};

fn main() -> envmon::Result<()> {
    env_logger::init();

    println!("=== EnvMon Scripted Session ===\n");

    let script = [
        21.47, 21.55, 21.50, 21.63, 21.48, 21.52, 21.58, 21.61, 21.49, 21.55,
    ];
    let mut sensor = ScriptedSensor::new(&script);
    let table = ThresholdTable::for_quantity(Quantity::Temperature);

    let sampler = Sampler::with_config(SamplerConfig::rapid());
    let series = sampler.collect(&mut sensor, Quantity::Temperature)?;

    println!("{:<5} {:<12} {:<12}", "N°", "Temp (°C)", "Status");
    println!("{}", "-".repeat(30));
    for (i, reading) in series.iter().enumerate() {
        let interim = classify(reading.raw, table);
        println!("{:<5} {:<12.1} {:<12}", i + 1, reading.value, interim.label);
    }
    println!("{}", "-".repeat(30));
    println!();

    let last = series.last().expect("script is non-empty");
    let result = classify(last.raw, table);

    let mut display = MemoryDisplay::new();
    let mut out = std::io::stdout();
    report(&series, &result, &mut out, &mut display)?;

    println!(
        "\nDisplay would scroll: {:?}",
        display.messages().first().expect("one scroll per session")
    );
    Ok(())
}
