//! Example 01: Scoring a Live Poll
//!
//! Builds one snapshot the way a poll of the sensor board returns it and
//! shows the per-gas scores, the aggregate in both modes, and the gauge
//! segment the dashboard would light up.
//!
//! Run with: `cargo run --example 01_live_score`

use airscore_core::{
    AggregationMode, ClimateReading, GasReading, PollConfig, ScoreBand, ScoreEngine, Snapshot,
};

fn main() {
    let config = PollConfig::default();
    println!("Polling {} every {:?}", config.endpoints().mq135, config.sampling_interval());

    // MQ-135 reports CO2 and alcohol; acetone comes from the same board
    let mq135: GasReading = [("CO2", 180.0_f32), ("CO", 4.2), ("Alcohol", 35.0), ("Aceton", 90.0)]
        .into_iter()
        .collect();
    // MQ-2 has its own alcohol channel, ignored while MQ-135 reports one
    let mq2: GasReading = [("LPG", 18.0_f32), ("CO", 6.1), ("Propane", 22.0), ("Alcohol", 400.0)]
        .into_iter()
        .collect();
    let climate = ClimateReading { temperature: 23.5, humidity: 41.0 };

    let snapshot = Snapshot::new(mq135, mq2, climate);
    let engine = ScoreEngine::default();

    println!("\nPer-gas scores:");
    for (gas, score) in engine.gas_scores(&snapshot) {
        if let Some((instrument, value)) = snapshot.concentration(gas) {
            println!("  {gas:<8} {value:>7.1} ppm ({}) → {score:.1}", instrument.name());
        }
    }

    for mode in [AggregationMode::Average, AggregationMode::Worst] {
        let score = engine.air_quality_score(&snapshot, mode);
        println!(
            "\n{mode:?}: score {score}, clean air {}%, band {}",
            100 - score,
            ScoreBand::of(score).label()
        );
    }

    println!(
        "\nClimate: {:.1} °C, {:.0} % RH",
        snapshot.climate.temperature, snapshot.climate.humidity
    );
}
