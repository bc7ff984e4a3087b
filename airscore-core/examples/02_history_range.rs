//! Example 02: History Range Reduction
//!
//! Generates two days of readings at one-minute resolution, then reduces
//! them for a single-day view and a two-day view and scores each point.
//!
//! Run with: `cargo run --example 02_history_range`

use airscore_core::{
    average_score, score_series, AggregationMode, ScoreEngine, SeriesReducer, Snapshot,
    TimestampedLog,
};
use chrono::{NaiveDate, Utc};

/// 2024-03-10T00:00:00Z
const START: i64 = 1_710_028_800;
const MINUTES: i64 = 2 * 24 * 60;

fn reading(minute: i64) -> Snapshot {
    // CO2 climbs during the day and falls back overnight
    let hour = (minute / 60) % 24;
    let co2 = 60.0 + (12 - (hour - 12).abs()) as f32 * 25.0;

    let mut snapshot = Snapshot::default();
    snapshot.mq135.insert("CO2", co2);
    snapshot.mq135.insert("Alcohol", 40.0);
    snapshot.climate.temperature = 20.0 + hour as f32 * 0.2;
    snapshot.climate.humidity = 50.0;
    snapshot
}

fn main() {
    let log: TimestampedLog = (0..MINUTES).map(|m| (START + m * 60, reading(m))).collect();
    let reducer = SeriesReducer::default();
    let engine = ScoreEngine::default();

    let first = NaiveDate::from_ymd_opt(2024, 3, 10);
    let second = NaiveDate::from_ymd_opt(2024, 3, 11);

    for (title, end) in [("Single day", None), ("Two days", second)] {
        let points = reducer.filter_and_downsample(&log, first, end, &Utc);
        let trend = score_series(&points, &engine, AggregationMode::Average, &Utc);

        println!("{title}: {} of {} readings plotted", points.len(), log.len());
        for point in &trend {
            println!(
                "  {:<24} score {:>3}  clean {:>3}%",
                point.label,
                point.score,
                point.clean_air_percentage()
            );
        }
        if let Some(average) = average_score(&trend) {
            println!("  average score {average:.1}\n");
        }
    }
}
