//! History view integration tests
//!
//! Drive the full path a history chart takes: an unordered log arrives,
//! is reduced to a date range, and each remaining point is scored.

use airscore_core::{
    average_score, score_series, series::DayRange, AggregationMode, ScoreEngine, SeriesReducer,
    Snapshot, TimestampedLog, UnixSeconds,
};
use chrono::{NaiveDate, Utc};
use proptest::prelude::*;

/// 2024-03-10T00:00:00Z
const DAY_START: UnixSeconds = 1_710_028_800;
const SECONDS_PER_DAY: i64 = 86_400;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).expect("valid March date")
}

fn co2_snapshot(co2: f32) -> Snapshot {
    let mut snapshot = Snapshot::default();
    snapshot.mq135.insert("CO2", co2);
    snapshot.mq135.insert("CO", 3.0);
    snapshot.mq2.insert("LPG", 12.0);
    snapshot.climate.temperature = 22.0;
    snapshot.climate.humidity = 48.0;
    snapshot
}

#[test]
fn unordered_log_is_reduced_in_time_order() {
    // Delivered newest first, as a cloud document often is
    let log: TimestampedLog = [2000, 1000, 3000]
        .into_iter()
        .rev()
        .map(|offset| (DAY_START + offset, co2_snapshot(offset as f32 / 20.0)))
        .collect();

    let points = SeriesReducer::default().filter_and_downsample(&log, Some(date(10)), None, &Utc);
    let keys: Vec<_> = points.iter().map(|(ts, _)| *ts).collect();

    assert_eq!(keys, vec![DAY_START + 1000, DAY_START + 2000, DAY_START + 3000]);
}

#[test]
fn two_point_trend() {
    let log: TimestampedLog = [(1000, co2_snapshot(50.0)), (2000, co2_snapshot(150.0))]
        .into_iter()
        .collect();

    let day = DayRange::from_bounds(0, SECONDS_PER_DAY - 1);
    let points = SeriesReducer::default().reduce(&log, day);
    let trend = score_series(&points, &ScoreEngine::default(), AggregationMode::Average, &Utc);

    let scores: Vec<_> = trend.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![15, 45]);
    assert_eq!(average_score(&trend), Some(30.0));
}

#[test]
fn week_of_minute_data_reduces_to_chart_size() {
    // One reading a minute for a week
    let log: TimestampedLog = (0..7 * 1440)
        .map(|i| (DAY_START + i * 60, co2_snapshot((i % 600) as f32)))
        .collect();

    let reducer = SeriesReducer::default();
    let points = reducer.filter_and_downsample(&log, Some(date(11)), Some(date(12)), &Utc);

    // 2880 entries / 15 = 192 → exactly 15 points
    assert_eq!(points.len(), 15);
    assert_eq!(points[0].0, DAY_START + SECONDS_PER_DAY);
    assert!(points.windows(2).all(|w| w[1].0 - w[0].0 == 192 * 60));

    let trend = score_series(&points, &ScoreEngine::default(), AggregationMode::Average, &Utc);
    assert!(trend.iter().all(|p| (1..=100).contains(&p.score)));
}

#[test]
fn range_without_entries_is_empty() {
    let log: TimestampedLog = (0..10).map(|i| (DAY_START + i, co2_snapshot(1.0))).collect();

    let points =
        SeriesReducer::default().filter_and_downsample(&log, Some(date(20)), Some(date(21)), &Utc);
    assert!(points.is_empty());

    let trend = score_series(&points, &ScoreEngine::default(), AggregationMode::Average, &Utc);
    assert_eq!(average_score(&trend), None);
}

#[test]
fn reducing_leaves_log_untouched() {
    let log: TimestampedLog = (0..40)
        .map(|i| (DAY_START + i * 30, co2_snapshot(i as f32)))
        .collect();
    let before = log.clone();

    let _ = SeriesReducer::default().filter_and_downsample(&log, Some(date(10)), None, &Utc);

    assert_eq!(log, before);
}

fn timestamps() -> impl Strategy<Value = Vec<UnixSeconds>> {
    // Three days either side of the chosen day
    prop::collection::vec(DAY_START - 3 * SECONDS_PER_DAY..DAY_START + 4 * SECONDS_PER_DAY, 0..200)
}

proptest! {
    #[test]
    fn reduced_points_are_ordered_unique_and_in_range(
        keys in timestamps(),
        max_points in 1usize..40,
    ) {
        let log: TimestampedLog = keys.iter().map(|ts| (*ts, Snapshot::default())).collect();
        let range = DayRange::from_bounds(DAY_START, DAY_START + SECONDS_PER_DAY - 1);

        let points = SeriesReducer::new(max_points).reduce(&log, range);
        let in_range = log.iter().filter(|(ts, _)| range.contains(*ts)).count();

        prop_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        prop_assert!(points.iter().all(|(ts, _)| range.contains(*ts)));
        prop_assert!(points.len() <= in_range);

        if in_range <= max_points {
            prop_assert_eq!(points.len(), in_range);
        } else {
            let interval = in_range / max_points;
            prop_assert_eq!(points.len(), (in_range + interval - 1) / interval);
        }
    }

    #[test]
    fn reduction_is_idempotent_within_cap(keys in timestamps()) {
        let reducer = SeriesReducer::default();
        let range = DayRange::from_bounds(DAY_START, DAY_START + SECONDS_PER_DAY - 1);
        let log: TimestampedLog = keys.iter().map(|ts| (*ts, Snapshot::default())).collect();

        let once: TimestampedLog = reducer
            .reduce(&log, range)
            .into_iter()
            .map(|(ts, s)| (ts, s.clone()))
            .collect();

        if once.len() <= reducer.max_points() {
            let twice: Vec<_> = reducer
                .reduce(&once, range)
                .into_iter()
                .map(|(ts, _)| ts)
                .collect();
            let once_keys: Vec<_> = once.iter().map(|(ts, _)| ts).collect();
            prop_assert_eq!(twice, once_keys);
        }
    }
}
