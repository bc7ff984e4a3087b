//! Score trends over a reduced series
//!
//! Each sampled history point is scored on its own, giving the bar chart
//! of air quality over the selected days and the average shown beside it.

use alloc::string::String;
use alloc::vec::Vec;

use chrono::TimeZone;

use crate::{
    readings::Snapshot,
    scoring::{AggregationMode, ScoreBand, ScoreEngine},
    time::{self, UnixSeconds},
};

/// One scored history point
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPoint {
    /// Log key the score came from
    pub timestamp: UnixSeconds,
    /// Human-readable local time
    pub label: String,
    /// Aggregate score in [1, 100]
    pub score: u8,
}

impl ScoredPoint {
    /// `100 - score`, the figure dashboards plot
    pub fn clean_air_percentage(&self) -> u8 {
        100 - self.score
    }

    /// Gauge segment of the score
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }
}

/// Score every point of a reduced series
pub fn score_series<Tz: TimeZone>(
    points: &[(UnixSeconds, &Snapshot)],
    engine: &ScoreEngine,
    mode: AggregationMode,
    tz: &Tz,
) -> Vec<ScoredPoint>
where
    Tz::Offset: core::fmt::Display,
{
    points
        .iter()
        .map(|(timestamp, snapshot)| ScoredPoint {
            timestamp: *timestamp,
            label: time::label(*timestamp, tz),
            score: engine.air_quality_score(snapshot, mode),
        })
        .collect()
}

/// Mean score of a trend, `None` when there are no points
pub fn average_score(points: &[ScoredPoint]) -> Option<f32> {
    if points.is_empty() {
        return None;
    }

    let total: f32 = points.iter().map(|p| p.score as f32).sum();
    Some(total / points.len() as f32)
}
