//! Air-Quality Scoring
//!
//! ## Overview
//!
//! A snapshot becomes one number in two steps:
//!
//! 1. **Per-gas score**: each tracked gas found in the snapshot is mapped
//!    through its [`Threshold`] onto [0, 100].
//! 2. **Aggregation**: the per-gas scores are combined by
//!    [`AggregationMode`], rounded, and clamped to [1, 100].
//!
//! Higher is worse. Dashboards show `100 - score` as a clean-air
//! percentage, which is why the aggregate never drops to 0.
//!
//! ## Aggregation Modes
//!
//! - `Average`: unweighted mean of the per-gas scores.
//! - `Worst`: the *minimum* per-gas score, i.e. the least polluted
//!   contributor. The name is historical; dashboards already depend on the
//!   minimum, so it stays until someone decides otherwise.
//!
//! ## Usage Example
//!
//! ```rust
//! use airscore_core::{AggregationMode, Gas, ScoreBand, ScoreEngine, Snapshot};
//!
//! let engine = ScoreEngine::default();
//!
//! let mut snapshot = Snapshot::default();
//! snapshot.mq135.insert("CO2", 150.0);     // → 45
//! snapshot.mq135.insert("Aceton", 750.0);  // → 80
//!
//! assert_eq!(engine.score_gas(Gas::Co2, 150.0), 45.0);
//!
//! let score = engine.air_quality_score(&snapshot, AggregationMode::Average);
//! assert_eq!(score, 63);
//! assert_eq!(ScoreBand::of(score), ScoreBand::Bad);
//! ```

mod engine;
mod threshold;

pub use engine::ScoreEngine;
pub use threshold::{Threshold, ThresholdTable};

use crate::{
    constants::thresholds::{GOOD_SEGMENT_SCORE, MODERATE_SEGMENT_SCORE},
    readings::{Gas, Snapshot},
};

/// How per-gas scores combine into one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AggregationMode {
    /// Mean of the per-gas scores
    #[default]
    Average,
    /// Minimum of the per-gas scores
    Worst,
}

/// Gauge segment a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// Score ≤ 30
    Good,
    /// 30 < score ≤ 60
    Moderate,
    /// Score > 60
    Bad,
}

impl ScoreBand {
    /// Segment for an aggregate score
    pub fn of(score: u8) -> Self {
        Self::of_value(score as f32)
    }

    /// Segment for a fractional score, e.g. a per-gas score or an average
    pub fn of_value(score: f32) -> Self {
        if score <= GOOD_SEGMENT_SCORE {
            ScoreBand::Good
        } else if score <= MODERATE_SEGMENT_SCORE {
            ScoreBand::Moderate
        } else {
            ScoreBand::Bad
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Good => "Good",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::Bad => "Bad",
        }
    }
}

/// Score one gas with the compiled-in thresholds
pub fn score_gas(gas: Gas, value: f32) -> f32 {
    ScoreEngine::DEFAULT.score_gas(gas, value)
}

/// Score a snapshot with the compiled-in thresholds
pub fn air_quality_score(snapshot: &Snapshot, mode: AggregationMode) -> u8 {
    ScoreEngine::DEFAULT.air_quality_score(snapshot, mode)
}
