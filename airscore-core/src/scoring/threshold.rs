//! Piecewise-Linear Gas Thresholds
//!
//! Raw concentrations from different gases live on very different scales:
//! a few hundred ppm of CO2 is unremarkable while the same figure of acetone
//! is not. Mapping every gas through its own three breakpoints onto one
//! 0-100 scale makes the per-gas scores comparable and lets them be
//! averaged.
//!
//! ```text
//! value ≤ good             →  (value / good) × 30
//! good < value ≤ moderate  →  30 + (value - good) / (moderate - good) × 30
//! moderate < value ≤ bad   →  60 + (value - moderate) / (bad - moderate) × 40
//! value > bad              →  100
//! ```
//!
//! The result is clamped to [0, 100], so negative readings from an
//! uncalibrated board score 0 rather than going negative. A NaN fails every
//! comparison and lands in the pinned branch.

use crate::{
    constants::thresholds::{
        ACETON_THRESHOLD, ALCOHOL_THRESHOLD, BAD_SEGMENT_SCORE, CO2_THRESHOLD,
        GOOD_SEGMENT_SCORE, MAX_GAS_SCORE, MIN_GAS_SCORE, MODERATE_SEGMENT_SCORE,
    },
    errors::{ScoreError, ScoreResult},
    readings::Gas,
};

/// Breakpoints for one gas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    good: f32,
    moderate: f32,
    bad: f32,
}

impl Threshold {
    /// Build a threshold without checking the breakpoints.
    ///
    /// For compiled-in constants only; use [`Threshold::new`] for anything
    /// that comes from outside.
    pub const fn from_breakpoints(good: f32, moderate: f32, bad: f32) -> Self {
        Self { good, moderate, bad }
    }

    /// Build a threshold, requiring `0 < good < moderate < bad`
    pub fn new(good: f32, moderate: f32, bad: f32) -> ScoreResult<Self> {
        // Written so NaN breakpoints fail too
        let ordered = good > 0.0 && moderate > good && bad > moderate && bad.is_finite();
        if !ordered {
            return Err(ScoreError::InvalidThreshold { good, moderate, bad });
        }

        Ok(Self { good, moderate, bad })
    }

    /// Upper edge of the good segment
    pub fn good(&self) -> f32 {
        self.good
    }

    /// Upper edge of the moderate segment
    pub fn moderate(&self) -> f32 {
        self.moderate
    }

    /// Upper edge of the bad segment
    pub fn bad(&self) -> f32 {
        self.bad
    }

    /// Severity score in [0, 100] for a concentration
    pub fn score(&self, value: f32) -> f32 {
        let score = if value <= self.good {
            (value / self.good) * GOOD_SEGMENT_SCORE
        } else if value <= self.moderate {
            GOOD_SEGMENT_SCORE
                + ((value - self.good) / (self.moderate - self.good))
                    * (MODERATE_SEGMENT_SCORE - GOOD_SEGMENT_SCORE)
        } else if value <= self.bad {
            MODERATE_SEGMENT_SCORE
                + ((value - self.moderate) / (self.bad - self.moderate))
                    * (BAD_SEGMENT_SCORE - MODERATE_SEGMENT_SCORE)
        } else {
            BAD_SEGMENT_SCORE
        };

        score.max(MIN_GAS_SCORE).min(MAX_GAS_SCORE)
    }
}

/// One threshold per tracked gas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    co2: Threshold,
    aceton: Threshold,
    alcohol: Threshold,
}

impl ThresholdTable {
    /// Compiled-in breakpoints
    pub const DEFAULT: Self = Self {
        co2: CO2_THRESHOLD,
        aceton: ACETON_THRESHOLD,
        alcohol: ALCOHOL_THRESHOLD,
    };

    /// Threshold for a tracked gas
    pub fn get(&self, gas: Gas) -> &Threshold {
        match gas {
            Gas::Co2 => &self.co2,
            Gas::Aceton => &self.aceton,
            Gas::Alcohol => &self.alcohol,
        }
    }

    /// Copy of this table with one gas replaced
    pub fn with_threshold(mut self, gas: Gas, threshold: Threshold) -> Self {
        match gas {
            Gas::Co2 => self.co2 = threshold,
            Gas::Aceton => self.aceton = threshold,
            Gas::Alcohol => self.alcohol = threshold,
        }
        self
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
