//! Core scoring engine for AirScore
//!
//! Turns gas-sensor snapshots into a single air-quality score and reduces
//! stored reading logs to a handful of chart points for a date range.
//! Both halves are pure functions over in-memory data, so they can be called
//! from a poll loop, a request handler or a worker thread without locking.
//!
//! Key constraints:
//! - No I/O, no global state
//! - Builds without `std` (needs `alloc`)
//! - Inputs are never mutated
//!
//! ```no_run
//! use airscore_core::{air_quality_score, AggregationMode, Snapshot};
//!
//! let mut snapshot = Snapshot::default();
//! snapshot.mq135.insert("CO2", 150.0);
//!
//! let score = air_quality_score(&snapshot, AggregationMode::Average);
//! assert_eq!(score, 45);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod errors;
pub mod readings;
pub mod scoring;
pub mod series;
pub mod time;
pub mod trend;

// Public API
pub use config::{Endpoints, PollConfig};
pub use errors::{ConfigError, ScoreError, ScoreResult};
pub use readings::{
    ClimateReading, Gas, GasReading, Instrument, Snapshot, TimestampedLog, TRACKED_GASES,
};
pub use scoring::{
    air_quality_score,
    score_gas,
    AggregationMode,
    ScoreBand,
    ScoreEngine,
    Threshold,
    ThresholdTable,
};
pub use series::{DayRange, SeriesReducer};
pub use time::UnixSeconds;
pub use trend::{average_score, score_series, ScoredPoint};

/// Crate version, as published
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
