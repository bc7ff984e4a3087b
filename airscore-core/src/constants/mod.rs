//! Constants for AirScore Core
//!
//! Every breakpoint, bound and default used by the scoring and series code
//! lives here, so a change to the compiled-in configuration is a change to
//! exactly one file.
//!
//! ## Organization
//!
//! - **Thresholds**: per-gas breakpoints and the score scale they map onto
//! - **Series**: chart point limits for history views
//! - **Config**: poll loop defaults

/// Per-gas breakpoints and score scale anchors.
pub mod thresholds;

/// History chart limits.
pub mod series;

/// Poll configuration defaults.
pub mod config;

pub use thresholds::{
    CO2_THRESHOLD, ACETON_THRESHOLD, ALCOHOL_THRESHOLD,
    EMPTY_SNAPSHOT_SCORE, MIN_FINAL_SCORE, MAX_FINAL_SCORE,
};

pub use series::DEFAULT_MAX_CHART_POINTS;

pub use config::{DEFAULT_SAMPLING_RATE_MS, DEFAULT_API_HOST, DEFAULT_INTERNET_MODE};
