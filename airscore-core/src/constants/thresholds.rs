//! Gas Thresholds and Score Scale
//!
//! Each tracked gas maps onto the same 0-100 severity scale through three
//! breakpoints. The scale is split to match the dashboard gauge:
//!
//! ```text
//! concentration:  0 ──── good ──── moderate ──── bad ──── ∞
//! score:          0 ────  30  ────    60    ──── 100 ──── 100
//!                 └ Good ┘   └ Moderate ┘   └── Bad ──┘
//! ```
//!
//! Breakpoints are in the ppm the MQ-series boards report after their
//! curve fit. They are tuned for indoor monitoring, not regulatory limits.

use crate::scoring::Threshold;

// ===== PER-GAS BREAKPOINTS =====

/// Carbon dioxide breakpoints (ppm above the calibrated baseline).
pub const CO2_THRESHOLD: Threshold = Threshold::from_breakpoints(100.0, 200.0, 500.0);

/// Acetone breakpoints (ppm).
pub const ACETON_THRESHOLD: Threshold = Threshold::from_breakpoints(200.0, 500.0, 1000.0);

/// Alcohol breakpoints (ppm).
pub const ALCOHOL_THRESHOLD: Threshold = Threshold::from_breakpoints(100.0, 300.0, 1000.0);

// ===== SCORE SCALE =====

/// Score reached exactly at the `good` breakpoint.
pub const GOOD_SEGMENT_SCORE: f32 = 30.0;

/// Score reached exactly at the `moderate` breakpoint.
pub const MODERATE_SEGMENT_SCORE: f32 = 60.0;

/// Score reached at the `bad` breakpoint and held above it.
pub const BAD_SEGMENT_SCORE: f32 = 100.0;

/// Lower bound of a single gas score.
pub const MIN_GAS_SCORE: f32 = 0.0;

/// Upper bound of a single gas score.
pub const MAX_GAS_SCORE: f32 = 100.0;

// ===== AGGREGATE SCORE =====

/// Floor of the aggregate score.
///
/// Dashboards display `100 - score` as a clean-air percentage, so the floor
/// keeps that figure below 100%.
pub const MIN_FINAL_SCORE: u8 = 1;

/// Ceiling of the aggregate score.
pub const MAX_FINAL_SCORE: u8 = 100;

/// Score for a snapshot that carries none of the tracked gases.
pub const EMPTY_SNAPSHOT_SCORE: u8 = 100;
