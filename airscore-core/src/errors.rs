//! Error Types for Scoring and Configuration
//!
//! Scoring a snapshot and reducing a log never fail: unknown gases are
//! skipped, missing dates give an empty series and out-of-range values are
//! clamped. Errors only come from building things by hand:
//!
//! - `ScoreError::UnknownGas`: a caller asked to score a gas name that has no
//!   threshold. The snapshot path never produces this, it filters first.
//! - `ScoreError::InvalidThreshold`: breakpoints not strictly increasing, or
//!   a `good` breakpoint that would divide by zero.
//! - `ConfigError`: a poll configuration that could never drive a poll loop.
//!
//! ```rust
//! use airscore_core::{ScoreEngine, ScoreError};
//!
//! let engine = ScoreEngine::default();
//! match engine.score_gas_named("Radon", 4.0) {
//!     Ok(score) => println!("score {score}"),
//!     Err(ScoreError::UnknownGas { name }) => println!("no threshold for {name}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use alloc::string::String;

use thiserror_no_std::Error;

/// Result type for scoring operations
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Scoring errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// Gas name has no entry in the threshold table
    #[error("Unknown gas: {name}")]
    UnknownGas {
        /// Name as supplied by the caller
        name: String,
    },

    /// Breakpoints must satisfy `0 < good < moderate < bad`
    #[error("Invalid threshold: good={good}, moderate={moderate}, bad={bad}")]
    InvalidThreshold {
        /// Upper edge of the good segment
        good: f32,
        /// Upper edge of the moderate segment
        moderate: f32,
        /// Upper edge of the bad segment
        bad: f32,
    },
}

/// Poll configuration errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero interval would poll in a tight loop
    #[error("Sampling rate must be greater than zero")]
    ZeroSamplingRate,

    /// Device host is required to build endpoint URLs
    #[error("API host is empty")]
    EmptyHost,
}
