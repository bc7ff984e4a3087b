//! JSON Documents for AirScore
//!
//! ## Overview
//!
//! The scoring core works on typed values. Everything that arrives from
//! outside arrives as JSON, from three places:
//!
//! 1. **Cloud history document**: one object keyed by Unix-seconds strings,
//!    each entry holding the `mq135`, `mq2` and `dht` readings of one poll.
//! 2. **Device endpoints**: `/mq135`, `/mq2` and `/dht` on the sensor board,
//!    each returning a flat object for one instrument, plus `/buzzer` and
//!    `/config` for the board's own settings.
//! 3. **Saved settings**: the poll configuration persisted between sessions.
//!
//! ## Tolerant Decoding
//!
//! Sensor data is decoded leniently. The cloud document is written by
//! several firmware versions and partial uploads happen, so:
//!
//! - a gas value that is not a JSON number is kept as unusable, not an error
//! - an entry whose key is not an integer timestamp is skipped with a warning
//! - an entry that is not an object is skipped with a warning
//! - a `null` document (empty store) decodes to an empty log
//!
//! Only malformed JSON, or a document of the wrong shape altogether, is an
//! error.
//!
//! ## Cloud Document Shape
//!
//! ```json
//! {
//!   "1710072000": {
//!     "mq135": { "CO2": 121.4, "CO": 3.1, "Alcohol": 18.2, "Aceton": 40.0 },
//!     "mq2":   { "LPG": 14.0, "CO": 5.2, "Propane": 20.1 },
//!     "dht":   { "temperature": 22.0, "humidity": 47.0 }
//!   }
//! }
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use airscore_core::{air_quality_score, AggregationMode};
//! use airscore_schemas::decode_log;
//!
//! let document = r#"{
//!     "1710072000": { "mq135": { "CO2": 150 }, "mq2": {}, "dht": {} },
//!     "not-a-time": { "mq135": { "CO2": 900 } }
//! }"#;
//!
//! let log = decode_log(document)?;
//! assert_eq!(log.len(), 1);
//!
//! let snapshot = log.get(1_710_072_000).unwrap();
//! assert_eq!(air_quality_score(snapshot, AggregationMode::Average), 45);
//! # Ok::<(), airscore_schemas::SchemaError>(())
//! ```

use airscore_core::ConfigError;

pub mod config;
pub mod device;
pub mod history;

mod fields;

pub use config::{decode_config, encode_config};
pub use device::{
    decode_buzzer, decode_climate, decode_device_config, decode_mq135, decode_mq2,
    decode_snapshot, BuzzerSettings, DeviceConfig,
};
pub use history::{decode_log, decode_log_value, encode_log};

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Input is not valid JSON, or a strict payload has the wrong fields
    #[error("Failed to parse JSON: {0}")]
    ParseError(String),

    /// Valid JSON, but not the object the document requires
    #[error("Expected a JSON object for {0}")]
    NotAnObject(&'static str),

    /// Settings decoded but cannot drive a poll loop
    #[error("Invalid configuration: {0}")]
    InvalidConfig(ConfigError),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for SchemaError {
    fn from(err: ConfigError) -> Self {
        SchemaError::InvalidConfig(err)
    }
}
