//! Saved Poll Settings
//!
//! Settings persist as a small camelCase document:
//!
//! ```json
//! { "samplingRate": 10000, "apiHost": "192.168.106.182", "internetMode": true }
//! ```
//!
//! Fields missing from an older document take their defaults. A document
//! that decodes into unusable settings is rejected so the caller can fall
//! back to [`PollConfig::default`].

use airscore_core::PollConfig;

use crate::SchemaError;

/// Decode and validate saved settings
pub fn decode_config(document: &str) -> Result<PollConfig, SchemaError> {
    let config: PollConfig = serde_json::from_str(document)?;

    if let Err(err) = config.validate() {
        log::warn!("Saved settings rejected: {}", err);
        return Err(err.into());
    }

    Ok(config)
}

/// Encode settings for saving
pub fn encode_config(config: &PollConfig) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(config)?)
}
