//! Poll Configuration
//!
//! The dashboard polls the sensor board on a fixed interval and reads
//! history either from the board or from the cloud store. Those settings
//! are a plain value: a poll cycle receives the current `PollConfig`, and a
//! settings change produces a new one rather than editing shared state.
//!
//! ```rust
//! use airscore_core::PollConfig;
//!
//! let config = PollConfig::default()
//!     .with_api_host("10.0.0.7")
//!     .with_sampling_rate_ms(5_000);
//!
//! assert_eq!(config.endpoints().mq135, "http://10.0.0.7/mq135");
//! assert!(config.validate().is_ok());
//! ```

use alloc::format;
use alloc::string::String;
use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::config::{DEFAULT_API_HOST, DEFAULT_INTERNET_MODE, DEFAULT_SAMPLING_RATE_MS},
    errors::ConfigError,
};

/// Settings for the poll loop
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PollConfig {
    /// Milliseconds between polls
    #[cfg_attr(feature = "serde", serde(rename = "samplingRate"))]
    pub sampling_rate_ms: u64,
    /// Sensor board address, with or without scheme
    pub api_host: String,
    /// Read history from the cloud store instead of the board
    pub internet_mode: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            sampling_rate_ms: DEFAULT_SAMPLING_RATE_MS,
            api_host: DEFAULT_API_HOST.into(),
            internet_mode: DEFAULT_INTERNET_MODE,
        }
    }
}

impl PollConfig {
    /// Copy with a new poll interval
    pub fn with_sampling_rate_ms(mut self, sampling_rate_ms: u64) -> Self {
        self.sampling_rate_ms = sampling_rate_ms;
        self
    }

    /// Copy with a new board address
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    /// Copy with the history source switched
    pub fn with_internet_mode(mut self, internet_mode: bool) -> Self {
        self.internet_mode = internet_mode;
        self
    }

    /// Poll interval
    pub fn sampling_interval(&self) -> Duration {
        Duration::from_millis(self.sampling_rate_ms)
    }

    /// Check the settings can drive a poll loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling_rate_ms == 0 {
            log_warn!("Rejecting poll config with zero sampling rate");
            return Err(ConfigError::ZeroSamplingRate);
        }

        if self.api_host.trim().is_empty() {
            log_warn!("Rejecting poll config with empty API host");
            return Err(ConfigError::EmptyHost);
        }

        Ok(())
    }

    /// Device endpoint URLs for the configured host
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::for_host(&self.api_host)
    }
}

/// URLs exposed by the sensor board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// MQ-135 readings
    pub mq135: String,
    /// MQ-2 readings
    pub mq2: String,
    /// DHT11 readings
    pub dht: String,
    /// Buzzer state and alarm levels
    pub buzzer: String,
    /// Board configuration
    pub config: String,
    /// Sensor calibration trigger
    pub calibrate: String,
}

impl Endpoints {
    /// Endpoints under `host`; a bare host gets `http://`
    pub fn for_host(host: &str) -> Self {
        let host = host.trim().trim_end_matches('/');
        let base = if host.starts_with("http://") || host.starts_with("https://") {
            String::from(host)
        } else {
            format!("http://{host}")
        };

        Self {
            mq135: format!("{base}/mq135"),
            mq2: format!("{base}/mq2"),
            dht: format!("{base}/dht"),
            buzzer: format!("{base}/buzzer"),
            config: format!("{base}/config"),
            calibrate: format!("{base}/calibrate"),
        }
    }
}
