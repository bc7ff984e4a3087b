//! Poll Configuration Defaults
//!
//! Values a fresh dashboard starts with before any saved settings load.

/// Interval between device polls in milliseconds.
pub const DEFAULT_SAMPLING_RATE_MS: u64 = 10_000;

/// Address of the sensor board on the local network.
pub const DEFAULT_API_HOST: &str = "192.168.106.182";

/// Read history from the cloud store rather than the local device.
pub const DEFAULT_INTERNET_MODE: bool = true;
