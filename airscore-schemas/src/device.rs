//! Sensor Board Endpoint Payloads
//!
//! Each instrument has its own endpoint returning a flat JSON object:
//!
//! ```text
//! GET /mq135  → { "CO2": .., "CO": .., "Alcohol": .., "Toluen": .., "NH4": .., "Aceton": .., "Raw": .. }
//! GET /mq2    → { "H2": .., "LPG": .., "CO": .., "Alcohol": .., "Butane": .., "Raw": .. }
//! GET /dht    → { "temperature": .., "humidity": .. }
//! GET /buzzer → { "status": .., "MQ135_BUZZ_VALUE": .., "MQ2_BUZZ_VALUE": .. }
//! GET /config → { "ENABLE_SERIAL_DEBUG": .., "R0_MQ135": .., "R0_MQ2": .. }
//! ```
//!
//! The MQ-2 firmware labels its propane curve `Butane`. Dashboards and the
//! cloud log call it `Propane`, so the value is copied across when the
//! payload has no `Propane` of its own.
//!
//! Sensor payloads are decoded leniently. The two settings payloads are
//! strict: a missing or mistyped field is a [`SchemaError::ParseError`].

use airscore_core::{ClimateReading, GasReading, Snapshot};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{fields, SchemaError};

const MQ2_BUTANE: &str = "Butane";
const MQ2_PROPANE: &str = "Propane";

/// Decode the three endpoint payloads of one poll
pub fn decode_snapshot(mq135: &str, mq2: &str, dht: &str) -> Result<Snapshot, SchemaError> {
    Ok(Snapshot::new(decode_mq135(mq135)?, decode_mq2(mq2)?, decode_climate(dht)?))
}

/// Decode the `/mq135` payload
pub fn decode_mq135(payload: &str) -> Result<GasReading, SchemaError> {
    let object = parse_object(payload, "MQ-135 payload")?;
    Ok(fields::gas_reading(&object))
}

/// Decode the `/mq2` payload
pub fn decode_mq2(payload: &str) -> Result<GasReading, SchemaError> {
    let object = parse_object(payload, "MQ-2 payload")?;
    let mut reading = fields::gas_reading(&object);

    if !reading.contains(MQ2_PROPANE) {
        if let Some(butane) = reading.get(MQ2_BUTANE) {
            reading.insert(MQ2_PROPANE, butane);
        }
    }

    Ok(reading)
}

/// Decode the `/dht` payload
pub fn decode_climate(payload: &str) -> Result<ClimateReading, SchemaError> {
    let object = parse_object(payload, "DHT payload")?;
    Ok(fields::climate(&object))
}

/// Buzzer state and alarm levels reported by `/buzzer`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuzzerSettings {
    /// Non-zero while the buzzer is armed
    pub status: i32,
    /// MQ-135 reading that sounds the alarm
    #[serde(rename = "MQ135_BUZZ_VALUE")]
    pub mq135_level: f32,
    /// MQ-2 reading that sounds the alarm
    #[serde(rename = "MQ2_BUZZ_VALUE")]
    pub mq2_level: f32,
}

impl BuzzerSettings {
    /// Whether the alarm is armed
    pub fn is_armed(&self) -> bool {
        self.status != 0
    }
}

/// Board configuration reported by `/config`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Non-zero when the board echoes readings on its serial port
    #[serde(rename = "ENABLE_SERIAL_DEBUG")]
    pub serial_debug: i32,
    /// MQ-135 clean-air calibration resistance
    #[serde(rename = "R0_MQ135")]
    pub r0_mq135: f32,
    /// MQ-2 clean-air calibration resistance
    #[serde(rename = "R0_MQ2")]
    pub r0_mq2: f32,
}

impl DeviceConfig {
    /// Whether serial debug output is on
    pub fn serial_debug_enabled(&self) -> bool {
        self.serial_debug != 0
    }
}

/// Decode the `/buzzer` payload
pub fn decode_buzzer(payload: &str) -> Result<BuzzerSettings, SchemaError> {
    let object = parse_object(payload, "buzzer payload")?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Decode the `/config` payload
pub fn decode_device_config(payload: &str) -> Result<DeviceConfig, SchemaError> {
    let object = parse_object(payload, "config payload")?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

fn parse_object(payload: &str, what: &'static str) -> Result<Map<String, Value>, SchemaError> {
    match serde_json::from_str::<Value>(payload)? {
        Value::Object(object) => Ok(object),
        _ => Err(SchemaError::NotAnObject(what)),
    }
}
