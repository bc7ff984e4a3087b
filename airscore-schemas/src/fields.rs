//! Field-level helpers shared by the document decoders

use airscore_core::{ClimateReading, GasReading};
use serde_json::{Map, Value};

/// A JSON number that fits a finite `f32`
pub(crate) fn number(value: &Value) -> Option<f32> {
    value
        .as_f64()
        .map(|v| v as f32)
        .filter(|v| v.is_finite())
}

/// Members of an instrument object
///
/// A member that is not a usable number is kept as NaN so the instrument
/// still counts as reporting that gas.
pub(crate) fn gas_reading(object: &Map<String, Value>) -> GasReading {
    object
        .iter()
        .map(|(name, value)| (name.as_str(), number(value).unwrap_or(f32::NAN)))
        .collect()
}

/// Instrument member of a log entry; absent or `null` reads as empty
pub(crate) fn gas_member(entry: &Map<String, Value>, key: &'static str) -> GasReading {
    match entry.get(key) {
        Some(Value::Object(object)) => gas_reading(object),
        None | Some(Value::Null) => GasReading::new(),
        Some(other) => {
            log::warn!("Ignoring non-object '{}' member: {}", key, other);
            GasReading::new()
        }
    }
}

/// Climate object; missing or non-numeric fields read as 0
pub(crate) fn climate(object: &Map<String, Value>) -> ClimateReading {
    ClimateReading {
        temperature: object.get("temperature").and_then(number).unwrap_or_default(),
        humidity: object.get("humidity").and_then(number).unwrap_or_default(),
    }
}

/// Climate member of a log entry
pub(crate) fn climate_member(entry: &Map<String, Value>, key: &'static str) -> ClimateReading {
    match entry.get(key) {
        Some(Value::Object(object)) => climate(object),
        _ => ClimateReading::default(),
    }
}
