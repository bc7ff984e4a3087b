//! Cloud History Document
//!
//! The cloud store keeps every poll under its Unix-seconds timestamp. Key
//! order in the document means nothing; the decoded [`TimestampedLog`]
//! orders entries itself.

use airscore_core::{Snapshot, TimestampedLog, UnixSeconds};
use serde_json::{Map, Value};

use crate::{fields, SchemaError};

/// Decode a history document
pub fn decode_log(document: &str) -> Result<TimestampedLog, SchemaError> {
    let value: Value = serde_json::from_str(document)?;
    decode_log_value(&value)
}

/// Decode an already parsed history document
pub fn decode_log_value(value: &Value) -> Result<TimestampedLog, SchemaError> {
    let entries = match value {
        Value::Object(entries) => entries,
        // An empty store returns `null`
        Value::Null => return Ok(TimestampedLog::new()),
        _ => return Err(SchemaError::NotAnObject("history document")),
    };

    let mut log = TimestampedLog::new();
    let mut skipped = 0usize;

    for (key, entry) in entries {
        let Some(timestamp) = parse_timestamp(key) else {
            log::warn!("Skipping history entry with non-integer key '{}'", key);
            skipped += 1;
            continue;
        };

        let Value::Object(entry) = entry else {
            log::warn!("Skipping history entry {}: not an object", timestamp);
            skipped += 1;
            continue;
        };

        log.insert(timestamp, snapshot(entry));
    }

    log::debug!("Decoded {} history entries, skipped {}", log.len(), skipped);
    Ok(log)
}

/// Encode a log in the cloud document shape
pub fn encode_log(log: &TimestampedLog) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(log)?)
}

fn parse_timestamp(key: &str) -> Option<UnixSeconds> {
    key.trim().parse().ok()
}

fn snapshot(entry: &Map<String, Value>) -> Snapshot {
    Snapshot::new(
        fields::gas_member(entry, "mq135"),
        fields::gas_member(entry, "mq2"),
        fields::climate_member(entry, "dht"),
    )
}
