//! Sensor Reading Model
//!
//! ## Instruments
//!
//! A sensor board carries two gas instruments and one climate sensor:
//!
//! ```text
//! ┌──────────────┬───────┬─────────────────────────────────────────┐
//! │ Instrument   │ Group │ Reports                                 │
//! ├──────────────┼───────┼─────────────────────────────────────────┤
//! │ MQ-135       │ A     │ CO2, CO, Alcohol, Toluen, NH4, Aceton   │
//! │ MQ-2         │ B     │ H2, LPG, CO, Alcohol, Propane           │
//! │ DHT11        │ -     │ temperature (°C), humidity (%)          │
//! └──────────────┴───────┴─────────────────────────────────────────┘
//! ```
//!
//! The gas sets overlap. When both instruments report a tracked gas the
//! group A value wins; group B is only consulted when group A does not
//! report the gas at all. That rule lives in [`Snapshot::concentration`]
//! and nowhere else.
//!
//! ## Missing Values
//!
//! Firmware versions differ in which gases they report, so every gas is
//! optional. A reported but unusable value (an error string on the wire,
//! stored as NaN) still claims the gas for its instrument: the gas is
//! skipped rather than read from the other group.

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::string::String;
use core::fmt;
use core::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::UnixSeconds;

/// Gases that contribute to the air-quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gas {
    /// Carbon dioxide
    Co2,
    /// Acetone
    Aceton,
    /// Ethanol and related alcohols
    Alcohol,
}

/// Tracked gases in scoring order
pub const TRACKED_GASES: [Gas; 3] = [Gas::Co2, Gas::Aceton, Gas::Alcohol];

impl Gas {
    /// Key used by the instruments and the cloud log
    pub const fn name(self) -> &'static str {
        match self {
            Gas::Co2 => "CO2",
            Gas::Aceton => "Aceton",
            Gas::Alcohol => "Alcohol",
        }
    }

    /// Look up a tracked gas by its wire name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        TRACKED_GASES.into_iter().find(|gas| gas.name() == name)
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which gas instrument a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    /// MQ-135, gas group A
    Mq135,
    /// MQ-2, gas group B
    Mq2,
}

impl Instrument {
    /// Lookup order for tracked gases
    pub const PRIORITY: [Instrument; 2] = [Instrument::Mq135, Instrument::Mq2];

    /// Key used by the cloud log
    pub const fn name(self) -> &'static str {
        match self {
            Instrument::Mq135 => "mq135",
            Instrument::Mq2 => "mq2",
        }
    }
}

/// Gas name to concentration, as reported by one instrument
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GasReading {
    values: BTreeMap<String, f32>,
}

impl GasReading {
    /// Empty reading
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a concentration, returning the previous value for that name
    pub fn insert(&mut self, name: impl Into<String>, value: f32) -> Option<f32> {
        self.values.insert(name.into(), value)
    }

    /// Concentration for `name` if present and finite
    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied().filter(|value| value.is_finite())
    }

    /// Whether the instrument reported `name` at all, finite or not
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of reported gases
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the instrument reported nothing
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All reported values in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

// NaN marks a reported but unusable value, so two NaNs compare equal
impl PartialEq for GasReading {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|((name, a), (other_name, b))| {
                    name == other_name && (a == b || (a.is_nan() && b.is_nan()))
                })
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for GasReading {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

/// Temperature and humidity from the climate sensor
///
/// Carried for charts only; no thresholds apply.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClimateReading {
    /// Air temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}

/// One poll of every instrument on the board
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Snapshot {
    /// Gas group A
    pub mq135: GasReading,
    /// Gas group B
    pub mq2: GasReading,
    /// Climate sensor
    #[cfg_attr(feature = "serde", serde(rename = "dht"))]
    pub climate: ClimateReading,
}

impl Snapshot {
    /// Build a snapshot from its three parts
    pub fn new(mq135: GasReading, mq2: GasReading, climate: ClimateReading) -> Self {
        Self { mq135, mq2, climate }
    }

    /// Reading for one instrument
    pub fn reading(&self, instrument: Instrument) -> &GasReading {
        match instrument {
            Instrument::Mq135 => &self.mq135,
            Instrument::Mq2 => &self.mq2,
        }
    }

    /// Concentration of a tracked gas and the instrument that supplied it
    ///
    /// The first instrument in [`Instrument::PRIORITY`] that reports the gas
    /// decides. If its value is not finite the gas is skipped, even when
    /// the other instrument has a usable one.
    pub fn concentration(&self, gas: Gas) -> Option<(Instrument, f32)> {
        let instrument = Instrument::PRIORITY
            .into_iter()
            .find(|instrument| self.reading(*instrument).contains(gas.name()))?;

        self.reading(instrument)
            .get(gas.name())
            .map(|value| (instrument, value))
    }
}

/// Snapshots keyed by Unix-seconds timestamp
///
/// Keys are unique. Iteration is always ascending by timestamp regardless of
/// the order the source delivered entries in.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimestampedLog {
    entries: BTreeMap<UnixSeconds, Snapshot>,
}

impl TimestampedLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; a repeated timestamp replaces the earlier snapshot
    pub fn insert(&mut self, timestamp: UnixSeconds, snapshot: Snapshot) -> Option<Snapshot> {
        self.entries.insert(timestamp, snapshot)
    }

    /// Snapshot stored at `timestamp`
    pub fn get(&self, timestamp: UnixSeconds) -> Option<&Snapshot> {
        self.entries.get(&timestamp)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the log holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending timestamp order
    pub fn iter(&self) -> Entries<'_> {
        Entries { inner: self.entries.range(..) }
    }

    /// Entries with timestamps inside `bounds`, ascending
    pub fn range(&self, bounds: RangeInclusive<UnixSeconds>) -> Entries<'_> {
        Entries { inner: self.entries.range(bounds) }
    }

    /// Earliest and latest timestamps
    pub fn span(&self) -> Option<(UnixSeconds, UnixSeconds)> {
        let first = self.entries.keys().next()?;
        let last = self.entries.keys().next_back()?;
        Some((*first, *last))
    }
}

impl FromIterator<(UnixSeconds, Snapshot)> for TimestampedLog {
    fn from_iter<I: IntoIterator<Item = (UnixSeconds, Snapshot)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl Extend<(UnixSeconds, Snapshot)> for TimestampedLog {
    fn extend<I: IntoIterator<Item = (UnixSeconds, Snapshot)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TimestampedLog {
    type Item = (UnixSeconds, &'a Snapshot);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over log entries
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: btree_map::Range<'a, UnixSeconds, Snapshot>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (UnixSeconds, &'a Snapshot);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(timestamp, snapshot)| (*timestamp, snapshot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(timestamp, snapshot)| (*timestamp, snapshot))
    }
}
