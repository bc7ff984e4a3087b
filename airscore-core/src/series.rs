//! History Series Reduction
//!
//! ## Overview
//!
//! Stored logs hold one snapshot every few seconds; a chart wants a dozen
//! or so points. Reduction runs in three steps:
//!
//! ```text
//! log ──► filter to day range ──► ascending order ──► stride sample ──► points
//! ```
//!
//! 1. **Filter**: keep keys inside `[start_of_day(start), end_of_day(end)]`,
//!    both ends inclusive, compared in whole Unix seconds. Without an end
//!    date the range is the start day alone.
//! 2. **Order**: ascending by timestamp. [`TimestampedLog`] already iterates
//!    this way, whatever order the source delivered entries in.
//! 3. **Sample**: at or below `max_points` entries everything is kept.
//!    Above it, `interval = len / max_points` (integer division) and every
//!    `interval`-th entry is taken starting at index 0.
//!
//! ## Stride Sampling
//!
//! Sampling picks exact readings instead of averaging buckets, so every
//! plotted point is a value the sensor really reported. Two consequences
//! follow:
//!
//! - The result can exceed `max_points`: 100 entries with a target of 15
//!   give an interval of 6 and 17 points.
//! - The last entry in range is not guaranteed to appear: with 100 entries
//!   the final point is index 96, not 99.
//!
//! ## Usage Example
//!
//! ```rust
//! use airscore_core::{SeriesReducer, Snapshot, TimestampedLog};
//! use chrono::{NaiveDate, Utc};
//!
//! // 2024-03-10, one entry every 10 minutes
//! let day_start = 1_710_028_800;
//! let log: TimestampedLog = (0..144)
//!     .map(|i| (day_start + i * 600, Snapshot::default()))
//!     .collect();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let points = SeriesReducer::default().filter_and_downsample(&log, Some(date), None, &Utc);
//!
//! // 144 / 15 = 9 → indices 0, 9, ..., 135
//! assert_eq!(points.len(), 16);
//! assert_eq!(points[0].0, day_start);
//! ```

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use chrono::{NaiveDate, TimeZone};

use crate::{
    constants::series::DEFAULT_MAX_CHART_POINTS,
    readings::{Snapshot, TimestampedLog},
    time::{self, UnixSeconds},
};

/// Inclusive window of log keys covering whole calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    start: UnixSeconds,
    end: UnixSeconds,
}

impl DayRange {
    /// Days `start` through `end` (or `start` alone) in `tz`
    ///
    /// `None` if either date cannot be placed on the time line.
    pub fn new<Tz: TimeZone>(start: NaiveDate, end: Option<NaiveDate>, tz: &Tz) -> Option<Self> {
        let effective_end = end.unwrap_or(start);
        let start = time::start_of_day(start, tz)?;
        let end = time::end_of_day(effective_end, tz)?;
        Some(Self { start, end })
    }

    /// Window from explicit bounds
    pub fn from_bounds(start: UnixSeconds, end: UnixSeconds) -> Self {
        Self { start, end }
    }

    /// First key in range
    pub fn start(&self) -> UnixSeconds {
        self.start
    }

    /// Last key in range
    pub fn end(&self) -> UnixSeconds {
        self.end
    }

    /// True for an end date before the start date
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Whether a key falls inside the window
    pub fn contains(&self, timestamp: UnixSeconds) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Bounds as a Rust range
    pub fn bounds(&self) -> RangeInclusive<UnixSeconds> {
        self.start..=self.end
    }
}

/// Filters logs to a date range and thins them for charting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesReducer {
    max_points: usize,
}

impl Default for SeriesReducer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHART_POINTS)
    }
}

impl SeriesReducer {
    /// Reducer targeting `max_points`
    ///
    /// A target of 0 keeps only the first entry of a non-empty range.
    pub fn new(max_points: usize) -> Self {
        Self { max_points }
    }

    /// Point target
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Entries for the days `start..=end` in `tz`, stride sampled
    ///
    /// No start date means no selection and yields an empty series.
    pub fn filter_and_downsample<'a, Tz: TimeZone>(
        &self,
        log: &'a TimestampedLog,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        tz: &Tz,
    ) -> Vec<(UnixSeconds, &'a Snapshot)> {
        let Some(start) = start else {
            log_debug!("No start date selected, returning empty series");
            return Vec::new();
        };

        match DayRange::new(start, end, tz) {
            Some(range) => self.reduce(log, range),
            None => {
                log_warn!("Could not resolve day range {} to {:?}", start, end);
                Vec::new()
            }
        }
    }

    /// [`SeriesReducer::filter_and_downsample`] in the system time zone
    #[cfg(feature = "std")]
    pub fn filter_and_downsample_local<'a>(
        &self,
        log: &'a TimestampedLog,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<(UnixSeconds, &'a Snapshot)> {
        self.filter_and_downsample(log, start, end, &chrono::Local)
    }

    /// Entries inside an already resolved window, stride sampled
    pub fn reduce<'a>(
        &self,
        log: &'a TimestampedLog,
        range: DayRange,
    ) -> Vec<(UnixSeconds, &'a Snapshot)> {
        // BTreeMap::range panics on inverted bounds
        if range.is_empty() {
            return Vec::new();
        }

        let in_range: Vec<_> = log.range(range.bounds()).collect();
        log_debug!(
            "Sampling {} entries in [{}, {}] to about {} points",
            in_range.len(),
            range.start(),
            range.end(),
            self.max_points
        );

        self.downsample(in_range)
    }

    /// Stride-sample an ordered sequence
    pub fn downsample<T>(&self, entries: Vec<T>) -> Vec<T> {
        if entries.len() <= self.max_points {
            return entries;
        }

        let interval = entries
            .len()
            .checked_div(self.max_points)
            .unwrap_or(entries.len());

        entries.into_iter().step_by(interval).collect()
    }
}
