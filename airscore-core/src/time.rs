//! Time handling for reading logs
//!
//! Log keys are Unix seconds. Date ranges are picked as calendar days in
//! the viewer's time zone, so converting between the two is the only
//! place a time zone enters the crate:
//! - [`start_of_day`] / [`end_of_day`] turn a date into the inclusive key
//!   bounds for that day
//! - [`label`] renders a key for a chart axis
//! - [`TimeSource`] supplies "now" for the default (today) range

use alloc::string::{String, ToString};

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// Seconds since the Unix epoch
pub type UnixSeconds = i64;

/// Chart label format, e.g. `3/14/2025, 9:05:00 PM`
pub const LABEL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Source of the current time
pub trait TimeSource {
    /// Current time in Unix seconds
    fn now(&self) -> UnixSeconds;
}

/// Wall clock (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> UnixSeconds {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as UnixSeconds
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone, Copy)]
pub struct FixedTime {
    timestamp: UnixSeconds,
}

impl FixedTime {
    /// Clock stopped at `timestamp`
    pub fn new(timestamp: UnixSeconds) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: UnixSeconds) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward
    pub fn advance(&mut self, seconds: i64) {
        self.timestamp += seconds;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> UnixSeconds {
        self.timestamp
    }
}

/// Calendar date of `source.now()` in `tz`
pub fn today<Tz: TimeZone>(source: &dyn TimeSource, tz: &Tz) -> Option<NaiveDate> {
    to_datetime(source.now(), tz).map(|dt| dt.date_naive())
}

/// First second of `date` in `tz`
///
/// When midnight does not exist (DST starting at 00:00) the day starts at
/// the first valid local time after it.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<UnixSeconds> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    resolve(tz, midnight, Shift::Forward).map(|dt| dt.timestamp())
}

/// Last whole second of `date` in `tz` (local 23:59:59)
///
/// When that time is skipped by a DST change the day ends at the last valid
/// local time before it.
pub fn end_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<UnixSeconds> {
    let last = date.and_hms_milli_opt(23, 59, 59, 999)?;
    resolve(tz, last, Shift::Backward).map(|dt| dt.timestamp())
}

/// Chart label for a log key
pub fn label<Tz: TimeZone>(timestamp: UnixSeconds, tz: &Tz) -> String
where
    Tz::Offset: core::fmt::Display,
{
    match to_datetime(timestamp, tz) {
        Some(dt) => dt.format(LABEL_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

fn to_datetime<Tz: TimeZone>(timestamp: UnixSeconds, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_opt(timestamp, 0).single()
}

#[derive(Clone, Copy)]
enum Shift {
    Forward,
    Backward,
}

// Ambiguous times pick the side that widens the day.
fn resolve<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime, shift: Shift) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, latest) => match shift {
            Shift::Forward => Some(earliest),
            Shift::Backward => Some(latest),
        },
        LocalResult::None => {
            let step = match shift {
                Shift::Forward => Duration::hours(1),
                Shift::Backward => Duration::hours(-1),
            };
            let moved = local.checked_add_signed(step)?;
            log_debug!("Local time {} does not exist, using {}", local, moved);
            match shift {
                Shift::Forward => tz.from_local_datetime(&moved).earliest(),
                Shift::Backward => tz.from_local_datetime(&moved).latest(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    const HOUR: i64 = 3600;
    /// 2024-04-07T00:00:00Z
    const APR_7: UnixSeconds = 1_712_448_000;
    /// 2024-09-08T00:00:00Z
    const SEP_8: UnixSeconds = 1_725_753_600;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Zone whose offset changes from `BEFORE` to `AFTER` (seconds east of
    /// UTC) at the Unix instant `SWITCH`
    #[derive(Debug, Clone, Copy)]
    struct SwitchingZone<const SWITCH: i64, const BEFORE: i32, const AFTER: i32>;

    impl<const SWITCH: i64, const BEFORE: i32, const AFTER: i32>
        SwitchingZone<SWITCH, BEFORE, AFTER>
    {
        fn offset_at(utc: i64) -> FixedOffset {
            let seconds = if utc < SWITCH { BEFORE } else { AFTER };
            FixedOffset::east_opt(seconds).unwrap()
        }
    }

    impl<const SWITCH: i64, const BEFORE: i32, const AFTER: i32> TimeZone
        for SwitchingZone<SWITCH, BEFORE, AFTER>
    {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let wall = local.and_utc().timestamp();
            let fits = |offset: i32| {
                Self::offset_at(wall - i64::from(offset)).local_minus_utc() == offset
            };
            let east = |offset: i32| FixedOffset::east_opt(offset).unwrap();

            // The larger offset maps a wall time to the earlier instant
            let (earlier, later) = if BEFORE > AFTER { (BEFORE, AFTER) } else { (AFTER, BEFORE) };
            match (fits(earlier), fits(later)) {
                (true, true) => LocalResult::Ambiguous(east(earlier), east(later)),
                (true, false) => LocalResult::Single(east(earlier)),
                (false, true) => LocalResult::Single(east(later)),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_at(utc.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_at(utc.and_utc().timestamp())
        }
    }

    // Local midnight at -04:00 jumps to 01:00 at -03:00 on 2024-09-08
    type MidnightGap = SwitchingZone<{ SEP_8 + 4 * HOUR }, { -14_400 }, { -10_800 }>;

    // Local 01:00 at -03:00 falls back to 00:00 at -04:00 on 2024-04-07
    type MidnightTwice = SwitchingZone<{ APR_7 + 4 * HOUR }, { -10_800 }, { -14_400 }>;

    // Local 24:00 at -03:00 falls back to 23:00 at -04:00 on 2024-04-06
    type LastHourTwice = SwitchingZone<{ APR_7 + 3 * HOUR }, { -10_800 }, { -14_400 }>;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10);
        assert_eq!(time.now(), 10);
    }

    #[test]
    fn utc_day_bounds() {
        // 2024-03-10T00:00:00Z
        assert_eq!(start_of_day(date(2024, 3, 10), &Utc), Some(1_710_028_800));
        assert_eq!(end_of_day(date(2024, 3, 10), &Utc), Some(1_710_028_800 + 86_399));
    }

    #[test]
    fn offset_day_bounds() {
        let cet = FixedOffset::east_opt(3600).unwrap();

        // Local midnight is 23:00 UTC the day before
        assert_eq!(start_of_day(date(2024, 3, 10), &cet), Some(1_710_028_800 - 3600));
        assert_eq!(end_of_day(date(2024, 3, 10), &cet), Some(1_710_028_800 - 3600 + 86_399));
    }

    #[test]
    fn today_follows_time_zone() {
        // 2024-03-10T23:30:00Z
        let clock = FixedTime::new(1_710_028_800 + 84_600);

        assert_eq!(today(&clock, &Utc), Some(date(2024, 3, 10)));
        assert_eq!(today(&clock, &FixedOffset::east_opt(3600).unwrap()), Some(date(2024, 3, 11)));
    }

    #[test]
    fn missing_midnight_starts_day_at_one() {
        let zone = MidnightGap::from_offset(&FixedOffset::east_opt(0).unwrap());
        let start = start_of_day(date(2024, 9, 8), &zone).unwrap();

        // Local 01:00 at -03:00
        assert_eq!(start, SEP_8 + 4 * HOUR);
        let local = zone.timestamp_opt(start, 0).unwrap().naive_local();
        assert_eq!(local, date(2024, 9, 8).and_hms_opt(1, 0, 0).unwrap());

        // Days stay contiguous across the gap
        assert_eq!(end_of_day(date(2024, 9, 7), &zone), Some(start - 1));
    }

    #[test]
    fn repeated_midnight_starts_at_earlier_instant() {
        let zone = MidnightTwice::from_offset(&FixedOffset::east_opt(0).unwrap());

        // 00:00 at -03:00, not the second 00:00 at -04:00
        assert_eq!(start_of_day(date(2024, 4, 7), &zone), Some(APR_7 + 3 * HOUR));
        assert_eq!(end_of_day(date(2024, 4, 6), &zone), Some(APR_7 + 3 * HOUR - 1));
    }

    #[test]
    fn repeated_last_hour_ends_at_later_instant() {
        let zone = LastHourTwice::from_offset(&FixedOffset::east_opt(0).unwrap());

        // Second 23:59:59 at -04:00
        assert_eq!(end_of_day(date(2024, 4, 6), &zone), Some(APR_7 + 4 * HOUR - 1));
        assert_eq!(start_of_day(date(2024, 4, 7), &zone), Some(APR_7 + 4 * HOUR));
    }

    #[test]
    fn labels() {
        // 2024-03-10T21:05:09Z
        let ts = 1_710_028_800 + 21 * 3600 + 5 * 60 + 9;
        assert_eq!(label(ts, &Utc), "3/10/2024, 9:05:09 PM");
        assert_eq!(label(1_710_028_800, &Utc), "3/10/2024, 12:00:00 AM");
    }
}
