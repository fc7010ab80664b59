//! Countdown to an app's launch.
//!
//! Launch dates are stored as local date-times without an offset. They are
//! resolved against a time zone once, then compared with the injected
//! [`Clock`] on every tick.

use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDateTime, TimeZone};
use std::fmt;

use crate::runtime::Clock;

pub const LAUNCH_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SECOND_MS: u64 = 1000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::default()
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Time from `now_ms` until `launch_ms`, all zero once the launch has passed.
pub fn time_left(launch_ms: i64, now_ms: u64) -> TimeLeft {
    let Ok(launch_ms) = u64::try_from(launch_ms) else {
        return TimeLeft::default();
    };
    let Some(diff) = launch_ms.checked_sub(now_ms).filter(|d| *d > 0) else {
        return TimeLeft::default();
    };

    TimeLeft {
        days: diff / DAY_MS,
        hours: diff % DAY_MS / HOUR_MS,
        minutes: diff % HOUR_MS / MINUTE_MS,
        seconds: diff % MINUTE_MS / SECOND_MS,
    }
}

pub fn parse_launch_date(date: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date, LAUNCH_DATE_FORMAT)
        .with_context(|| format!("Invalid launch date '{}'", date))
}

/// Milliseconds since the epoch for `date` read in `tz`.
///
/// An ambiguous local time (clocks going back) resolves to the earlier
/// instant. A time skipped by a DST jump is an error.
pub fn launch_millis<Tz: TimeZone>(date: NaiveDateTime, tz: &Tz) -> Result<i64> {
    date.and_local_timezone(tz.clone())
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| anyhow!("Launch date {} does not exist in this time zone", date))
}

pub struct Countdown<C: Clock> {
    launch_ms: i64,
    clock: C,
}

impl<C: Clock> Countdown<C> {
    pub fn new(launch_ms: i64, clock: C) -> Self {
        Self { launch_ms, clock }
    }

    /// Parses a launch date in `tz`.
    pub fn from_launch_date<Tz: TimeZone>(date: &str, tz: &Tz, clock: C) -> Result<Self> {
        let launch_ms = launch_millis(parse_launch_date(date)?, tz)?;
        Ok(Self::new(launch_ms, clock))
    }

    pub fn launch_ms(&self) -> i64 {
        self.launch_ms
    }

    pub fn remaining(&self) -> TimeLeft {
        time_left(self.launch_ms, self.clock.now_millis())
    }
}
