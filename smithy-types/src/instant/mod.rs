/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

pub use format::DateParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and nanoseconds relative to the Unix epoch.
///
/// Ordering, equality and hashing are all derived from that pair, so two instants
/// parsed from differently formatted strings compare equal when they describe the
/// same moment.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    /// Converts a `SystemTime`, including times before the Unix epoch.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(after) => Instant {
                seconds: after.as_secs() as i64,
                subsecond_nanos: after.subsec_nanos(),
            },
            Err(err) => {
                let before = err.duration();
                let mut seconds = -(before.as_secs() as i64);
                let mut subsecond_nanos = before.subsec_nanos();
                if subsecond_nanos > 0 {
                    seconds -= 1;
                    subsecond_nanos = NANOS_PER_SECOND - subsecond_nanos;
                }
                Instant {
                    seconds,
                    subsecond_nanos,
                }
            }
        }
    }

    /// Parses `s` in the given wire format.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub(crate) fn to_chrono(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Renders the instant in the given wire format.
    ///
    /// Instants outside of the range `chrono` can represent fall back to
    /// epoch seconds for the calendar formats.
    pub fn fmt(&self, format: Format) -> String {
        let chrono = match format {
            Format::EpochSeconds => None,
            _ => self.to_chrono(),
        };
        match (format, chrono) {
            (Format::DateTime, Some(date_time)) => {
                let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                if !rfc3339.contains('.') {
                    return rfc3339;
                }
                // AutoSi pads the fraction to millis, micros or nanos
                let mut trimmed = rfc3339
                    .trim_end_matches('Z')
                    .trim_end_matches('0')
                    .to_owned();
                trimmed.push('Z');
                trimmed
            }
            (Format::HttpDate, Some(date_time)) => format::http_date::format(&date_time),
            _ => format::epoch_seconds::format(self),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Wire formats an [`Instant`] can be written in and read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 date-time, eg. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// IMF-fixdate, eg. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Fractional seconds since the epoch, eg. `1576540098.52`
    EpochSeconds,
}

#[cfg(feature = "serde-serialize")]
impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&Instant::fmt(self, Format::DateTime))
    }
}

#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        Instant::from_str(&data, Format::DateTime).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn date_time_keeps_whole_seconds_intact() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
        assert_eq!(instant.to_string(), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn date_time_trims_fraction() {
        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        let instant = Instant::from_secs_and_nanos(1576540098, 1);
        assert_eq!(
            instant.fmt(Format::DateTime),
            "2019-12-16T23:48:18.000000001Z"
        );
    }

    #[test]
    fn system_time_before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "1969-12-31T23:59:58.5Z");
    }

    #[test]
    fn nanos_overflow_carries_into_seconds() {
        let instant = Instant::from_secs_and_nanos(10, 1_500_000_000);
        assert_eq!(instant, Instant::from_secs_and_nanos(11, 500_000_000));
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Instant::from_secs_and_nanos(5, 999_999_999);
        let later = Instant::from_epoch_seconds(6);
        assert!(earlier < later);
    }

    #[test]
    fn unrepresentable_dates_fall_back_to_epoch_seconds() {
        let instant = Instant::from_epoch_seconds(i64::MAX);
        assert_eq!(instant.fmt(Format::DateTime), i64::MAX.to_string());
    }

    proptest! {
        #[test]
        fn date_time_round_trips(seconds in -62_135_596_800i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime), Ok(instant));
        }

        #[test]
        fn epoch_seconds_round_trip(seconds in -1_000_000_000_000i64..1_000_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds), Ok(instant));
        }
    }
}
