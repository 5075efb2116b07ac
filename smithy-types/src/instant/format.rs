/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum DateParseErrorKind {
    Invalid(String),
    OutOfRange,
}

/// Error returned when a timestamp string can't be parsed in the requested format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    kind: DateParseErrorKind,
}

impl DateParseError {
    fn invalid(message: impl Into<String>) -> Self {
        DateParseError {
            kind: DateParseErrorKind::Invalid(message.into()),
        }
    }

    fn out_of_range() -> Self {
        DateParseError {
            kind: DateParseErrorKind::OutOfRange,
        }
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DateParseErrorKind::Invalid(msg) => write!(f, "invalid date: {}", msg),
            DateParseErrorKind::OutOfRange => write!(f, "date is out of range"),
        }
    }
}

impl Error for DateParseError {}

pub(crate) mod epoch_seconds {
    use super::{DateParseError, NANOS_PER_SECOND};
    use crate::Instant;

    /// Formats `instant` as fractional epoch seconds with trailing zeros removed.
    pub(crate) fn format(instant: &Instant) -> String {
        let seconds = instant.epoch_seconds();
        let nanos = instant.epoch_subsecond_nanos();
        if nanos == 0 {
            return seconds.to_string();
        }
        // negative instants store a positive fraction on top of a floored second
        let (sign, whole, fraction) = if seconds < 0 {
            ("-", (seconds + 1).unsigned_abs(), NANOS_PER_SECOND - nanos)
        } else {
            ("", seconds as u64, nanos)
        };
        let fraction = format!("{:09}", fraction);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(value: &str) -> Result<Instant, DateParseError> {
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, fraction) = match unsigned.find('.') {
            Some(idx) => (&unsigned[..idx], &unsigned[idx + 1..]),
            None => (unsigned, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateParseError::invalid(format!(
                "`{}` is not a number of seconds",
                value
            )));
        }
        if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateParseError::invalid(format!(
                "`{}` has an invalid fractional part",
                value
            )));
        }
        let whole: i64 = whole
            .parse()
            .map_err(|_| DateParseError::out_of_range())?;
        let nanos = if fraction.is_empty() {
            0
        } else {
            format!("{:0<9}", fraction)
                .parse::<u32>()
                .map_err(|_| DateParseError::invalid("fractional seconds"))?
        };
        match (negative, nanos) {
            (false, nanos) => Ok(Instant::from_secs_and_nanos(whole, nanos)),
            (true, 0) => Ok(Instant::from_epoch_seconds(-whole)),
            (true, nanos) => Ok(Instant::from_secs_and_nanos(
                -whole - 1,
                NANOS_PER_SECOND - nanos,
            )),
        }
    }

    #[cfg(test)]
    mod test {
        use super::{format, parse};
        use crate::Instant;

        #[test]
        fn negative_fractions() {
            let instant = parse("-1.5").expect("valid");
            assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
            assert_eq!(format(&instant), "-1.5");
            let instant = parse("-0.25").expect("valid");
            assert_eq!(format(&instant), "-0.25");
        }

        #[test]
        fn rejects_garbage() {
            assert!(parse("").is_err());
            assert!(parse("12a").is_err());
            assert!(parse("1.0000000001").is_err());
            assert!(parse(".5").is_err());
        }
    }
}

pub(crate) mod date_time {
    use super::DateParseError;
    use crate::Instant;
    use chrono::DateTime;

    pub(crate) fn parse(value: &str) -> Result<Instant, DateParseError> {
        let parsed = DateTime::parse_from_rfc3339(value)
            .map_err(|err| DateParseError::invalid(format!("`{}`: {}", value, err)))?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }

    #[cfg(test)]
    mod test {
        use super::parse;
        use crate::Instant;

        #[test]
        fn offsets_are_normalized_to_utc() {
            let utc = parse("2019-12-16T23:48:18Z").expect("valid");
            let offset = parse("2019-12-17T01:48:18+02:00").expect("valid");
            assert_eq!(utc, offset);
            assert_eq!(utc, Instant::from_epoch_seconds(1576540098));
        }

        #[test]
        fn fractional_seconds() {
            let instant = parse("2019-12-16T23:48:18.52Z").expect("valid");
            assert_eq!(instant.epoch_subsecond_nanos(), 520_000_000);
        }

        #[test]
        fn rejects_http_dates() {
            assert!(parse("Mon, 16 Dec 2019 23:48:18 GMT").is_err());
        }
    }
}

pub(crate) mod http_date {
    use super::DateParseError;
    use crate::Instant;
    use chrono::{DateTime, NaiveDateTime, Utc};

    const FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
    const FORMAT_MILLIS: &str = "%a, %d %b %Y %H:%M:%S%.3f GMT";
    const PARSE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S%.f GMT";

    /// Sub-second precision is written as milliseconds and only when present.
    pub(crate) fn format(date_time: &DateTime<Utc>) -> String {
        if date_time.timestamp_subsec_nanos() == 0 {
            date_time.format(FORMAT).to_string()
        } else {
            date_time.format(FORMAT_MILLIS).to_string()
        }
    }

    pub(crate) fn parse(value: &str) -> Result<Instant, DateParseError> {
        let parsed = NaiveDateTime::parse_from_str(value, PARSE_FORMAT)
            .map_err(|err| DateParseError::invalid(format!("`{}`: {}", value, err)))?
            .and_utc();
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }

    #[cfg(test)]
    mod test {
        use super::parse;
        use crate::instant::Format;
        use crate::Instant;

        #[test]
        fn formats_imf_fixdate() {
            let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
            assert_eq!(
                instant.fmt(Format::HttpDate),
                "Mon, 16 Dec 2019 23:48:18.520 GMT"
            );
            let instant = Instant::from_epoch_seconds(1576540098);
            assert_eq!(
                instant.fmt(Format::HttpDate),
                "Mon, 16 Dec 2019 23:48:18 GMT"
            );
        }

        #[test]
        fn parses_imf_fixdate() {
            let instant = parse("Mon, 16 Dec 2019 23:48:18 GMT").expect("valid");
            assert_eq!(instant, Instant::from_epoch_seconds(1576540098));
            let instant = parse("Mon, 16 Dec 2019 23:48:18.52 GMT").expect("valid");
            assert_eq!(instant.epoch_subsecond_nanos(), 520_000_000);
        }
    }
}
