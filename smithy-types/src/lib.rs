/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by generated service crates.

pub mod display;
mod error;
pub mod instant;

pub use crate::error::{Builder as ErrorBuilder, Error};
pub use crate::instant::Instant;

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn test_instant_parse() {
        let instant = Instant::from_str("1576540098.52", Format::EpochSeconds).expect("valid");
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        let instant = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).expect("valid");
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        assert!(Instant::from_str("yesterday", Format::DateTime).is_err());
    }
}
