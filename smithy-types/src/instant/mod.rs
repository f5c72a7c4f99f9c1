/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// A point in time with nanosecond precision, stored relative to the Unix epoch.
///
/// `subsecond_nanos` is always in `0..1_000_000_000`, so instants before the epoch carry a
/// negative `seconds` and a positive fraction.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    /// Creates an instant from whole seconds since the Unix epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates an instant from whole seconds plus a fraction of a second in `[0, 1)`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: ((fraction * f64::from(NANOS_PER_SECOND)) as u32)
                .min(NANOS_PER_SECOND - 1),
        }
    }

    /// Creates an instant from seconds and nanoseconds. Whole seconds in `subsecond_nanos`
    /// carry into `seconds`, saturating at the representable range.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add(i64::from(subsecond_nanos / NANOS_PER_SECOND)),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Creates an instant from fractional seconds since the Unix epoch.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    /// Converts a [`SystemTime`], including times before the epoch.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(since) => Instant {
                seconds: since.as_secs() as i64,
                subsecond_nanos: since.subsec_nanos(),
            },
            Err(err) => {
                let before = err.duration();
                Instant::from_secs_and_nanos(-(before.as_secs() as i64), 0)
                    .minus_nanos(before.subsec_nanos())
            }
        }
    }

    /// Parses a timestamp in the given format.
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s).map_err(|source| {
                    InstantParseError::DateTime {
                        input: s.to_owned(),
                        source,
                    }
                })?;
                Ok(Instant {
                    seconds: parsed.timestamp(),
                    subsecond_nanos: parsed.timestamp_subsec_nanos(),
                })
            }
            Format::EpochSeconds => parse_epoch_seconds(s),
        }
    }

    fn minus_nanos(self, nanos: u32) -> Self {
        if nanos == 0 {
            self
        } else if nanos <= self.subsecond_nanos {
            Instant::from_secs_and_nanos(self.seconds, self.subsecond_nanos - nanos)
        } else {
            Instant::from_secs_and_nanos(
                self.seconds.saturating_sub(1),
                self.subsecond_nanos + NANOS_PER_SECOND - nanos,
            )
        }
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    /// Whether the instant has a non-zero sub-second part.
    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Seconds since the epoch as a float. Precision is lost far from the epoch.
    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.subsecond_nanos) / f64::from(NANOS_PER_SECOND)
    }

    /// Whole seconds since the epoch, rounded towards negative infinity.
    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    /// Milliseconds since the epoch, rounded towards negative infinity.
    pub fn epoch_millis(&self) -> i64 {
        self.seconds
            .saturating_mul(1000)
            .saturating_add(i64::from(self.subsecond_nanos / NANOS_PER_MILLI))
    }

    /// Formats the instant. [`Format::DateTime`] falls back to epoch seconds for instants
    /// outside the range an RFC 3339 date can express.
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::Nanos, true);
                    trim_fraction(&rfc3339)
                }
                // beyond what chrono can represent
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    // the fraction is stored positive; negative instants render towards zero
                    let (sign, whole, nanos) = if self.seconds < 0 {
                        ("-", -(self.seconds + 1), NANOS_PER_SECOND - self.subsecond_nanos)
                    } else {
                        ("", self.seconds, self.subsecond_nanos)
                    };
                    let fraction = format!("{:0>9}", nanos);
                    format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

/// Drops trailing zeros from the fractional seconds of an RFC 3339 string ending in `Z`.
fn trim_fraction(rfc3339: &str) -> String {
    let without_zone = rfc3339.trim_end_matches('Z');
    match without_zone.rfind('.') {
        Some(dot) => {
            let (whole, fraction) = without_zone.split_at(dot);
            let digits = fraction[1..].trim_end_matches('0');
            if digits.is_empty() {
                format!("{}Z", whole)
            } else {
                format!("{}.{}Z", whole, digits)
            }
        }
        None => format!("{}Z", without_zone),
    }
}

fn parse_epoch_seconds(s: &str) -> Result<Instant, InstantParseError> {
    let invalid = || InstantParseError::EpochSeconds(s.to_owned());
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };
    let seconds: i64 = whole.parse().map_err(|_| invalid())?;
    let nanos = match fraction {
        None => 0,
        Some(digits)
            if !digits.is_empty()
                && digits.len() <= 9
                && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            let padded = format!("{:0<9}", digits);
            padded.parse::<u32>().map_err(|_| invalid())?
        }
        Some(_) => return Err(invalid()),
    };
    if whole.starts_with('-') {
        Ok(Instant::from_epoch_seconds(seconds).minus_nanos(nanos))
    } else {
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
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

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Instant::fmt(self, Format::DateTime))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // out-of-range instants serialize as epoch seconds
        Instant::from_str(&raw, Format::DateTime)
            .or_else(|err| Instant::from_str(&raw, Format::EpochSeconds).map_err(|_| err))
            .map_err(de::Error::custom)
    }
}

/// Timestamp formats understood by [`Instant::from_str`] and [`Instant::fmt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Seconds since the epoch with an optional fraction, e.g. `1576540098.52`
    EpochSeconds,
}

/// Failure to parse a timestamp.
#[derive(Debug, thiserror::Error)]
pub enum InstantParseError {
    #[error("`{input}` is not an RFC 3339 timestamp")]
    DateTime {
        input: String,
        source: chrono::ParseError,
    },
    #[error("`{0}` is not a valid epoch-seconds timestamp")]
    EpochSeconds(String),
}

#[cfg(test)]
mod test {
    use super::{Format, Instant, InstantParseError};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn whole_seconds_ending_in_zero_are_kept() {
        let instant = Instant::from_epoch_seconds(1576540100);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:20Z");
        assert_eq!(instant.to_string(), "2019-12-16T23:48:20Z");
    }

    #[test]
    fn parse_date_time() {
        let instant = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap();
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert_eq!(instant.epoch_millis(), 1576540098520);

        let offset = Instant::from_str("2019-12-17T00:48:18+01:00", Format::DateTime).unwrap();
        assert_eq!(offset, Instant::from_epoch_seconds(1576540098));

        let err = Instant::from_str("yesterday", Format::DateTime).unwrap_err();
        assert!(matches!(err, InstantParseError::DateTime { .. }));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        for bad in ["", "1.", "1.2.3", "1.0000000001", "abc", "1.-5"] {
            assert!(
                Instant::from_str(bad, Format::EpochSeconds).is_err(),
                "{} should not parse",
                bad
            );
        }
    }

    #[test]
    fn before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(instant.epoch_millis(), -1500);
        assert_eq!(instant.fmt(Format::DateTime), "1969-12-31T23:59:58.5Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
        assert_eq!(
            Instant::from_secs_and_nanos(-1, 750_000_000).fmt(Format::EpochSeconds),
            "-0.25"
        );
        assert_eq!(
            Instant::from_str("-0.25", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(-1, 750_000_000)
        );
    }

    #[test]
    fn serde_uses_rfc3339() {
        let instant = Instant::from_epoch_seconds(1576540098);
        let json = serde_json::to_string(&instant).unwrap();
        assert_eq!(json, "\"2019-12-16T23:48:18Z\"");
        let parsed: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, instant);
        assert!(serde_json::from_str::<Instant>("\"not a date\"").is_err());
    }

    #[test]
    fn carrying_nanos_saturates() {
        let instant = Instant::from_secs_and_nanos(i64::MAX, 1_000_000_000);
        assert_eq!(instant.epoch_seconds(), i64::MAX);
        assert!(!instant.has_nanos());
    }

    #[test]
    fn serde_round_trips_instants_beyond_rfc3339() {
        let instant = Instant::from_epoch_seconds(i64::MAX / 2);
        let json = serde_json::to_string(&instant).unwrap();
        assert_eq!(json, "\"4611686018427387903\"");
        let parsed: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, instant);

        let fractional = Instant::from_secs_and_nanos(i64::MIN / 2, 500_000_000);
        let json = serde_json::to_string(&fractional).unwrap();
        assert_eq!(serde_json::from_str::<Instant>(&json).unwrap(), fractional);
    }
}
