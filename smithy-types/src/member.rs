/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Value semantics of individual shape members.
//!
//! Hashes follow the JVM `hashCode` contract of the modeled value types so that a shape's
//! [`hash_code`](crate::shape::hash_shape) matches what other SDKs compute for the same data.

use crate::Instant;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Multiplier used to fold member hashes together.
pub const HASH_PRIME: i32 = 31;

const TRUE_HASH: i32 = 1231;
const FALSE_HASH: i32 = 1237;
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// A value that can be stored in a shape member.
pub trait MemberValue {
    /// Hash of the value.
    fn member_hash(&self) -> i32;

    /// Renders the value as it appears inside a shape's `Display` output.
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Structural equality.
    fn member_eq(&self, other: &Self) -> bool
    where
        Self: Sized;
}

/// Compares two optional members: both absent is equal, one absent is not.
pub fn option_eq<T: MemberValue>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.member_eq(b),
        _ => false,
    }
}

/// Hash of a string over its UTF-16 code units.
pub fn hash_str(value: &str) -> i32 {
    value.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit))
    })
}

fn fold_long(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        value.to_bits()
    }
}

impl MemberValue for String {
    fn member_hash(&self) -> i32 {
        hash_str(self)
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl MemberValue for i32 {
    fn member_hash(&self) -> i32 {
        *self
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl MemberValue for i64 {
    fn member_hash(&self) -> i32 {
        fold_long(*self)
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl MemberValue for bool {
    fn member_hash(&self) -> i32 {
        if *self {
            TRUE_HASH
        } else {
            FALSE_HASH
        }
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }
}

// Doubles compare by canonical bit pattern: every NaN equals every other NaN and 0.0 != -0.0.
// That keeps shape equality reflexive, so shapes can implement `Eq`.
impl MemberValue for f64 {
    fn member_hash(&self) -> i32 {
        fold_long(canonical_bits(*self) as i64)
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_double(*self, f)
    }

    fn member_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }
}

/// Renders a double in the form of the JVM's `Double.toString`: plain decimal notation for
/// magnitudes in `[1e-3, 1e7)`, otherwise a mantissa with at least one fractional digit and
/// an `E` exponent (`1.0E16`, `1.5E-7`).
fn fmt_double(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        });
    }
    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // `Debug` keeps a fractional part and only switches to exponents outside this range
        return write!(f, "{:?}", value);
    }
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            write!(f, "{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => write!(f, "{}.0E{}", mantissa, exponent),
        None => f.write_str(&scientific),
    }
}

/// Storage for `double` members.
///
/// JSON has no literal for non-finite numbers, so `NaN`, `Infinity` and `-Infinity` are
/// written as those strings and accepted back in either form.
#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct Double(pub f64);

impl fmt::Debug for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl MemberValue for Double {
    fn member_hash(&self) -> i32 {
        self.0.member_hash()
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_member(f)
    }

    fn member_eq(&self, other: &Self) -> bool {
        self.0.member_eq(&other.0)
    }
}

impl Serialize for Double {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            })
        } else {
            serializer.serialize_f64(value)
        }
    }
}

struct DoubleVisitor;

impl<'de> Visitor<'de> for DoubleVisitor {
    type Value = Double;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number, `NaN`, `Infinity` or `-Infinity`")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Double, E> {
        Ok(Double(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Double, E> {
        Ok(Double(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Double, E> {
        Ok(Double(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Double, E> {
        match value {
            "NaN" => Ok(Double(f64::NAN)),
            "Infinity" => Ok(Double(f64::INFINITY)),
            "-Infinity" => Ok(Double(f64::NEG_INFINITY)),
            other => Err(de::Error::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Double {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DoubleVisitor)
    }
}

impl MemberValue for Instant {
    fn member_hash(&self) -> i32 {
        fold_long(self.epoch_millis())
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: MemberValue> MemberValue for Vec<T> {
    fn member_hash(&self) -> i32 {
        self.iter().fold(1i32, |hash, item| {
            hash.wrapping_mul(HASH_PRIME)
                .wrapping_add(item.member_hash())
        })
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.fmt_member(f)?;
        }
        f.write_str("]")
    }

    fn member_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.member_eq(b))
    }
}

#[cfg(test)]
mod test {
    use super::{hash_str, option_eq, Double, MemberValue};
    use crate::Instant;
    use std::fmt;

    struct Rendered<'a, T>(&'a T);

    impl<T: MemberValue> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_member(f)
        }
    }

    fn render<T: MemberValue>(value: &T) -> String {
        Rendered(value).to_string()
    }

    #[test]
    fn string_hash_matches_jvm() {
        assert_eq!(hash_str(""), 0);
        assert_eq!(hash_str("abc"), 96354);
        // overflow wraps rather than panicking
        assert_eq!(hash_str("polygenelubricants"), i32::MIN);
        // code units, not chars: U+1F600 is a surrogate pair
        assert_eq!(hash_str("\u{1F600}"), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn scalar_hashes_match_jvm() {
        assert_eq!(100i32.member_hash(), 100);
        assert_eq!(true.member_hash(), 1231);
        assert_eq!(false.member_hash(), 1237);
        assert_eq!((1i64 << 32).member_hash(), 1);
        assert_eq!((-1i64).member_hash(), 0);
        assert_eq!(1.0f64.member_hash(), 1072693248);
        assert_eq!(f64::NAN.member_hash(), (-f64::NAN).member_hash());
        assert_eq!(Instant::from_epoch_seconds(0).member_hash(), 0);
        assert_eq!(Instant::from_secs_and_nanos(1, 500_000_000).member_hash(), 1500);
    }

    #[test]
    fn list_hash_matches_jvm() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(list.member_hash(), 4066);
        assert_eq!(Vec::<String>::new().member_hash(), 1);
    }

    #[test]
    fn double_equality_is_total() {
        assert!(f64::NAN.member_eq(&f64::NAN));
        assert!(!0.0f64.member_eq(&-0.0));
        assert!(1.5f64.member_eq(&1.5));
    }

    #[test]
    fn absent_only_equals_absent() {
        assert!(option_eq::<bool>(&None, &None));
        assert!(!option_eq(&None, &Some(false)));
        assert!(!option_eq(&Some(String::new()), &None));
        assert!(option_eq(&Some(vec![1, 2]), &Some(vec![1, 2])));
        assert!(!option_eq(&Some(vec![1, 2]), &Some(vec![2, 1])));
    }

    #[test]
    fn rendering() {
        assert_eq!(render(&"us-east-1a".to_string()), "us-east-1a");
        assert_eq!(render(&1.0f64), "1.0");
        assert_eq!(render(&0.25f64), "0.25");
        assert_eq!(render(&f64::NEG_INFINITY), "-Infinity");
        assert_eq!(render(&f64::NAN), "NaN");
        assert_eq!(render(&-0.0f64), "-0.0");
        assert_eq!(render(&false), "false");
        assert_eq!(
            render(&vec!["a".to_string(), "b".to_string()]),
            "[a, b]"
        );
        assert_eq!(render(&Vec::<i32>::new()), "[]");
        assert_eq!(
            render(&Instant::from_epoch_seconds(1576540098)),
            "2019-12-16T23:48:18Z"
        );
    }

    #[test]
    fn doubles_outside_plain_range_use_exponent_form() {
        assert_eq!(render(&1e16f64), "1.0E16");
        assert_eq!(render(&1e-7f64), "1.0E-7");
        assert_eq!(render(&-1.5e-9f64), "-1.5E-9");
        assert_eq!(render(&1e7f64), "1.0E7");
        assert_eq!(render(&123456789.0f64), "1.23456789E8");
        assert_eq!(render(&9999999.0f64), "9999999.0");
        assert_eq!(render(&0.001f64), "0.001");
        assert_eq!(render(&0.0f64), "0.0");
    }

    #[test]
    fn non_finite_doubles_serialize_as_strings() {
        assert_eq!(serde_json::to_string(&Double(f64::NAN)).unwrap(), "\"NaN\"");
        assert_eq!(
            serde_json::to_string(&Double(f64::NEG_INFINITY)).unwrap(),
            "\"-Infinity\""
        );
        assert_eq!(serde_json::to_string(&Double(0.25)).unwrap(), "0.25");

        let back: Double = serde_json::from_str("\"Infinity\"").unwrap();
        assert_eq!(back.0, f64::INFINITY);
        let back: Double = serde_json::from_str("\"NaN\"").unwrap();
        assert!(back.0.is_nan());
        let back: Double = serde_json::from_str("3").unwrap();
        assert_eq!(back.0, 3.0);
        assert!(serde_json::from_str::<Double>("\"lots\"").is_err());
    }
}
