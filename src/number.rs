// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::float_cmp, clippy::as_conversions)]

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigInt as NumBigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

pub type BigInt = NumBigInt;

const F64_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// A sequence value or query result.
///
/// Integer arithmetic never overflows: results that leave the `i64` range
/// are carried as big integers and brought back to `Int` once they fit again.
/// Any operation involving a `Float` is carried out in double precision.
#[derive(Clone)]
pub enum Number {
    Int(i64),
    Float(f64),
    BigInt(Arc<BigInt>),
}

impl Number {
    pub fn zero() -> Number {
        Number::Int(0)
    }

    fn from_bigint_owned(value: BigInt) -> Self {
        match value.to_i64() {
            Some(i) => Number::Int(i),
            None => Number::BigInt(Arc::new(value)),
        }
    }

    // Exact integer view. Floats only qualify when integral and within the
    // range f64 represents without gaps.
    fn to_bigint_owned(&self) -> Option<BigInt> {
        match self {
            Number::Int(v) => Some(BigInt::from(*v)),
            Number::BigInt(v) => Some((**v).clone()),
            Number::Float(f) => Self::float_to_small_int(*f).map(BigInt::from),
        }
    }

    // Integer operand of integer-only arithmetic; `None` for any float.
    fn integer_operand(&self) -> Option<BigInt> {
        match self {
            Number::Float(_) => None,
            _ => self.to_bigint_owned(),
        }
    }

    fn float_to_small_int(value: f64) -> Option<i64> {
        if !value.is_finite() || value.fract() != 0.0 || value.abs() > F64_SAFE_INTEGER {
            return None;
        }
        Some(value as i64)
    }

    fn to_f64_lossy(&self) -> f64 {
        match self {
            Number::Int(v) => *v as f64,
            Number::Float(v) => *v,
            Number::BigInt(v) => match v.to_f64() {
                Some(f) => f,
                None if v.is_negative() => f64::NEG_INFINITY,
                None => f64::INFINITY,
            },
        }
    }

    fn normalize_float(value: f64) -> Number {
        match Self::float_to_small_int(value) {
            Some(i) => Number::Int(i),
            None => Number::Float(value),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(v) => *v == 0,
            Number::Float(f) => *f == 0.0,
            Number::BigInt(v) => v.is_zero(),
        }
    }

    pub fn is_integer(&self) -> bool {
        match self {
            Number::Float(f) => f.is_finite() && f.fract() == 0.0,
            _ => true,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(*v),
            Number::Float(f) => Self::float_to_small_int(*f),
            Number::BigInt(v) => v.to_i64(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Float(f) if f.is_finite() => Some(*f),
            Number::Float(_) => None,
            Number::Int(v) if (*v as i128).abs() <= F64_SAFE_INTEGER as i128 => Some(*v as f64),
            Number::Int(_) => None,
            Number::BigInt(v) if v.bits() <= 53 => v.to_f64(),
            Number::BigInt(_) => None,
        }
    }

    pub fn as_big(&self) -> Option<BigInt> {
        self.to_bigint_owned()
    }

    pub fn format_decimal(&self) -> String {
        match self {
            Number::Int(v) => v.to_string(),
            Number::BigInt(v) => v.to_string(),
            Number::Float(f) => match Self::float_to_small_int(*f) {
                Some(i) => i.to_string(),
                None => f.to_string(),
            },
        }
    }
}

impl Add<&Number> for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, rhs) {
            if let Some(sum) = a.checked_add(*b) {
                return Number::Int(sum);
            }
        }

        match (self.integer_operand(), rhs.integer_operand()) {
            (Some(a), Some(b)) => Number::from_bigint_owned(a + b),
            _ => Number::normalize_float(self.to_f64_lossy() + rhs.to_f64_lossy()),
        }
    }
}

impl Sub<&Number> for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, rhs) {
            if let Some(diff) = a.checked_sub(*b) {
                return Number::Int(diff);
            }
        }

        match (self.integer_operand(), rhs.integer_operand()) {
            (Some(a), Some(b)) => Number::from_bigint_owned(a - b),
            _ => Number::normalize_float(self.to_f64_lossy() - rhs.to_f64_lossy()),
        }
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(v) => match v.checked_neg() {
                Some(n) => Number::Int(n),
                None => Number::from_bigint_owned(-BigInt::from(*v)),
            },
            Number::Float(f) => Number::Float(-f),
            Number::BigInt(v) => Number::from_bigint_owned(-(**v).clone()),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        &self + &rhs
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        &self - &rhs
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        -&self
    }
}

impl<'a> std::iter::Sum<&'a Number> for Number {
    fn sum<I: Iterator<Item = &'a Number>>(iter: I) -> Number {
        iter.fold(Number::zero(), |acc, n| &acc + n)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.to_bigint_owned(), other.to_bigint_owned()) {
            return a == b;
        }

        let a = self.to_f64_lossy();
        let b = other.to_f64_lossy();
        if a.is_nan() || b.is_nan() {
            return false;
        }
        a == b
    }
}

impl Eq for Number {}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.to_bigint_owned(), other.to_bigint_owned()) {
            return a.cmp(&b);
        }

        self.to_f64_lossy()
            .partial_cmp(&other.to_f64_lossy())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_decimal())
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_decimal())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::BigInt(Arc::new(BigInt::from(value))),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::from_bigint_owned(BigInt::from(value))
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        Number::from_bigint_owned(BigInt::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::from_bigint_owned(value)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseNumberError;

impl Display for ParseNumberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("invalid number literal")
    }
}

impl std::error::Error for ParseNumberError {}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().replace('_', "");
        if canonical.is_empty() {
            return Err(ParseNumberError);
        }

        let digits = canonical
            .strip_prefix('-')
            .or_else(|| canonical.strip_prefix('+'))
            .unwrap_or(canonical.as_str());

        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return canonical
                .parse::<BigInt>()
                .map(Number::from_bigint_owned)
                .map_err(|_| ParseNumberError);
        }

        // Decimals and scientific literals. Integral results within the exact
        // f64 range become integers so that "1e3" and "1000" compare equal.
        canonical
            .parse::<f64>()
            .map(Number::normalize_float)
            .map_err(|_| ParseNumberError)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Int(v) => serializer.serialize_i64(*v),
            Number::Float(f) => match Self::float_to_small_int(*f) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*f),
            },
            Number::BigInt(_) => {
                let v = serde_json::Number::from_str(&self.format_decimal())
                    .map_err(|_| serde::ser::Error::custom("could not serialize number"))?;
                v.serialize(serializer)
            }
        }
    }
}

struct NumberVisitor;

impl Visitor<'_> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a number")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from(v))
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Number, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}
