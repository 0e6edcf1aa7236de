// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::str::FromStr;

use anyhow::Result;
use rangeq::*;

#[test]
fn integer_overflow_promotes() {
    let max = Number::from(i64::MAX);
    let one = Number::from(1);

    let sum = &max + &one;
    assert!(matches!(sum, Number::BigInt(_)));
    assert_eq!(sum, Number::from(BigInt::from(i64::MAX) + BigInt::from(1)));

    // Back into range.
    assert!(matches!(&sum - &one, Number::Int(i64::MAX)));

    let min = Number::from(i64::MIN);
    assert!(matches!(&min - &one, Number::BigInt(_)));
    assert!(matches!(-&min, Number::BigInt(_)));
    assert_eq!(-(-&min), min);
}

#[test]
fn float_results_normalize() {
    let sum = Number::from(1.5) + Number::from(1.5);
    assert!(matches!(sum, Number::Int(3)));
    assert_eq!(sum.format_decimal(), "3");

    let diff = Number::from(0.5) - Number::from(2);
    assert!(matches!(diff, Number::Float(_)));
    assert_eq!(diff, Number::from(-1.5));
}

#[test]
fn mixed_equality_and_order() {
    assert_eq!(Number::from(3), Number::from(3.0));
    assert_ne!(Number::from(3), Number::from(3.5));
    assert!(Number::from(3) < Number::from(3.5));
    assert!(Number::from(-1) < Number::zero());
    assert!(Number::from(BigInt::from(u64::MAX) * BigInt::from(2)) > Number::from(i64::MAX));
    assert_ne!(Number::from(f64::NAN), Number::from(f64::NAN));
}

#[test]
fn conversions() {
    assert_eq!(Number::from(42).as_i64(), Some(42));
    assert_eq!(Number::from(42.0).as_i64(), Some(42));
    assert_eq!(Number::from(42.5).as_i64(), None);
    assert_eq!(Number::from(2.5).as_f64(), Some(2.5));
    assert_eq!(Number::from(7).as_f64(), Some(7.0));
    assert_eq!(Number::from(u64::MAX).as_i64(), None);
    assert_eq!(Number::from(u64::MAX).as_big(), Some(BigInt::from(u64::MAX)));
    assert!(Number::from(4.0).is_integer());
    assert!(!Number::from(4.1).is_integer());
    assert!(Number::from(0.0).is_zero());
}

#[test]
fn parse() -> Result<()> {
    assert_eq!(Number::from_str("42")?, Number::from(42));
    assert_eq!(Number::from_str(" -17 ")?, Number::from(-17));
    assert_eq!(Number::from_str("+1_000")?, Number::from(1000));
    assert_eq!(Number::from_str("1e3")?, Number::from(1000));
    assert_eq!(Number::from_str("2.5")?, Number::from(2.5));
    assert_eq!(Number::from_str(".5")?, Number::from(0.5));
    assert_eq!(
        Number::from_str("100000000000000000000")?,
        Number::from(BigInt::from(10u64.pow(10)) * BigInt::from(10u64.pow(10)))
    );

    assert_eq!(Number::from_str(""), Err(ParseNumberError));
    assert_eq!(Number::from_str("abc"), Err(ParseNumberError));
    assert_eq!(Number::from_str("1.2.3"), Err(ParseNumberError));
    Ok(())
}

#[test]
fn serialize() -> Result<()> {
    assert_eq!(serde_json::to_string(&Number::from(1.0))?, "1");
    assert_eq!(serde_json::to_string(&Number::from(-1.0))?, "-1");
    assert_eq!(serde_json::to_string(&Number::from(1.1))?, "1.1");
    assert_eq!(serde_json::to_string(&Number::from(-7))?, "-7");
    assert_eq!(
        serde_json::to_string(&vec![Number::from(13), Number::from(15)])?,
        "[13,15]"
    );
    Ok(())
}

#[test]
fn deserialize() -> Result<()> {
    let values: Vec<Number> = serde_json::from_str("[5, -3, 2.5, 18446744073709551615]")?;
    assert_eq!(
        values,
        vec![
            Number::from(5),
            Number::from(-3),
            Number::from(2.5),
            Number::from(u64::MAX)
        ]
    );

    assert!(serde_json::from_str::<Number>("\"5\"").is_err());
    assert!(serde_json::from_str::<Number>("null").is_err());
    Ok(())
}
