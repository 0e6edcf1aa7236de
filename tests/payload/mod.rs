// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::Result;
use rangeq::*;

fn numbers(values: &[i64]) -> Vec<Number> {
    values.iter().copied().map(Number::from).collect()
}

#[test]
fn evaluate_json_payload() -> Result<()> {
    let payload = Payload::from_json_str(
        r#"{
            "token": "0a1b2c",
            "data": [5, 3, 8, 2, 7],
            "query": [
                { "type": "1", "range": [1, 3] },
                { "type": "2", "range": [0, 4] }
            ]
        }"#,
    )?;

    assert_eq!(payload.token.as_deref(), Some("0a1b2c"));
    assert_eq!(
        payload.queries()?,
        vec![Query::range_sum(1, 3), Query::parity_diff(0, 4)]
    );

    let results = payload.evaluate()?;
    assert_eq!(results, numbers(&[13, 15]));
    assert_eq!(results_to_json(&results)?, "[13,15]");
    Ok(())
}

#[test]
fn numeric_kind_tags() -> Result<()> {
    let payload = Payload::from_json_str(
        r#"{ "data": [1, 2, 3], "query": [{ "type": 2, "range": [0, 2] }, { "type": 1, "range": [2, 2] }] }"#,
    )?;
    assert_eq!(payload.token, None);
    assert_eq!(payload.evaluate()?, numbers(&[2, 3]));
    Ok(())
}

#[test]
fn missing_query_list_is_empty_batch() -> Result<()> {
    let payload = Payload::from_json_str(r#"{ "data": [] }"#)?;
    assert!(payload.query.is_empty());
    assert_eq!(payload.evaluate()?, vec![]);
    Ok(())
}

#[test]
fn unsupported_kind() -> Result<()> {
    let payload = Payload::from_json_str(
        r#"{ "data": [1, 2, 3], "query": [{ "type": "1", "range": [0, 1] }, { "type": "3", "range": [0, 1] }] }"#,
    )?;

    let err = payload.queries().unwrap_err();
    assert_eq!(err.index, 1);
    assert!(err.is_unsupported_kind());
    assert_eq!(
        err.error,
        QueryError::UnsupportedQueryKind {
            kind: "3".to_string()
        }
    );

    let err = payload.evaluate().unwrap_err();
    assert_eq!(err.to_string(), "query #1: unsupported query kind `3`");
    Ok(())
}

#[test]
fn out_of_range_through_payload() -> Result<()> {
    let payload = Payload::from_json_str(
        r#"{ "data": [5, 3, 8], "query": [{ "type": "1", "range": [1, 3] }] }"#,
    )?;

    let err = payload.evaluate().unwrap_err();
    let batch_error = err.downcast_ref::<BatchError>().map(|e| e.is_out_of_range());
    assert_eq!(batch_error, Some(true));

    let payload = Payload::from_json_str(
        r#"{ "data": [5, 3, 8], "query": [{ "type": "2", "range": [-1, 1] }] }"#,
    )?;
    assert!(payload.into_batch()?.process().is_err_and(|e| e.is_out_of_range()));
    Ok(())
}

#[test]
fn malformed_documents() {
    // Sequence values must be numbers.
    assert!(Payload::from_json_str(r#"{ "data": ["5"], "query": [] }"#).is_err());
    // Ranges are pairs.
    assert!(Payload::from_json_str(
        r#"{ "data": [5], "query": [{ "type": "1", "range": [0] }] }"#
    )
    .is_err());
    assert!(Payload::from_json_str(r#"{ "query": [] }"#).is_err());
}

#[test]
fn round_trip_through_typed_queries() -> Result<()> {
    let queries = [Query::parity_diff(0, 1), Query::range_sum(1, 1)];
    let payload = Payload::new(numbers(&[4, 9]), &queries);

    let json = serde_json::to_string(&payload)?;
    assert_eq!(
        json,
        r#"{"data":[4,9],"query":[{"type":"2","range":[0,1]},{"type":"1","range":[1,1]}]}"#
    );
    assert_eq!(Payload::from_json_str(&json)?.evaluate()?, numbers(&[-5, 9]));
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn evaluate_yaml_payload() -> Result<()> {
    let payload = Payload::from_yaml_str(
        r#"
token: abc
data: [1.5, 2.5, 3, 4]
query:
  - type: "1"
    range: [0, 3]
  - type: 2
    range: [1, 2]
"#,
    )?;
    assert_eq!(payload.evaluate()?, vec![Number::from(11), Number::from(0.5)]);
    Ok(())
}

#[test]
fn load_from_file() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("rangeq-payload-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;

    let json = dir.join("payload.json");
    std::fs::write(
        &json,
        r#"{ "data": [5, 3, 8, 2, 7], "query": [{ "type": "1", "range": [0, 4] }] }"#,
    )?;
    assert_eq!(Payload::from_file(&json)?.evaluate()?, numbers(&[25]));

    let unknown = dir.join("payload.txt");
    std::fs::write(&unknown, "")?;
    assert!(Payload::from_file(&unknown).is_err());
    assert!(Payload::from_file(dir.join("missing.json")).is_err());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
#[ignore = "intended for evaluating a payload file passed on the command line"]
fn one_payload() -> Result<()> {
    env_logger::init();

    let Some(file) = std::env::args().find(|a| a.ends_with(".json") || a.ends_with(".yaml"))
    else {
        anyhow::bail!("missing <payload.json|payload.yaml>");
    };

    let results = Payload::from_file(&file)?.evaluate()?;
    println!("results:\n{}", results_to_json(&results)?);
    Ok(())
}
