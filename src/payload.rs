// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::engine::{process_batch, Batch};
use crate::error::BatchError;
use crate::number::Number;
use crate::query::{decode_queries, Query, WireQuery};

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Input document delivered by the payload provider:
///
/// ```json
/// { "token": "...", "data": [5, 3, 8], "query": [{ "type": "1", "range": [0, 2] }] }
/// ```
///
/// The token is carried through untouched; the engine never looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub data: Vec<Number>,
    #[serde(default)]
    pub query: Vec<WireQuery>,
}

impl Payload {
    pub fn new(data: Vec<Number>, queries: &[Query]) -> Self {
        Self {
            token: None,
            data,
            query: queries.iter().copied().map(WireQuery::from).collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Payload> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Payload> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Payload> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Payload> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load a payload, choosing the format from the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Payload> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path),
            #[cfg(feature = "yaml")]
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => bail!(
                "Unsupported payload file `{}`. Must be json or yaml.",
                path.display()
            ),
        }
    }

    /// Typed queries in batch order.
    pub fn queries(&self) -> Result<Vec<Query>, BatchError> {
        decode_queries(&self.query)
    }

    pub fn into_batch(self) -> Result<Batch, BatchError> {
        let queries = self.queries()?;
        Ok(Batch::new(self.data, queries))
    }

    /// Decode the queries and answer them against `data`.
    pub fn evaluate(&self) -> Result<Vec<Number>> {
        let queries = self.queries()?;
        debug!(
            "evaluating {} queries over {} values",
            queries.len(),
            self.data.len()
        );

        let results = process_batch(&self.data, &queries)?;
        info!("answered {} queries", results.len());
        debug!("results: {results:?}");
        Ok(results)
    }
}

/// Render a result set as the JSON array posted to the result sink.
pub fn results_to_json(results: &[Number]) -> Result<String> {
    Ok(serde_json::to_string(results)?)
}
