// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::query::Query;

use thiserror::Error;

/// Reasons a single query cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Range is inverted, starts below zero or ends past the last element.
    #[error("{query} is out of range for a sequence of length {len}")]
    OutOfRangeQuery { query: Query, len: usize },

    /// Kind tag is neither range-sum (`1`) nor parity-diff (`2`).
    #[error("unsupported query kind `{kind}`")]
    UnsupportedQueryKind { kind: String },
}

/// A query failure together with the query's position in its batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("query #{index}: {error}")]
pub struct BatchError {
    pub index: usize,
    pub error: QueryError,
}

impl BatchError {
    pub fn new(index: usize, error: QueryError) -> Self {
        Self { index, error }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.error, QueryError::OutOfRangeQuery { .. })
    }

    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.error, QueryError::UnsupportedQueryKind { .. })
    }
}
