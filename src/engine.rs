// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::BatchError;
use crate::number::Number;
use crate::prefix::PrefixTables;
use crate::query::Query;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Answer every query against `sequence`, in input order.
///
/// The prefix tables are built once and dropped before returning. The first
/// query that cannot be answered aborts the batch; results are never skipped
/// so that `results[i]` always belongs to `queries[i]`.
pub fn process_batch(sequence: &[Number], queries: &[Query]) -> Result<Vec<Number>, BatchError> {
    let tables = PrefixTables::build(sequence);
    queries
        .iter()
        .enumerate()
        .map(|(index, query)| {
            tables
                .answer(query)
                .map_err(|error| BatchError::new(index, error))
        })
        .collect()
}

/// A sequence and the queries to run against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub sequence: Vec<Number>,
    pub queries: Vec<Query>,
}

impl Batch {
    pub fn new(sequence: Vec<Number>, queries: Vec<Query>) -> Self {
        Self { sequence, queries }
    }

    pub fn process(&self) -> Result<Vec<Number>, BatchError> {
        process_batch(&self.sequence, &self.queries)
    }
}

/// Process independent batches, returning one outcome per batch in order.
///
/// Batches share nothing; with the `parallel` feature they run on the rayon
/// pool, otherwise one after another.
pub fn process_batches(batches: &[Batch]) -> Vec<Result<Vec<Number>, BatchError>> {
    #[cfg(feature = "parallel")]
    let outcomes = batches.par_iter().map(Batch::process).collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = batches.iter().map(Batch::process).collect();

    outcomes
}
