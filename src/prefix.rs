// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::QueryError;
use crate::number::Number;
use crate::query::Query;

/// Cumulative sums of a sequence, split by index parity.
///
/// Each table has `n + 1` entries and starts at zero; entry `i` covers the
/// first `i` values of the sequence. For every `i`,
/// `all[i] == even[i] + odd[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixTables {
    all: Vec<Number>,
    even: Vec<Number>,
    odd: Vec<Number>,
}

impl PrefixTables {
    /// Build all three tables in a single pass over `sequence`.
    pub fn build(sequence: &[Number]) -> PrefixTables {
        let capacity = sequence.len() + 1;
        let mut tables = PrefixTables {
            all: Vec::with_capacity(capacity),
            even: Vec::with_capacity(capacity),
            odd: Vec::with_capacity(capacity),
        };
        tables.push((Number::zero(), Number::zero(), Number::zero()));

        sequence
            .iter()
            .enumerate()
            .fold(tables, |mut tables, (idx, value)| {
                let n = tables.len();
                let all = &tables.all[n] + value;
                let (even, odd) = if idx % 2 == 0 {
                    (&tables.even[n] + value, tables.odd[n].clone())
                } else {
                    (tables.even[n].clone(), &tables.odd[n] + value)
                };
                tables.push((all, even, odd));
                tables
            })
    }

    fn push(&mut self, (all, even, odd): (Number, Number, Number)) {
        self.all.push(all);
        self.even.push(even);
        self.odd.push(odd);
    }

    /// Length of the sequence the tables were built from.
    pub fn len(&self) -> usize {
        self.all.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn prefix_all(&self) -> &[Number] {
        &self.all
    }

    pub fn prefix_even(&self) -> &[Number] {
        &self.even
    }

    pub fn prefix_odd(&self) -> &[Number] {
        &self.odd
    }

    /// Answer `query` in constant time.
    pub fn answer(&self, query: &Query) -> Result<Number, QueryError> {
        let (l, r) = self.bounds(query)?;
        let result = match query {
            Query::RangeSum { .. } => &self.all[r + 1] - &self.all[l],
            Query::ParityDiff { .. } => {
                let even = &self.even[r + 1] - &self.even[l];
                let odd = &self.odd[r + 1] - &self.odd[l];
                &even - &odd
            }
        };
        Ok(result)
    }

    // Validated `[l, r]` with `l <= r < n`.
    fn bounds(&self, query: &Query) -> Result<(usize, usize), QueryError> {
        let out_of_range = || QueryError::OutOfRangeQuery {
            query: *query,
            len: self.len(),
        };

        let (l, r) = query.range();
        let l = usize::try_from(l).map_err(|_| out_of_range())?;
        let r = usize::try_from(r).map_err(|_| out_of_range())?;
        if l > r || r >= self.len() {
            return Err(out_of_range());
        }
        Ok((l, r))
    }
}
