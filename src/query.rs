// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::{BatchError, QueryError};

use core::fmt;

use serde::{Deserialize, Serialize};

/// A read-only aggregate over the inclusive index range `[l, r]`.
///
/// Bounds are signed so that negative indices received on the wire reach the
/// engine and are reported as out of range instead of failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Sum of the values at `l..=r`.
    RangeSum { l: i64, r: i64 },

    /// Sum of the values at even indices of `l..=r` minus the sum of the
    /// values at odd indices. Parity is that of the absolute index.
    ParityDiff { l: i64, r: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    RangeSum,
    ParityDiff,
}

impl QueryKind {
    /// Wire tag of the kind.
    pub fn tag(self) -> &'static str {
        match self {
            QueryKind::RangeSum => "1",
            QueryKind::ParityDiff => "2",
        }
    }

    pub fn from_tag(tag: &KindTag) -> Option<QueryKind> {
        match tag {
            KindTag::Text(s) if s == "1" => Some(QueryKind::RangeSum),
            KindTag::Text(s) if s == "2" => Some(QueryKind::ParityDiff),
            KindTag::Code(1) => Some(QueryKind::RangeSum),
            KindTag::Code(2) => Some(QueryKind::ParityDiff),
            _ => None,
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryKind::RangeSum => f.write_str("range-sum"),
            QueryKind::ParityDiff => f.write_str("parity-diff"),
        }
    }
}

impl Query {
    pub fn new(kind: QueryKind, l: i64, r: i64) -> Query {
        match kind {
            QueryKind::RangeSum => Query::RangeSum { l, r },
            QueryKind::ParityDiff => Query::ParityDiff { l, r },
        }
    }

    pub fn range_sum(l: i64, r: i64) -> Query {
        Query::RangeSum { l, r }
    }

    pub fn parity_diff(l: i64, r: i64) -> Query {
        Query::ParityDiff { l, r }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Query::RangeSum { .. } => QueryKind::RangeSum,
            Query::ParityDiff { .. } => QueryKind::ParityDiff,
        }
    }

    pub fn range(&self) -> (i64, i64) {
        match *self {
            Query::RangeSum { l, r } | Query::ParityDiff { l, r } => (l, r),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (l, r) = self.range();
        write!(f, "{}[{l}, {r}]", self.kind())
    }
}

/// Kind tag as it appears on the wire. Producers send `"1"`/`"2"`, but bare
/// numbers are common in hand-written JSON and YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindTag {
    Text(String),
    Code(i64),
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KindTag::Text(s) => f.write_str(s),
            KindTag::Code(c) => write!(f, "{c}"),
        }
    }
}

/// Transport form of a query: `{ "type": "1", "range": [l, r] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireQuery {
    #[serde(rename = "type")]
    pub kind: KindTag,
    pub range: (i64, i64),
}

impl WireQuery {
    /// Decode the query found at position `index` of its batch.
    pub fn decode(&self, index: usize) -> Result<Query, BatchError> {
        let kind = QueryKind::from_tag(&self.kind).ok_or_else(|| {
            BatchError::new(
                index,
                QueryError::UnsupportedQueryKind {
                    kind: self.kind.to_string(),
                },
            )
        })?;
        let (l, r) = self.range;
        Ok(Query::new(kind, l, r))
    }
}

impl From<Query> for WireQuery {
    fn from(query: Query) -> Self {
        Self {
            kind: KindTag::Text(query.kind().tag().to_string()),
            range: query.range(),
        }
    }
}

/// Decode a batch of wire queries, preserving order.
pub fn decode_queries(queries: &[WireQuery]) -> Result<Vec<Query>, BatchError> {
    queries
        .iter()
        .enumerate()
        .map(|(index, q)| q.decode(index))
        .collect()
}
