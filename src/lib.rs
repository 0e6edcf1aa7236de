// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod engine;
mod error;
mod number;
mod payload;
mod prefix;
mod query;

pub use engine::{process_batch, process_batches, Batch};
pub use error::{BatchError, QueryError};
pub use number::{BigInt, Number, ParseNumberError};
pub use payload::{results_to_json, Payload};
pub use prefix::PrefixTables;
pub use query::{decode_queries, KindTag, Query, QueryKind, WireQuery};
