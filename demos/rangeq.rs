// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rangeq::{process_batch, results_to_json, Number, Payload, Query, QueryKind};

fn read_sequence(file: &str) -> Result<Vec<Number>> {
    let contents =
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?;

    Ok(if file.ends_with(".json") {
        serde_json::from_str(&contents)?
    } else if file.ends_with(".yaml") {
        serde_yaml::from_str(&contents)?
    } else {
        bail!("Unsupported data file `{file}`. Must be json or yaml.")
    })
}

fn rangeq_eval(payload: String, output: Option<String>) -> Result<()> {
    let payload = Payload::from_file(&payload)?;
    let results = payload.evaluate()?;
    let json = results_to_json(&results)?;

    match output {
        Some(file) => {
            std::fs::write(&file, json).with_context(|| format!("Failed to write {file}"))?
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn rangeq_query(data: String, kind: String, l: i64, r: i64) -> Result<()> {
    let sequence = read_sequence(&data)?;
    let kind = match kind.as_str() {
        "1" | "range-sum" => QueryKind::RangeSum,
        "2" | "parity-diff" => QueryKind::ParityDiff,
        _ => bail!("unsupported query kind `{kind}`"),
    };

    let query = Query::new(kind, l, r);
    let results = process_batch(&sequence, &[query])?;
    for result in results {
        println!("{query} = {result}");
    }
    Ok(())
}

#[derive(Subcommand)]
enum RangeqCommand {
    /// Evaluate every query of a payload document.
    Eval {
        /// Payload file. json or yaml.
        #[arg(long, short, value_name = "payload.json|payload.yaml")]
        payload: String,

        /// Write the result array here instead of stdout.
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Answer a single query against a sequence.
    Query {
        /// Sequence file holding a json or yaml array of numbers.
        #[arg(long, short, value_name = "data.json|data.yaml")]
        data: String,

        /// Query kind: 1 (range-sum) or 2 (parity-diff).
        #[arg(long, short, default_value = "1")]
        kind: String,

        /// First index of the range.
        #[arg(allow_negative_numbers = true)]
        l: i64,

        /// Last index of the range, inclusive.
        #[arg(allow_negative_numbers = true)]
        r: i64,
    },
}

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: RangeqCommand,
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse and dispatch command.
    let cli = Cli::parse();
    match cli.command {
        RangeqCommand::Eval { payload, output } => rangeq_eval(payload, output),
        RangeqCommand::Query { data, kind, l, r } => rangeq_query(data, kind, l, r),
    }
}
