use std::io::Write;

use anyhow::Result;
use bitman::BitRange;
use serde::Serialize;
use tracing::debug;

use crate::cli::Request;

/// Result of one print or modify run, as written with `--json`.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub number: String,
    #[serde(flatten)]
    pub range: BitRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub result: String,
}

pub fn execute(request: &Request) -> bitman::Result<Outcome> {
    let field = &request.field;
    let range = BitRange::parse(&field.start_bit, &field.stop_bit)?;
    debug!(number = %field.number, %range, width = range.width(), "selected bit field");

    let result = match &request.new_value {
        None => bitman::extract(&field.number, range)?,
        Some(value) => bitman::replace(&field.number, range, value)?,
    };
    debug!(%result, "computed");

    Ok(Outcome {
        number: field.number.clone(),
        range,
        value: request.new_value.clone(),
        result,
    })
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, outcome)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", outcome.result)?;
    }

    Ok(())
}

/// Executes `request` and writes its result to `out`.
pub fn run<W: Write>(request: &Request, json: bool, out: &mut W) -> Result<()> {
    let outcome = execute(request)?;
    write_outcome(out, &outcome, json)
}
