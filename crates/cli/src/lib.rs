//! Batch validation front-end for amenities.
//!
//! Reads candidate payloads (`{"name": ...}`) as JSON, validates each one and
//! writes the outcomes as a JSON array in input order. Accepted payloads become
//! amenity records; rejected ones become `{"error", "message"}` objects.

use std::io::{Read, Write};

use anyhow::Context;
use serde_json::{json, Value};

use hbnb_amenities::Amenity;
use hbnb_core::DomainError;

/// Process exit code when at least one payload was rejected.
pub const EXIT_REJECTED: u8 = 2;

/// Counts for a processed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub accepted: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn all_accepted(&self) -> bool {
        self.rejected == 0
    }
}

/// Read a batch from `input`, write the outcomes to `output`.
///
/// Only malformed input or I/O failures are errors; rejected payloads are
/// reported in the output and counted in the summary.
pub fn run(mut input: impl Read, mut output: impl Write) -> anyhow::Result<BatchSummary> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .context("failed to read amenity payloads")?;

    let document: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
    let payloads = into_payloads(document);

    let (outcomes, summary) = process_batch(&payloads)?;

    serde_json::to_writer_pretty(&mut output, &outcomes).context("failed to write outcomes")?;
    writeln!(output).context("failed to write outcomes")?;

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "amenity batch processed"
    );

    Ok(summary)
}

/// A top-level array is a batch; anything else is a batch of one.
fn into_payloads(document: Value) -> Vec<Value> {
    match document {
        Value::Array(items) => items,
        single => vec![single],
    }
}

/// Validate each payload, preserving order.
///
/// Rejections are reported in place; only a failure to serialize an accepted
/// amenity is an error.
pub fn process_batch(payloads: &[Value]) -> anyhow::Result<(Vec<Value>, BatchSummary)> {
    tracing::debug!(items = payloads.len(), "validating amenity batch");

    let mut summary = BatchSummary::default();
    let mut outcomes = Vec::with_capacity(payloads.len());

    for (index, payload) in payloads.iter().enumerate() {
        match Amenity::from_payload(payload) {
            Ok(amenity) => {
                let record = serde_json::to_value(&amenity)
                    .with_context(|| format!("failed to serialize amenity {index}"))?;
                summary.accepted += 1;
                outcomes.push(record);
            }
            Err(err) => {
                summary.rejected += 1;
                tracing::warn!(index, code = err.code(), "rejected amenity: {}", err.message());
                outcomes.push(domain_error_body(&err));
            }
        }
    }

    Ok((outcomes, summary))
}

pub fn domain_error_body(err: &DomainError) -> Value {
    json!({
        "error": err.code(),
        "message": err.message(),
    })
}
