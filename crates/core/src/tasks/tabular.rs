//! Filter CSV rows by column equality, re-emitting matches as JSON records.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use serde_json::{Map, Value};

pub async fn filter_rows(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let column = params.require("column")?;
    let value = params.require("value")?;
    let input = ctx.data_path(params.require("input")?);

    let mut reader = csv::Reader::from_path(&input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let headers = reader.headers().context("CSV has no header row")?.clone();
    let idx = headers
        .iter()
        .position(|h| h == column)
        .with_context(|| format!("column {column:?} not present in CSV header"))?;

    let mut rows: Vec<Value> = Vec::new();
    for record in reader.records() {
        let record = record.context("malformed CSV row")?;
        if record.get(idx) == Some(value) {
            let fields: Map<String, Value> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, f)| (h.to_string(), Value::String(f.to_string())))
                .collect();
            rows.push(Value::Object(fields));
        }
    }

    let matched = rows.len();
    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, serde_json::to_string(&rows)?)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(format!("Filtered {matched} matching rows"))
}
