//! Count Wednesdays in a newline-delimited list of `%Y-%m-%d` dates.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};

pub async fn count_wednesdays(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    let content = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut count: u32 = 0;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let date = NaiveDate::parse_from_str(line, "%Y-%m-%d")
            .with_context(|| format!("malformed date line {line:?}"))?;
        if date.weekday() == Weekday::Wed {
            count += 1;
        }
    }

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, count.to_string())
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Wednesdays counted successfully".to_string())
}
