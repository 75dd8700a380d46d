//! Pull the sender address out of an email text blob.
//!
//! This is an intentionally naive split on the literal `From: ` marker, a
//! stand-in for a real extraction backend. It takes the first token after
//! the first occurrence of the marker, nothing smarter.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};

pub async fn extract_sender(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    let content = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;

    let tail = content
        .split_once("From: ")
        .map(|(_, tail)| tail)
        .context("no 'From: ' marker in email text")?;
    let sender = tail
        .split_whitespace()
        .next()
        .context("'From: ' marker has nothing after it")?;

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, sender)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Email address extracted successfully".to_string())
}
