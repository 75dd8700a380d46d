//! Fetch the remote data generator output for a user email.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};

pub async fn generate(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let email = params.require("email")?;
    anyhow::ensure!(!email.is_empty(), "no email followed the ${{user.email}} marker");

    let url = &ctx.config().datagen_url;
    let body = ctx
        .client()
        .get(url)
        .query(&[("email", email)])
        .send()
        .await
        .with_context(|| format!("datagen request to {url} failed"))?
        .error_for_status()
        .context("datagen endpoint returned an error status")?
        .text()
        .await
        .context("failed to read datagen response")?;

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, body)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Data generation successful".to_string())
}
