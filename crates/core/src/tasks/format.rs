//! Format a markdown file in place through prettier.
//!
//! Prettier is an external process (`npx prettier@<version> --write`); the
//! pinned version comes from configuration, not from the task text.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use tokio::process::Command;

pub async fn prettier(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let target = ctx.data_path(params.require("input")?);
    anyhow::ensure!(
        target.is_file(),
        "file to format {} does not exist",
        target.display()
    );

    let version = &ctx.config().prettier_version;
    let output = Command::new("npx")
        .arg(format!("prettier@{version}"))
        .arg("--write")
        .arg(&target)
        .output()
        .await
        .context("failed to launch npx")?;
    anyhow::ensure!(
        output.status.success(),
        "prettier exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );

    Ok("File formatted successfully".to_string())
}
