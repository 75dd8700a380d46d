//! Index the first H1 heading of every markdown file under a directory tree.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use walkdir::WalkDir;

/// Walk the docs tree and emit `{filename: first H1 text}` as JSON. Files
/// without an H1 are left out of the index. Keys are bare filenames, not
/// relative paths, matching the reference output shape.
pub async fn index_headings(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let docs_dir = ctx.data_path(params.require("input")?);
    anyhow::ensure!(
        docs_dir.is_dir(),
        "docs directory {} does not exist",
        docs_dir.display()
    );

    let mut index = Map::new();
    for entry in WalkDir::new(&docs_dir).sort_by_file_name() {
        let entry = entry.context("failed to walk docs directory")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".md") {
            continue;
        }
        let content = tokio::fs::read_to_string(entry.path())
            .await
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        if let Some(title) = first_h1(&content) {
            index.insert(name, Value::String(title.to_string()));
        }
    }

    let output = ctx.data_path(params.require("output")?);
    if let Some(parent) = output.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&output, serde_json::to_string(&Value::Object(index))?)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("H1 headers extracted successfully".to_string())
}

/// Text of the first line beginning with a single-level heading marker
fn first_h1(content: &str) -> Option<&str> {
    content
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| &line[2..])
}
