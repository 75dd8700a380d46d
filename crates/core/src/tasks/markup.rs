//! Render a CommonMark document to HTML.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use pulldown_cmark::{html, Options, Parser};

pub async fn render_html(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    let markdown = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;

    let parser = Parser::new_ext(&markdown, Options::ENABLE_TABLES);
    let mut rendered = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut rendered, parser);

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, rendered)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Markdown converted to HTML successfully".to_string())
}
