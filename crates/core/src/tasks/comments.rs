//! Find the two most similar comments in a line-delimited list.
//!
//! Similarity is the size of the token-set intersection between two lines.
//! The scan is a plain O(n²) pairwise pass; ties keep the first pair
//! encountered in nested scan order, so the result is deterministic for a
//! given input order.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use std::collections::HashSet;

fn similarity(a: &str, b: &str) -> usize {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    b.split_whitespace()
        .collect::<HashSet<&str>>()
        .intersection(&tokens_a)
        .count()
}

/// The winning pair in scan order, or `None` with fewer than two comments
fn best_pair<'a>(comments: &[&'a str]) -> Option<(&'a str, &'a str)> {
    let mut best: Option<(&str, &str)> = None;
    let mut max_similarity = 0usize;
    for i in 0..comments.len() {
        for j in (i + 1)..comments.len() {
            let score = similarity(comments[i], comments[j]);
            // Strictly greater: ties go to the first-encountered pair
            if best.is_none() || score > max_similarity {
                best = Some((comments[i], comments[j]));
                max_similarity = score;
            }
        }
    }
    best
}

pub async fn most_similar(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    let content = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;

    let comments: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let (first, second) =
        best_pair(&comments).context("need at least two comments to compare")?;

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, format!("{first}\n{second}"))
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Most similar comments found successfully".to_string())
}
