//! First line of the most recent `.log` file.
//!
//! "Most recent" is approximated by descending filename order, NOT by file
//! modification time or any embedded timestamp. This matches the reference
//! behavior (log names sort chronologically in that layout) and is kept as a
//! documented approximation rather than corrected.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};

pub async fn recent_first_line(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let log_dir = ctx.data_path(params.require("input")?);

    let mut names: Vec<String> = Vec::new();
    let mut entries = tokio::fs::read_dir(&log_dir)
        .await
        .with_context(|| format!("failed to read log directory {}", log_dir.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        if let Ok(name) = entry.file_name().into_string() {
            if name.ends_with(".log") {
                names.push(name);
            }
        }
    }
    names.sort();
    let newest = names
        .last()
        .with_context(|| format!("no .log files in {}", log_dir.display()))?;

    let content = tokio::fs::read_to_string(log_dir.join(newest))
        .await
        .with_context(|| format!("failed to read {newest}"))?;
    let first_line = content.lines().next().unwrap_or("").trim();

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, first_line)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("First line of most recent log written".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing;

    #[tokio::test]
    async fn test_picks_lexicographically_last_log() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        std::fs::create_dir(&logs).unwrap();
        std::fs::write(logs.join("2024-01-01.log"), "old entry\nmore").unwrap();
        std::fs::write(logs.join("2024-03-15.log"), "newest entry\nmore").unwrap();
        std::fs::write(logs.join("notes.txt"), "ignored").unwrap();

        let ctx = testing::ctx(dir.path());
        let params = testing::params(&[("input", "logs"), ("output", "recent.txt")]);
        recent_first_line(&ctx, &params).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("recent.txt")).unwrap(),
            "newest entry"
        );
    }

    #[tokio::test]
    async fn test_empty_log_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("logs")).unwrap();

        let ctx = testing::ctx(dir.path());
        let params = testing::params(&[("input", "logs"), ("output", "recent.txt")]);
        let err = recent_first_line(&ctx, &params).await.unwrap_err();
        assert!(format!("{err:#}").contains("no .log files"));
    }

    #[tokio::test]
    async fn test_missing_log_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = testing::ctx(dir.path());
        let params = testing::params(&[("input", "logs"), ("output", "recent.txt")]);
        assert!(recent_first_line(&ctx, &params).await.is_err());
    }
}
