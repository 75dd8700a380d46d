//! # File Access Gateway
//!
//! Read-only retrieval of a result artifact by path. This is a stateless
//! passthrough with no task semantics: existence check, then full read.
//!
//! The path comes straight from the caller and is deliberately NOT confined
//! to the sandbox root, matching the reference behavior. That is a
//! path-traversal exposure: anything the process can read, the caller can
//! read. Deployments that need confinement should wrap this with their own
//! prefix check rather than assume one exists here.

use anyhow::{Context, Result};
use std::path::Path;

/// Result of a gateway read. `NotFound` is a distinct, narrower outcome and
/// is not routed through the task-failure taxonomy.
#[derive(Debug)]
pub enum ReadOutcome {
    Content(String),
    NotFound,
}

/// Read the full textual content of `path`, or `NotFound` if it does not
/// exist. A nonexistent path never raises past this boundary; an existing
/// but unreadable file (permissions, invalid UTF-8) is a genuine error.
pub async fn read(path: &Path) -> Result<ReadOutcome> {
    if tokio::fs::metadata(path).await.is_err() {
        return Ok(ReadOutcome::NotFound);
    }
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(ReadOutcome::Content(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = read(&dir.path().join("nope.txt")).await.unwrap();
        assert!(matches!(outcome, ReadOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_existing_file_returns_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");
        tokio::fs::write(&path, "42").await.unwrap();

        match read(&path).await.unwrap() {
            ReadOutcome::Content(content) => assert_eq!(content, "42"),
            other => panic!("expected content, got {other:?}"),
        }
    }
}
