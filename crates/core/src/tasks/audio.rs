//! Transcribe an audio clip through the configured speech-to-text command.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use tokio::process::Command;

pub async fn transcribe(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    anyhow::ensure!(
        input.is_file(),
        "audio file {} does not exist",
        input.display()
    );

    let recognizer = &ctx.config().transcribe_command;
    let output = Command::new(recognizer)
        .arg(&input)
        .output()
        .await
        .with_context(|| format!("failed to launch transcriber {recognizer:?}"))?;
    anyhow::ensure!(
        output.status.success(),
        "transcriber exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );

    let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
    anyhow::ensure!(!transcript.is_empty(), "transcriber produced no text");

    let out_path = ctx.data_path(params.require("output")?);
    tokio::fs::write(&out_path, transcript)
        .await
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok("Audio transcribed successfully".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaskdeskConfig;
    use crate::engine::TaskContext;
    use crate::tasks::testing;

    #[tokio::test]
    async fn test_transcript_comes_from_configured_command() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("audio.mp3"), b"fake audio").unwrap();

        let mut config = TaskdeskConfig::with_data_dir(dir.path());
        config.transcribe_command = "echo".to_string();
        let ctx = TaskContext::new(config);

        let params = testing::params(&[("input", "audio.mp3"), ("output", "transcript.txt")]);
        transcribe(&ctx, &params).await.unwrap();

        let transcript = std::fs::read_to_string(dir.path().join("transcript.txt")).unwrap();
        assert!(transcript.ends_with("audio.mp3"));
    }

    #[tokio::test]
    async fn test_missing_audio_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = testing::ctx(dir.path());
        let params = testing::params(&[("input", "audio.mp3"), ("output", "transcript.txt")]);
        assert!(transcribe(&ctx, &params).await.is_err());
    }

    #[tokio::test]
    async fn test_nonzero_exit_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("audio.mp3"), b"fake audio").unwrap();

        let mut config = TaskdeskConfig::with_data_dir(dir.path());
        config.transcribe_command = "false".to_string();
        let ctx = TaskContext::new(config);

        let params = testing::params(&[("input", "audio.mp3"), ("output", "transcript.txt")]);
        assert!(transcribe(&ctx, &params).await.is_err());
    }
}
