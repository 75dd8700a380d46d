//! Image handlers: OCR a card number, resize to fixed dimensions.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use image::imageops::FilterType;
use tokio::process::Command;

/// Fixed resize target
const RESIZE_WIDTH: u32 = 800;
const RESIZE_HEIGHT: u32 = 600;

/// Recognize the text in a card image through the configured OCR command
/// (`<cmd> <image> stdout`, the tesseract CLI contract) and strip all
/// whitespace from the result.
pub async fn card_number(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    anyhow::ensure!(
        input.is_file(),
        "card image {} does not exist",
        input.display()
    );

    let ocr = &ctx.config().ocr_command;
    let output = Command::new(ocr)
        .arg(&input)
        .arg("stdout")
        .output()
        .await
        .with_context(|| format!("failed to launch OCR command {ocr:?}"))?;
    anyhow::ensure!(
        output.status.success(),
        "OCR command exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    let number = strip_whitespace(&text);
    anyhow::ensure!(!number.is_empty(), "OCR produced no text");

    let out_path = ctx.data_path(params.require("output")?);
    tokio::fs::write(&out_path, number)
        .await
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok("Card number extracted successfully".to_string())
}

/// Resize an image to the fixed 800x600 target, ignoring aspect ratio
pub async fn resize(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    let output = ctx.data_path(params.require("output")?);

    // image decode/encode is CPU-bound, keep it off the async workers
    tokio::task::spawn_blocking(move || -> Result<()> {
        let img = image::open(&input)
            .with_context(|| format!("failed to open image {}", input.display()))?;
        img.resize_exact(RESIZE_WIDTH, RESIZE_HEIGHT, FilterType::Lanczos3)
            .save(&output)
            .with_context(|| format!("failed to save {}", output.display()))?;
        Ok(())
    })
    .await
    .context("resize task panicked")??;

    Ok("Image resized successfully".to_string())
}

fn strip_whitespace(text: &str) -> String {
    text.split_whitespace().collect()
}
