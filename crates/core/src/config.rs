//! # Configuration
//!
//! Sandbox root and external tool settings, persisted as JSON with partial
//! overrides. Everything has a default so a missing or sparse config file
//! still yields a working engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the config file lives relative to the working directory
const CONFIG_PATH: &str = ".taskdesk/config.json";

/// Engine configuration
///
/// `data_dir` is the sandbox root: every task input and output path is
/// resolved under it. The remaining fields describe external capabilities
/// the handlers call through (remote data generator, OCR binary, speech
/// recognizer, formatter version).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskdeskConfig {
    /// Sandbox root for all task inputs and outputs
    pub data_dir: PathBuf,
    /// Remote data generator endpoint (called with an `email` query param)
    pub datagen_url: String,
    /// Prettier version passed to `npx prettier@<version>`
    pub prettier_version: String,
    /// OCR command invoked as `<cmd> <image> stdout`
    pub ocr_command: String,
    /// Speech-to-text command invoked as `<cmd> <audio>`
    pub transcribe_command: String,
}

impl Default for TaskdeskConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("/data"),
            datagen_url:
                "https://raw.githubusercontent.com/sanand0/tools-in-data-science-public/tds-2025-01/project-1/datagen.py"
                    .to_string(),
            prettier_version: "3.4.2".to_string(),
            ocr_command: "tesseract".to_string(),
            transcribe_command: "whisper".to_string(),
        }
    }
}

impl TaskdeskConfig {
    /// Load configuration from `.taskdesk/config.json`, falling back to
    /// defaults for missing fields or a missing file. The `TASKDESK_DATA_DIR`
    /// environment variable overrides the sandbox root either way.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    /// Load from a specific path (useful for testing)
    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        if let Ok(dir) = std::env::var("TASKDESK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    /// Persist the configuration as pretty JSON
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    /// Save to a specific path (useful for testing)
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Convenience constructor pointing the sandbox at an arbitrary directory
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }
}
