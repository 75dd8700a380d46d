//! # Parameter Extraction
//!
//! Declarative rules that pull handler parameters out of the raw task text.
//! Each operation entry declares an ordered list of [`ParamRule`]s; the
//! extractor evaluates all of them up front so a handler never runs with a
//! partially filled parameter set.

use std::collections::HashMap;

/// How to obtain one named parameter
#[derive(Debug, Clone)]
pub enum ParamRule {
    /// The token immediately following the first occurrence of `marker` in
    /// the task text, up to the next whitespace, trimmed.
    Marker {
        name: &'static str,
        marker: &'static str,
    },
    /// A fixed value independent of the task text, typically a
    /// sandbox-relative file path.
    Fixed {
        name: &'static str,
        value: &'static str,
    },
}

impl ParamRule {
    pub fn marker(name: &'static str, marker: &'static str) -> Self {
        Self::Marker { name, marker }
    }

    pub fn fixed(name: &'static str, value: &'static str) -> Self {
        Self::Fixed { name, value }
    }
}

/// Extraction failure. All rules are evaluated as a unit; the first failing
/// rule aborts the whole extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("marker {marker:?} for parameter {name:?} not found in task text")]
    MarkerNotFound {
        name: &'static str,
        marker: &'static str,
    },
}

/// Fully resolved parameters for one handler invocation
#[derive(Debug, Default, Clone)]
pub struct ParamSet {
    values: HashMap<&'static str, String>,
}

impl ParamSet {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Fetch a parameter the handler's rules guarantee is present. A miss
    /// here is a registration bug, not a user error.
    pub fn require(&self, name: &str) -> anyhow::Result<&str> {
        self.get(name)
            .ok_or_else(|| anyhow::anyhow!("parameter {name:?} missing from extracted set"))
    }

    fn insert(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
    }
}

/// Evaluate `rules` against `task_text`, producing a complete [`ParamSet`]
/// or the first extraction error.
pub fn extract(task_text: &str, rules: &[ParamRule]) -> Result<ParamSet, ExtractError> {
    let mut params = ParamSet::default();
    for rule in rules {
        match rule {
            ParamRule::Marker { name, marker } => {
                let tail = match task_text.find(marker) {
                    Some(pos) => &task_text[pos + marker.len()..],
                    None => return Err(ExtractError::MarkerNotFound { name, marker }),
                };
                let token = tail.split_whitespace().next().unwrap_or("").trim();
                params.insert(name, token.to_string());
            }
            ParamRule::Fixed { name, value } => {
                params.insert(name, value.to_string());
            }
        }
    }
    Ok(params)
}
