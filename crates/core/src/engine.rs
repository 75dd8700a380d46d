//! # Execution Engine
//!
//! Top-level dispatch: resolve the task text against the registry, extract
//! parameters, run the handler inside a failure boundary, and normalize the
//! result into an [`Outcome`]. The engine itself performs no I/O; every side
//! effect is handler-local and confined to the sandbox root.

use crate::config::TaskdeskConfig;
use crate::extract::{self, ExtractError, ParamSet};
use crate::registry::Registry;
use crate::tasks;
use std::path::PathBuf;

/// Why a task did not produce a success
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// No registered matcher fired. A client-side rejection, not a fault.
    #[error("unknown task description")]
    UnknownTask,
    /// A required embedded value could not be pulled from the task text.
    #[error("bad parameters: {0}")]
    BadParameters(#[from] ExtractError),
    /// Anything that went wrong inside the handler itself: missing file,
    /// malformed content, nonzero external exit, failed network call.
    #[error("{0}")]
    Handler(String),
}

impl TaskError {
    /// True for failures the caller caused (unrecognized task, missing
    /// embedded parameter) as opposed to failures during the work itself.
    /// The transport layer maps rejections to 4xx and the rest to 5xx.
    pub fn is_rejection(&self) -> bool {
        matches!(self, TaskError::UnknownTask | TaskError::BadParameters(_))
    }
}

/// Normalized result of one `execute` call. Nothing throws past this type.
#[derive(Debug)]
pub enum Outcome {
    Success { message: String },
    Failure { error: TaskError },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The human-readable message for either arm
    pub fn message(&self) -> String {
        match self {
            Outcome::Success { message } => message.clone(),
            Outcome::Failure { error } => error.to_string(),
        }
    }
}

/// Per-process context handed to every handler: configuration, the sandbox
/// root, and a shared HTTP client.
pub struct TaskContext {
    config: TaskdeskConfig,
    client: reqwest::Client,
}

impl TaskContext {
    pub fn new(config: TaskdeskConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &TaskdeskConfig {
        &self.config
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Resolve a sandbox-relative path under the data directory. Handlers
    /// never address files outside the sandbox root.
    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.config.data_dir.join(relative)
    }
}

/// The task execution engine: a registry plus the context handlers run in.
/// Stateless across requests; one task text in, one [`Outcome`] out.
pub struct Engine {
    registry: Registry,
    ctx: TaskContext,
}

impl Engine {
    pub fn new(registry: Registry, config: TaskdeskConfig) -> Self {
        Self {
            registry,
            ctx: TaskContext::new(config),
        }
    }

    /// Engine with the full standard operation table from [`tasks::standard`]
    pub fn standard(config: TaskdeskConfig) -> Self {
        Self::new(tasks::standard(), config)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run one task description to completion.
    ///
    /// Resolution and extraction failures come back as rejections; every
    /// error the handler raises is caught here and converted to
    /// [`TaskError::Handler`] with its message chain preserved. Handlers
    /// cannot crash the engine.
    pub async fn execute(&self, task_text: &str) -> Outcome {
        let entry = match self.registry.resolve(task_text) {
            Some(entry) => entry,
            None => {
                tracing::info!(task = task_text, "no registered operation matched");
                return Outcome::Failure {
                    error: TaskError::UnknownTask,
                };
            }
        };

        let params: ParamSet = match extract::extract(task_text, &entry.params) {
            Ok(params) => params,
            Err(e) => {
                tracing::info!(phrase = entry.phrase, error = %e, "parameter extraction failed");
                return Outcome::Failure {
                    error: TaskError::BadParameters(e),
                };
            }
        };

        tracing::info!(phrase = entry.phrase, "running task handler");
        match (entry.handler)(&self.ctx, &params).await {
            Ok(message) => Outcome::Success { message },
            Err(e) => {
                tracing::warn!(phrase = entry.phrase, error = %format!("{e:#}"), "handler failed");
                Outcome::Failure {
                    // {:#} keeps the whole context chain for diagnosis
                    error: TaskError::Handler(format!("{e:#}")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ParamRule;
    use crate::registry::HandlerFuture;

    fn failing<'a>(_ctx: &'a TaskContext, _params: &'a ParamSet) -> HandlerFuture<'a> {
        Box::pin(async { anyhow::bail!("input file missing") })
    }

    fn greeting<'a>(_ctx: &'a TaskContext, params: &'a ParamSet) -> HandlerFuture<'a> {
        Box::pin(async move { Ok(format!("hello {}", params.require("who")?)) })
    }

    fn test_engine(registry: Registry) -> Engine {
        Engine::new(registry, TaskdeskConfig::with_data_dir("/tmp/unused"))
    }

    #[tokio::test]
    async fn test_unmatched_text_is_a_rejection() {
        let engine = test_engine(Registry::new());
        match engine.execute("do something nobody registered").await {
            Outcome::Failure {
                error: TaskError::UnknownTask,
            } => {}
            other => panic!("expected UnknownTask, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_extraction_failure_is_a_rejection() {
        let mut registry = Registry::new();
        registry.register("greet", vec![ParamRule::marker("who", "who=")], greeting);
        let engine = test_engine(registry);

        match engine.execute("greet someone").await {
            Outcome::Failure { error } => {
                assert!(error.is_rejection());
                assert!(matches!(error, TaskError::BadParameters(_)));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handler_error_is_caught_at_the_boundary() {
        let mut registry = Registry::new();
        registry.register("explode", Vec::new(), failing);
        let engine = test_engine(registry);

        match engine.execute("please explode").await {
            Outcome::Failure { error } => {
                assert!(!error.is_rejection());
                assert!(error.to_string().contains("input file missing"));
            }
            other => panic!("expected handler failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_carries_handler_message() {
        let mut registry = Registry::new();
        registry.register("greet", vec![ParamRule::marker("who", "who=")], greeting);
        let engine = test_engine(registry);

        let outcome = engine.execute("greet who=world").await;
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "hello world");
    }
}
