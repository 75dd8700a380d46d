//! # Operation Registry
//!
//! An ordered, immutable-after-build table mapping task phrases to handlers.
//! Resolution is a case-sensitive substring scan in registration order: the
//! first entry whose phrase occurs in the task text wins.
//!
//! Order is the priority mechanism, so entries should be registered
//! narrowest-first. A broad phrase registered early shadows every narrower
//! phrase registered after it (e.g. `"Format"` before `"Format markdown"`
//! means the latter can never fire). That shadowing is part of the observable
//! dispatch contract and is preserved rather than "fixed" here.

use crate::engine::TaskContext;
use crate::extract::{ParamRule, ParamSet};
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by every task handler
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// A task handler: an async fn over the engine context and its extracted
/// parameters, returning a short human-readable status string.
pub type Handler = for<'a> fn(&'a TaskContext, &'a ParamSet) -> HandlerFuture<'a>;

/// One registered operation: a literal match phrase, the handler to run, and
/// the rules describing where its parameters come from.
pub struct OperationEntry {
    pub phrase: &'static str,
    pub handler: Handler,
    pub params: Vec<ParamRule>,
}

/// The ordered operation table. Built once at startup, then read-only, which
/// makes it safe to share across concurrent requests without locking.
#[derive(Default)]
pub struct Registry {
    entries: Vec<OperationEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. There is no removal or reordering: the supported
    /// task set is fixed at startup and priority is registration order.
    pub fn register(&mut self, phrase: &'static str, params: Vec<ParamRule>, handler: Handler) {
        self.entries.push(OperationEntry {
            phrase,
            handler,
            params,
        });
    }

    /// The entries in registration order
    pub fn entries(&self) -> &[OperationEntry] {
        &self.entries
    }

    /// First entry whose phrase occurs in `task_text` (case-sensitive
    /// substring match), or `None`. Linear in registry size times text
    /// length; no side effects.
    pub fn resolve(&self, task_text: &str) -> Option<&OperationEntry> {
        self.entries.iter().find(|e| task_text.contains(e.phrase))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
