//! # Taskdesk Core
//!
//! The engine behind the Taskdesk data automation agent: it maps a free-text
//! task description onto exactly one registered file operation, extracts any
//! parameters embedded in the text, runs the operation against the sandboxed
//! data directory, and reports a normalized success/failure outcome.
//!
//! ## Architecture
//!
//! - `registry` - Ordered table of operation entries; first matching phrase wins
//! - `extract` - Declarative parameter rules evaluated against the task text
//! - `engine` - Dispatch plus the failure boundary around every handler
//! - `gateway` - Read-only file retrieval by path, independent of tasks
//! - `tasks/` - The individual file transforms (dates, contacts, OCR, ...)
//! - `config` - Sandbox root and external tool configuration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskdesk_core::{config::TaskdeskConfig, engine::Engine};
//!
//! let engine = Engine::standard(TaskdeskConfig::load());
//! let outcome = engine.execute("please count Wednesdays in the list").await;
//! ```

pub mod config;
pub mod engine;
pub mod extract;
pub mod gateway;
pub mod registry;
pub mod tasks;

pub use config::TaskdeskConfig;
pub use engine::{Engine, Outcome, TaskContext, TaskError};
pub use extract::{ExtractError, ParamRule, ParamSet};
pub use registry::{OperationEntry, Registry};
