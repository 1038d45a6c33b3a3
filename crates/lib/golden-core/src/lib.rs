//! Core types for the golden-repo example tool.
//!
//! This crate owns the tool itself, the configuration it is built from, and
//! the result models it hands back to callers. The command-line front end
//! lives in the `golden-tool` binary.

pub mod config;
pub mod error;
pub mod models;
pub mod tool;

pub use config::{ConfigError, OutputFormat, ToolConfig, ToolSettings};
pub use error::ToolError;
pub use models::{ErrorEnvelope, ProcessReport, ProcessedItem, RunOutcome, Status, ToolInfo};
pub use tool::{ExampleTool, log_level_for};
