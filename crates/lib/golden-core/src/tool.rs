use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{Level, debug, error, info};

use crate::config::ToolConfig;
use crate::error::ToolError;
use crate::models::{ErrorEnvelope, ProcessReport, ProcessedItem, RunOutcome, Status, ToolInfo};

const ITEMS_KEY: &str = "items";

/// Log level the tool runs at for the given verbosity.
///
/// Front ends install their subscriber at this level before building the tool.
#[must_use]
pub const fn log_level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// The example tool: inspects an input mapping and reports on its shape.
#[derive(Debug, Clone)]
pub struct ExampleTool {
    config: ToolConfig,
}

impl ExampleTool {
    #[must_use]
    pub fn new(config: ToolConfig) -> Self {
        info!(name = %config.name, version = %config.version, "example tool initialized");
        Self { config }
    }

    /// Builds a tool from an optional config file, falling back to defaults
    /// when the file cannot be used.
    #[must_use]
    pub fn from_config_path(path: Option<&Path>) -> Self {
        Self::new(ToolConfig::load_or_default(path))
    }

    #[must_use]
    pub const fn config(&self) -> &ToolConfig {
        &self.config
    }

    #[must_use]
    pub fn tool_info(&self) -> ToolInfo {
        ToolInfo {
            name: self.config.name.clone(),
            version: self.config.version.clone(),
        }
    }

    /// Processes `data`, stamping the report with the current time.
    ///
    /// # Errors
    /// See [`ExampleTool::process_data_at`].
    pub fn process_data(&self, data: &Value) -> Result<ProcessReport, ToolError> {
        self.process_data_at(data, Utc::now())
    }

    /// Builds a report describing `data`.
    ///
    /// `input_keys` follows the document order of the mapping. When the
    /// mapping has an `items` entry, its length is reported as `item_count`
    /// along with one processed marker per item.
    ///
    /// # Errors
    /// Returns [`ToolError::InvalidInput`] when `data` is not a mapping and
    /// [`ToolError::ItemsNotCountable`] when `items` is a scalar.
    pub fn process_data_at(
        &self,
        data: &Value,
        processed_at: DateTime<Utc>,
    ) -> Result<ProcessReport, ToolError> {
        info!("processing data");

        let Value::Object(fields) = data else {
            return Err(ToolError::InvalidInput);
        };

        let item_count = fields.get(ITEMS_KEY).map(item_len).transpose()?;
        let processed_items = item_count.map(|count| {
            debug!(item_count = count, "marking items as processed");
            (0..count)
                .map(|id| ProcessedItem {
                    id,
                    processed: true,
                })
                .collect()
        });

        let report = ProcessReport {
            status: Status::Success,
            input_keys: fields.keys().cloned().collect(),
            processed_at,
            tool_info: self.tool_info(),
            item_count,
            processed_items,
        };

        info!("processing completed successfully, processed {} keys", fields.len());
        Ok(report)
    }

    /// Processes `input` and folds any failure into an error envelope.
    #[must_use]
    pub fn run(&self, input: &Value) -> RunOutcome {
        info!("starting tool execution");
        match self.process_data(input) {
            Ok(report) => {
                info!("tool execution completed successfully");
                RunOutcome::Success(report)
            }
            Err(err) => {
                error!("tool execution failed: {err}");
                RunOutcome::Failure(ErrorEnvelope::from(&err))
            }
        }
    }
}

fn item_len(items: &Value) -> Result<usize, ToolError> {
    match items {
        Value::Array(values) => Ok(values.len()),
        Value::Object(fields) => Ok(fields.len()),
        Value::String(text) => Ok(text.chars().count()),
        Value::Number(_) => Err(ToolError::ItemsNotCountable { kind: "number" }),
        Value::Bool(_) => Err(ToolError::ItemsNotCountable { kind: "bool" }),
        Value::Null => Err(ToolError::ItemsNotCountable { kind: "null" }),
    }
}
