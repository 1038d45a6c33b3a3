use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Outcome marker carried in every result mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Name and version of the tool that produced a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessedItem {
    pub id: usize,
    pub processed: bool,
}

/// Result of processing a single input mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessReport {
    pub status: Status,
    pub input_keys: Vec<String>,
    pub processed_at: DateTime<Utc>,
    pub tool_info: ToolInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_items: Option<Vec<ProcessedItem>>,
}

/// Failure mapping returned in place of a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub status: Status,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&ToolError> for ErrorEnvelope {
    fn from(err: &ToolError) -> Self {
        Self {
            status: Status::Error,
            message: err.to_string(),
            kind: err.kind().to_string(),
        }
    }
}

/// Either a report or an error envelope; serializes as the bare mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RunOutcome {
    Success(ProcessReport),
    Failure(ErrorEnvelope),
}

impl RunOutcome {
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Success(report) => report.status,
            Self::Failure(envelope) => envelope.status,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status(), Status::Success)
    }
}
