use std::error::Error;
use std::fmt;

/// Failures raised while processing an input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    InvalidInput,
    ItemsNotCountable { kind: &'static str },
}

impl ToolError {
    /// Stable name reported as the `type` of an error envelope.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInput",
            Self::ItemsNotCountable { .. } => "ItemsNotCountable",
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Input data must be a dictionary"),
            Self::ItemsNotCountable { kind } => {
                write!(f, "items value of type {kind} has no length")
            }
        }
    }
}

impl Error for ToolError {}
