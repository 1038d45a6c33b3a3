use std::error::Error;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub const DEFAULT_TOOL_NAME: &str = "example-tool";
pub const DEFAULT_TOOL_VERSION: &str = "1.0.0";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How results are rendered by the command-line front end.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON.
    #[default]
    Json,
    /// Single-line JSON.
    Compact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolSettings {
    pub max_retries: u32,
    pub timeout: u64,
    pub output_format: OutputFormat,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT_SECS,
            output_format: OutputFormat::Json,
        }
    }
}

/// Tool configuration: built-in defaults with an optional user file merged on top.
///
/// Top-level keys from the user file replace the defaults wholesale. Keys the
/// tool does not know about are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub settings: ToolSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_TOOL_NAME.to_string(),
            version: DEFAULT_TOOL_VERSION.to_string(),
            settings: ToolSettings::default(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
    NotAMapping { path: PathBuf },
    Invalid { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "failed to parse config {}: {message}", path.display())
            }
            Self::NotAMapping { path } => {
                write!(f, "config {} must contain a mapping at the top level", path.display())
            }
            Self::Invalid { path, message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { .. } | Self::NotAMapping { .. } | Self::Invalid { .. } => None,
        }
    }
}

impl ToolConfig {
    /// Loads the config at `path`, merged over the defaults.
    ///
    /// A missing path, or a path that does not exist, yields the defaults.
    /// Files ending in `.toml` are read as TOML; anything else as JSON.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the file cannot be read or parsed, is
    /// not a mapping, or produces fields of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = parse_document(path, &text)?;
        let config = Self::default().merged_with(path, document)?;
        debug!(path = %path.display(), name = %config.name, "loaded config");
        Ok(config)
    }

    /// Like [`ToolConfig::load`], but logs a warning and falls back to the
    /// defaults on any error.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("could not load config: {err}; using default configuration");
                Self::default()
            }
        }
    }

    fn merged_with(&self, path: &Path, document: Value) -> Result<Self, ConfigError> {
        let Value::Object(overrides) = document else {
            return Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            });
        };

        let invalid = |err: serde_json::Error| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: err.to_string(),
        };

        let mut merged = match serde_json::to_value(self).map_err(invalid)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        merged.extend(overrides);

        serde_json::from_value(Value::Object(merged)).map_err(invalid)
    }
}

fn parse_document(path: &Path, text: &str) -> Result<Value, ConfigError> {
    let parsed = if is_toml(path) {
        toml::from_str::<Value>(text).map_err(|err| err.to_string())
    } else {
        serde_json::from_str::<Value>(text).map_err(|err| err.to_string())
    };
    parsed.map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
