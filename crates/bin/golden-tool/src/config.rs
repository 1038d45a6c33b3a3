use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::builder::{BoolishValueParser, OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use serde_json::{Value, json};

const EXAMPLES: &str = r#"Examples:
    golden-tool --config config.json --verbose
    golden-tool --input '{"items": [1, 2, 3], "source": "cli"}'"#;

#[derive(Parser, Debug)]
#[command(
    name = "golden-tool",
    version,
    about = "Example tool for the golden-repo template.",
    after_help = EXAMPLES
)]
struct CliArgs {
    /// Path to a JSON or TOML configuration file. Blank values are ignored.
    #[arg(
        short,
        long,
        env = "GOLDEN_TOOL_CONFIG",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    config: Option<PathBuf>,

    /// JSON input data to process.
    #[arg(short, long)]
    input: Option<String>,

    /// Enable verbose logging.
    #[arg(
        short,
        long,
        env = "GOLDEN_TOOL_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    verbose: bool,
}

/// Runtime options resolved from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub config_path: Option<PathBuf>,
    pub input: Option<String>,
    pub verbose: bool,
}

#[derive(Debug)]
pub enum InputError {
    InvalidJson(serde_json::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "Invalid JSON input: {err}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
        }
    }
}

impl CliConfig {
    pub fn from_args() -> Self {
        Self::from(CliArgs::parse())
    }

    /// The document to process: the `--input` JSON, or the built-in example.
    pub fn input_document(&self) -> Result<Value, InputError> {
        self.input.as_deref().map_or_else(
            || Ok(default_input()),
            |raw| serde_json::from_str(raw).map_err(InputError::InvalidJson),
        )
    }
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let config_path = args
            .config
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty());

        Self {
            config_path,
            input: args.input,
            verbose: args.verbose,
        }
    }
}

fn default_input() -> Value {
    json!({
        "items": ["item1", "item2", "item3"],
        "metadata": {
            "source": "example",
            "timestamp": "2025-06-20T22:00:00Z"
        }
    })
}
