use std::io::{self, IsTerminal};

use golden_core::log_level_for;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. Stdout is reserved for the JSON result.
///
/// Verbose runs log at debug; otherwise `RUST_LOG` applies, defaulting to info.
pub fn init(verbose: bool) {
    let builder = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level_for(verbose)).into());
    let filter = if verbose {
        builder.parse_lossy("")
    } else {
        builder.from_env_lossy()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
