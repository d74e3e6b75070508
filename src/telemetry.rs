use crate::error::{Result, SkinTypeError};
use tracing_subscriber::EnvFilter;

// RUST_LOG wins over the verbosity flags when set.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(directive).map_err(|e| SkinTypeError::Telemetry(e.to_string()))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| SkinTypeError::Telemetry(e.to_string()))
}
