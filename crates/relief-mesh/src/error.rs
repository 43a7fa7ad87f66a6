//! Build and config error types.

use thiserror::Error;

/// Errors from the terrain build pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The sample-count gate: the pipeline accepts odd-length sequences only.
    #[error("height sample count must be odd, got {len}")]
    InvalidSampleCount { len: usize },
}

/// Errors from loading build parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
