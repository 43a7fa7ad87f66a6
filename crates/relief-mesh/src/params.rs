//! Build parameters and TOML config loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Geometry constants for one build.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildParams {
    /// Edge length of one grid cell.
    pub square_size: f32,
    /// Depth of the closure box below the base plane.
    pub base_height: f32,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self::DIGIT
    }
}

impl BuildParams {
    /// Defaults when heights come from a decoded digit stream.
    pub const DIGIT: BuildParams = BuildParams {
        square_size: 10.0,
        base_height: 5.0,
    };

    /// Defaults when heights come from generated noise.
    pub const NOISE: BuildParams = BuildParams {
        square_size: 30.0,
        base_height: 5.0,
    };

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
