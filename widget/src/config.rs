use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::RenderOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("couldn't read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("couldn't parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Settings read from a YAML file
///
/// ```yaml
/// position: start
/// render:
///   unicode: true
///   empty_square: "·"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The FEN shown before any actions are applied
    pub position: String,
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: board::START_ALIAS.to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Load the config at `path`, or the defaults if no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
