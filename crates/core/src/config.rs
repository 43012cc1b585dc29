//! Run configuration.
//!
//! Looked up in order: an explicit file, `~/.collscope/config.json`, built-in
//! defaults. Fields missing from a file take their default.

use crate::error::{CollscopeError, Result};
use collscope_java::AnalysisOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CollscopeConfig {
    pub analysis: AnalysisOptions,
    /// Seed every unit's type universe with the bundled JDK and Eclipse
    /// Collections declarations.
    pub include_stdlib: bool,
}

impl Default for CollscopeConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisOptions::default(),
            include_stdlib: true,
        }
    }
}

/// `~/.collscope`, or `./.collscope` when no home directory is known.
pub fn collscope_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".collscope")
}

pub fn default_config_path() -> PathBuf {
    collscope_home().join(CONFIG_FILE_NAME)
}

impl CollscopeConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| CollscopeError::Config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = default_config_path();
        if default_path.is_file() {
            return Self::from_file(&default_path);
        }

        debug!("No configuration file, using defaults");
        Ok(Self::default())
    }
}
