//! Resolver configuration overlays.
//!
//! The synonym and competitor-domain tables ship with built-in entries; a
//! deployment can extend them from a TOML file without touching control
//! flow. Loading is the one fallible surface of the crate.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Extra table entries merged on top of the built-ins.
///
/// ```toml
/// [aliases]
/// "amazon cloud" = "aws"
///
/// [domains]
/// "acme analytics" = "acme-analytics.io"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolverConfig {
    /// Name variant -> canonical name, merged into the synonym table.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    /// Canonical name -> bare domain, consulted before the curated table.
    #[serde(default)]
    pub domains: HashMap<String, String>,
}

impl ResolverConfig {
    /// Parse a configuration overlay from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration overlay from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
