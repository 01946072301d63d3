//! Settings for the `pubkit` binary.
//!
//! Configuration is an optional TOML file. Every key has a default, so an
//! empty file (or no file at all) is valid.
//!
//! ```toml
//! log_filter = "warn"
//! format = "text"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default `tracing` filter directive when neither the file nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How the greeting is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one greeting per line.
    #[default]
    Text,
    /// One `{"message": ...}` JSON object per line.
    Json,
}

impl OutputFormat {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Exact match, same as the serde representation.
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::config(format!(
                "Unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Top-level pubkit configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PubkitConfig {
    /// `tracing` filter directive, e.g. `"warn"` or `"pubkit=debug"`.
    pub log_filter: String,
    /// Output format for the greeting.
    pub format: OutputFormat,
}

impl Default for PubkitConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl PubkitConfig {
    /// Load configuration from `path`, or return defaults when `path` is `None`.
    ///
    /// A path that is given explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), format = %config.format, "Loaded config");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize this configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
