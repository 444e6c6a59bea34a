//! Configuration file support
//!
//! Values from the file act as defaults; command-line flags can only switch
//! options on.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Pattern interpretation
    #[serde(default)]
    pub pattern: PatternConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Pattern-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    /// Treat PATTERN as a regular expression
    pub regexp: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Overwrite existing files
    pub force: bool,

    /// Print line counts after filenames
    pub verbose: bool,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CliError::ConfigNotFound(path.display().to_string()),
            _ => CliError::ConfigError(format!("{}: {e}", path.display())),
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::from_toml_str("[output]\nverbose = true\n").unwrap();
        assert!(config.output.verbose);
        assert!(!config.output.force);
        assert!(!config.pattern.regexp);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            "[pattern]\nregexp = true\n\n[output]\nforce = true\nverbose = true\n",
        )
        .unwrap();
        assert!(config.pattern.regexp);
        assert!(config.output.force);
        assert!(config.output.verbose);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CliConfig::from_toml_str("[output]\noverwrite = true\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = CliConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("splitfiles.toml");
        fs::write(&path, "[pattern]\nregexp = true\n").unwrap();
        assert!(CliConfig::load(&path).unwrap().pattern.regexp);
    }
}
