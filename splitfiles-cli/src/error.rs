//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// The filename template was rejected; reported as a usage error
    InvalidTemplate(String),
    /// Configuration file not found or unreadable
    ConfigNotFound(String),
    /// Configuration file could not be parsed
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidTemplate(msg) => write!(f, "Invalid template: {msg}"),
            CliError::ConfigNotFound(path) => write!(f, "Configuration file not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_template_display() {
        let error = CliError::InvalidTemplate("two runs".to_string());
        assert_eq!(error.to_string(), "Invalid template: two runs");
    }

    #[test]
    fn test_config_not_found_display() {
        let error = CliError::ConfigNotFound("splitfiles.toml".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration file not found: splitfiles.toml"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let failure: CliResult<()> = Err(CliError::InvalidTemplate("x".to_string()).into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidTemplate(_))
        ));
    }
}
