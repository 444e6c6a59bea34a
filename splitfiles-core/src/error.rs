//! Layered error types
//!
//! Configuration problems are detected before any I/O happens and are kept
//! apart from the errors that can abort a run midway through the stream.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Setup errors (template or pattern rejected before processing)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The template holds more than one run of placeholder characters
    #[error(
        "template '{template}' contained more than 1 series of question marks.\n\
         You can only use question marks at one place in the template: \
         \"hello_??.txt\" (not \"hello_?_?.txt\")."
    )]
    MultiplePlaceholderGroups {
        /// The rejected template
        template: String,
    },

    /// The pattern could not be compiled as a regular expression
    #[error("could not parse '{pattern}' as a regular expression")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A literal pattern must contain at least one byte
    #[error("literal pattern must not be empty")]
    EmptyPattern,
}

/// Errors that abort a split run
#[derive(Error, Debug)]
pub enum SplitError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An output file could not be created or truncated
    #[error("could not create file {}", path.display())]
    CreateFile {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing, flushing or closing an output file failed
    #[error("could not write to file {}", path.display())]
    WriteFile {
        /// Path of the file being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input stream failed
    #[error("error while reading input")]
    ReadInput(#[source] io::Error),

    /// The filename report could not be written
    #[error("could not write report")]
    Report(#[source] io::Error),
}

/// Result type for split operations
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_placeholder_message() {
        let error = ConfigError::MultiplePlaceholderGroups {
            template: "hello_?_?.txt".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("hello_?_?.txt"));
        assert!(msg.contains("one place in the template"));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let error = ConfigError::InvalidPattern {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert_eq!(
            error.to_string(),
            "could not parse '(unclosed' as a regular expression"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_config_error_is_transparent() {
        let error = SplitError::from(ConfigError::EmptyPattern);
        assert_eq!(error.to_string(), "literal pattern must not be empty");
    }

    #[test]
    fn test_create_file_display() {
        let error = SplitError::CreateFile {
            path: PathBuf::from("out/1.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "could not create file out/1.txt");
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "denied");
    }
}
