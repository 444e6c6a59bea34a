//! splitfiles CLI library
//!
//! This library provides the command-line interface for splitting standard
//! input into numbered files on every occurrence of a pattern.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, CliResult};
