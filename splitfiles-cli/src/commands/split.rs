//! Split command implementation

use crate::{
    config::CliConfig,
    error::{CliError, CliResult},
};
use anyhow::Context;
use clap::Args;
use splitfiles_core::{split_stream, FilenameSequencer, SplitConfig};
use std::io;
use std::path::PathBuf;

/// Arguments for splitting standard input
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Pattern to split on.
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// File template to generate from.
    /// You can control where in the filenames the sequential number will
    /// appear by inserting a series of "?" in it.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Overwrite files instead of skipping them
    #[arg(short, long)]
    pub force: bool,

    /// Parse PATTERN as a regular expression instead of a raw string.
    #[arg(short = 'E', long)]
    pub regexp: bool,

    /// Print the line count after each filename
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress warnings and diagnostics on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SPLITFILES_CONFIG")]
    pub config: Option<PathBuf>,
}

impl SplitArgs {
    /// Execute the split
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;

        split_stream(&config, io::stdin().lock(), io::stdout())
            .with_context(|| format!("Could not split input on {:?}", config.pattern))?;

        Ok(())
    }

    /// Merge the configuration file (if any) with command-line flags
    ///
    /// The template is validated here so that a bad template surfaces as a
    /// usage error before any file is created.
    pub fn resolve_config(&self) -> CliResult<SplitConfig> {
        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        FilenameSequencer::new(&self.template)
            .map_err(|e| CliError::InvalidTemplate(e.to_string()))?;

        Ok(SplitConfig::new(self.pattern.as_str(), self.template.as_str())
            .regex(self.regexp || file_config.pattern.regexp)
            .force(self.force || file_config.output.force)
            .verbose(self.verbose || file_config.output.verbose))
    }

    /// Initialize logging; `RUST_LOG` overrides the default level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .try_init();
    }
}
