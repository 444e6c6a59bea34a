//! CLI command implementations

use clap::Parser;

pub mod split;

pub use split::SplitArgs;

/// Top-level command line
#[derive(Debug, Parser)]
#[command(
    name = "splitfiles",
    version,
    about = "Splits STDIN into files when encountering a pattern."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: SplitArgs,
}
