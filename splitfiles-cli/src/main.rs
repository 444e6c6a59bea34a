use clap::{error::ErrorKind, CommandFactory, Parser};
use splitfiles_cli::{commands::Cli, CliError};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.args.execute() {
        if let Some(CliError::InvalidTemplate(msg)) = err.downcast_ref::<CliError>() {
            Cli::command().error(ErrorKind::ValueValidation, msg).exit();
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
