mod commands;
mod environment;
mod error;
mod output;
mod profile;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "pcqa")]
#[command(version = env!("PCQA_VERSION"))]
#[command(about = "QA checks for staged pkg-config metadata", long_about = None)]
struct Cli {
    /// Staging root to inspect (defaults to the current directory)
    #[arg(long = "root", short = 'C', global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let root = match resolve_root(cli.root) {
        Ok(root) => root,
        Err(error) => {
            print_error(&error);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.execute(&root) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = cause.source();
    }
}
