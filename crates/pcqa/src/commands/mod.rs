mod check;
mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Audit the staged .pc files and print the findings
    Check(CheckArgs),
    /// List the .pc files an audit would inspect
    List(ListArgs),
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// The package's own version, doubling as the expected Version value
    #[arg(long = "package-version", short = 'V', value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Expected version override; an empty string disables the version
    /// check
    #[arg(long = "expected-version", value_name = "VERSION")]
    pub expected_version: Option<String>,

    /// Install prefix all path variables must be rooted under
    #[arg(long, value_name = "PATH")]
    pub prefix: Option<String>,

    /// The package builds a moving snapshot, so version findings are
    /// suppressed
    #[arg(long)]
    pub live: bool,

    /// pkg-config executable to query with
    #[arg(long = "pkg-config", value_name = "PROGRAM")]
    pub pkg_config: Option<String>,

    /// TOML profile supplying defaults for the flags above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Commands {
    pub(crate) fn execute(self, root: &Path) -> Result<()> {
        match self {
            Self::Check(args) => check::run(args, root),
            Self::List(args) => list::run(&args, root),
        }
    }
}
