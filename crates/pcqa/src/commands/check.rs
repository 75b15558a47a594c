use std::path::Path;

use pcqa_checks::{AuditConfig, AuditOperation};

use super::{CheckArgs, OutputFormat};
use crate::environment;
use crate::error::Result;
use crate::output::{JsonFormatter, OutputFormatter, PlainTextFormatter};
use crate::profile::{self, Profile};

pub(crate) fn run(args: CheckArgs, root: &Path) -> Result<()> {
    let profile = match &args.config {
        Some(path) => profile::load_profile(path)?,
        None => Profile::default(),
    };

    let program = environment::pkg_config_program(args.pkg_config, profile.pkg_config);

    let config = AuditConfig {
        package_version: args.package_version.or(profile.package_version),
        expected_version: args.expected_version.or(profile.expected_version),
        install_prefix: args.prefix.or(profile.prefix),
        live: args.live || profile.live.unwrap_or(false),
    };

    let operation = AuditOperation::with_host_tool(program);
    let report = operation.execute(root, &config);

    let formatter: Box<dyn OutputFormatter> = match args.format {
        OutputFormat::Text => Box::new(PlainTextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    print!("{}", formatter.format_report(&report)?);

    Ok(())
}
