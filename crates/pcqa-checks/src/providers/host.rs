use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::{QueryError, Result};
use crate::traits::{PkgConfigClient, Validation};

/// Client backed by a pkg-config executable on the host.
///
/// Availability is probed once at construction, so every check in a run
/// sees the same answer.
pub struct HostPkgConfig {
    program: String,
    available: bool,
}

impl HostPkgConfig {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        let available = probe(&program);
        if !available {
            debug!(%program, "pkg-config tool is not usable, dependent checks will be skipped");
        }
        Self { program, available }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, file: &Path, args: &[&str]) -> Result<Output> {
        Command::new(&self.program)
            .args(args)
            .arg(file)
            .output()
            .map_err(|source| QueryError::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    fn query(&self, file: &Path, args: &[&str]) -> Result<String> {
        let output = self.run(file, args)?;
        if !output.status.success() {
            return Err(QueryError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                path: file.to_path_buf(),
            });
        }
        self.trimmed_stdout(output)
    }

    fn trimmed_stdout(&self, output: Output) -> Result<String> {
        let stdout = String::from_utf8(output.stdout).map_err(|_| QueryError::NonUtf8Output {
            program: self.program.clone(),
        })?;
        Ok(stdout.trim().to_string())
    }
}

impl PkgConfigClient for HostPkgConfig {
    fn is_available(&self) -> bool {
        self.available
    }

    fn validate(
        &self,
        files: &[PathBuf],
        search_path: &[PathBuf],
        max_depth: u32,
    ) -> Result<Validation> {
        let search_path = std::env::join_paths(search_path).map_err(QueryError::SearchPath)?;
        let output = Command::new(&self.program)
            .env("PKG_CONFIG_LIBDIR", search_path)
            .env("PKG_CONFIG_MAXIMUM_TRAVERSE_DEPTH", max_depth.to_string())
            .args(["--exists", "--print-errors", "--"])
            .args(files)
            .output()
            .map_err(|source| QueryError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if output.status.success() {
            return Ok(Validation::Passed);
        }
        Ok(Validation::Rejected {
            diagnostics: collect_diagnostics(&output),
        })
    }

    fn variable(&self, file: &Path, name: &str) -> Result<String> {
        let flag = format!("--variable={name}");
        self.query(file, &[&flag])
    }

    fn modversion(&self, file: &Path) -> Result<String> {
        // a nonzero exit is how the tool answers a file with no Version
        // field; the output is still the declared version (empty = none)
        let output = self.run(file, &["--modversion"])?;
        self.trimmed_stdout(output)
    }
}

fn probe(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// pkg-config implementations disagree about which stream diagnostics
/// go to; merge both.
fn collect_diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut diagnostics = String::new();
    for part in [stderr.trim(), stdout.trim()] {
        if part.is_empty() {
            continue;
        }
        if !diagnostics.is_empty() {
            diagnostics.push('\n');
        }
        diagnostics.push_str(part);
    }
    diagnostics
}
