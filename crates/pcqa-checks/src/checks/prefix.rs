use pcqa_core::{CheckTag, Finding, Report};
use pcqa_pcfile::scan;
use tracing::debug;

use super::QaCheck;
use crate::context::AuditContext;
use crate::traits::PkgConfigClient;

/// The path variables that must stay inside the install prefix, in the
/// order they are examined. The first offender decides the finding.
const PATH_VARIABLES: [&str; 4] = ["prefix", "exec_prefix", "libdir", "includedir"];

/// Resolves each file's path variables and flags values that escape the
/// install prefix.
pub struct PrefixCheck<'a, C: PkgConfigClient> {
    client: &'a C,
}

impl<'a, C: PkgConfigClient> PrefixCheck<'a, C> {
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

impl<C: PkgConfigClient> QaCheck for PrefixCheck<'_, C> {
    fn check(&self, context: &AuditContext<'_>, report: &mut Report) {
        let Some(prefix) = context.config.effective_prefix() else {
            return;
        };
        if !self.client.is_available() {
            debug!("pkg-config tool unavailable, skipping prefix audit");
            return;
        }
        for file in context.files {
            let content = match file.read() {
                Ok(content) => content,
                Err(error) => {
                    debug!(%error, "skipping unreadable file");
                    continue;
                }
            };
            for name in PATH_VARIABLES {
                // resolving an undeclared variable would report its
                // inherited default, not this file's choice
                if !scan::declares_variable(&content, name) {
                    continue;
                }
                let value = match self.client.variable(file.path(), name) {
                    Ok(value) => value,
                    Err(error) => {
                        debug!(%error, variable = name, "variable query failed");
                        continue;
                    }
                };
                if value.starts_with(prefix) {
                    continue;
                }
                report.push(
                    Finding::new(
                        CheckTag::BadPaths,
                        format!("pkg-config file has paths outside the {prefix} prefix"),
                    )
                    .with_file(file.relative())
                    .with_detail(name, value),
                );
                break;
            }
        }
    }
}
