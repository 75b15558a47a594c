use std::sync::LazyLock;

use pcqa_core::{CheckTag, Finding, Report};
use pcqa_pcfile::scan;
use regex::Regex;
use tracing::debug;

use super::QaCheck;
use crate::context::AuditContext;

/// Linker flags that only make sense at build time; finding them in a
/// `Libs` entry means the build leaked its own LDFLAGS into the file.
static LEAKED_FLAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-Wl,(-O[012]|--hash-style)").expect("valid regex"));

/// Flags `Libs` entries that carry build-time linker flags.
pub struct LdflagsCheck;

impl QaCheck for LdflagsCheck {
    fn check(&self, context: &AuditContext<'_>, report: &mut Report) {
        let mut offenders = Vec::new();
        for file in context.files {
            let content = match file.read() {
                Ok(content) => content,
                Err(error) => {
                    debug!(%error, "skipping unreadable file");
                    continue;
                }
            };
            if has_leaked_ldflags(&content) {
                offenders.push(file.relative().to_path_buf());
            }
        }
        if offenders.is_empty() {
            return;
        }
        report.push(
            Finding::new(
                CheckTag::BadLdflags,
                "pkg-config files with wrong LDFLAGS detected",
            )
            .with_files(offenders),
        );
    }
}

/// Only `Libs` and `Libs.private` entries feed the linker; other fields
/// are ignored.
fn has_leaked_ldflags(content: &str) -> bool {
    scan::logical_lines(content)
        .iter()
        .filter(|line| line.starts_with("Libs"))
        .any(|line| LEAKED_FLAGS.is_match(line))
}
