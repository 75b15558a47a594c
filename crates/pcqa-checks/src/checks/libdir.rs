use std::path::Path;
use std::sync::LazyLock;

use pcqa_core::{CheckTag, Finding, Report};
use pcqa_pcfile::{InstallDir, scan};
use regex::Regex;
use tracing::debug;

use super::QaCheck;
use crate::context::AuditContext;

/// A value rooted in the other ABI's libdir, anchored at the start of the
/// assignment's value.
static LIB64_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(/usr)?/lib64").expect("valid regex"));

/// The word boundary keeps `/lib64` and `/libexec` from matching.
static LIB_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(/usr)?/lib\b").expect("valid regex"));

/// Flags files whose variables point at the libdir of the other ABI:
/// `lib64` paths in `usr/lib/pkgconfig` files and vice versa.
pub struct LibdirCheck;

impl QaCheck for LibdirCheck {
    fn check(&self, context: &AuditContext<'_>, report: &mut Report) {
        // on a merged profile usr/lib is a symlink into usr/lib64 and
        // every lib path doubles as a lib64 path
        let merged_lib = is_symlink(&context.root.join("usr/lib"));
        if merged_lib {
            debug!("usr/lib is a symlink, auditing lib64 files only");
        }
        let mut offenders = Vec::new();
        for file in context.files {
            let foreign = match file.install_dir() {
                InstallDir::Lib if !merged_lib => &LIB64_REFERENCE,
                InstallDir::Lib64 => &LIB_REFERENCE,
                _ => continue,
            };
            let content = match file.read() {
                Ok(content) => content,
                Err(error) => {
                    debug!(%error, "skipping unreadable file");
                    continue;
                }
            };
            let hit = scan::variables(&content)
                .iter()
                .any(|(_, value)| foreign.is_match(value));
            if hit {
                offenders.push(file.relative().to_path_buf());
            }
        }
        if offenders.is_empty() {
            return;
        }
        report.push(
            Finding::new(
                CheckTag::BadLibdir,
                "pkg-config files refer to the wrong libdir",
            )
            .with_files(offenders),
        );
    }
}

fn is_symlink(path: &Path) -> bool {
    path.symlink_metadata()
        .is_ok_and(|metadata| metadata.file_type().is_symlink())
}
