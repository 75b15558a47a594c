use std::path::{Path, PathBuf};

use pcqa_core::{CheckTag, Finding, Report};
use pcqa_pcfile::PcFile;
use tracing::debug;

use super::QaCheck;
use crate::context::AuditContext;
use crate::traits::{PkgConfigClient, Validation};

/// Depth 1 validates the files themselves; their `Requires` entries are
/// resolved but not recursed into.
const MAX_TRAVERSE_DEPTH: u32 = 1;

/// Feeds every discovered file through the host tool's parser in one
/// batch.
pub struct SchemaCheck<'a, C: PkgConfigClient> {
    client: &'a C,
}

impl<'a, C: PkgConfigClient> SchemaCheck<'a, C> {
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

impl<C: PkgConfigClient> QaCheck for SchemaCheck<'_, C> {
    fn check(&self, context: &AuditContext<'_>, report: &mut Report) {
        if !self.client.is_available() {
            debug!("pkg-config tool unavailable, skipping validation");
            return;
        }
        let files: Vec<PathBuf> = context
            .files
            .iter()
            .map(|file| file.path().to_path_buf())
            .collect();
        let search_path = pkgconfig_dirs(context.files);
        match self.client.validate(&files, &search_path, MAX_TRAVERSE_DEPTH) {
            Ok(Validation::Passed) => {}
            Ok(Validation::Rejected { diagnostics }) => {
                report.push(
                    Finding::new(
                        CheckTag::ValidationFailure,
                        "pkg-config files do not validate",
                    )
                    .with_detail("diagnostics", diagnostics.trim()),
                );
            }
            Err(error) => debug!(%error, "validation query failed"),
        }
    }
}

/// The directories the files were found in, deduplicated. The input is
/// sorted by path, so equal parents always sit next to each other.
fn pkgconfig_dirs(files: &[PcFile]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = files
        .iter()
        .filter_map(|file| file.path().parent().map(Path::to_path_buf))
        .collect();
    dirs.dedup();
    dirs
}
