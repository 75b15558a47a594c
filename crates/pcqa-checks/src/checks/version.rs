use std::cmp::Ordering;

use pcqa_core::{CheckTag, Finding, Report};
use tracing::debug;

use super::QaCheck;
use crate::context::AuditContext;
use crate::traits::{PkgConfigClient, VersionOrder};

/// Stands in for a missing `Version` field in findings and comparisons.
const NO_VERSION: &str = "<no-set>";

/// How one declared version stacked up against the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComparison {
    /// Both sides were well-formed versions and ordered equal.
    Equal,
    /// Both sides were well-formed versions and ordered apart.
    NotEqual,
    /// At least one side was not a well-formed version; decided by exact
    /// string equality instead.
    Fallback { equal: bool },
}

impl VersionComparison {
    #[must_use]
    pub fn matches(self) -> bool {
        matches!(self, Self::Equal | Self::Fallback { equal: true })
    }
}

/// Compares under the order when both sides qualify for it, by exact
/// string equality otherwise. `1.0` and `1.00` are the same version but
/// different strings.
#[must_use]
pub fn compare_versions(
    order: &dyn VersionOrder,
    expected: &str,
    declared: &str,
) -> VersionComparison {
    if order.comparable(expected, declared) {
        if order.compare(expected, declared) == Ordering::Equal {
            VersionComparison::Equal
        } else {
            VersionComparison::NotEqual
        }
    } else {
        VersionComparison::Fallback {
            equal: expected == declared,
        }
    }
}

/// Compares each file's declared `Version` against the expected one and
/// reports only when every single file disagrees.
pub struct VersionCheck<'a, C: PkgConfigClient, V: VersionOrder> {
    client: &'a C,
    order: &'a V,
}

impl<'a, C: PkgConfigClient, V: VersionOrder> VersionCheck<'a, C, V> {
    #[must_use]
    pub fn new(client: &'a C, order: &'a V) -> Self {
        Self { client, order }
    }
}

impl<C: PkgConfigClient, V: VersionOrder> QaCheck for VersionCheck<'_, C, V> {
    fn check(&self, context: &AuditContext<'_>, report: &mut Report) {
        let Some(expected) = context.config.effective_expected() else {
            return;
        };
        if !self.client.is_available() {
            debug!("pkg-config tool unavailable, skipping version audit");
            return;
        }

        let mut mismatches = Vec::new();
        for file in context.files {
            let declared = match self.client.modversion(file.path()) {
                Ok(value) => value,
                Err(error) => {
                    debug!(%error, "version query failed");
                    continue;
                }
            };
            let declared = if declared.is_empty() {
                NO_VERSION.to_string()
            } else {
                declared
            };
            if !compare_versions(self.order, expected, &declared).matches() {
                mismatches.push((file.relative().to_path_buf(), declared));
            }
        }

        // a mix of matching and mismatching files is a multi-library
        // package whose parts version independently
        if mismatches.is_empty() || mismatches.len() != context.files.len() {
            return;
        }
        if expected.contains("_p") {
            debug!(expected, "expected version has a patch level, suppressing");
            return;
        }
        if context.config.live {
            debug!("live build, suppressing version findings");
            return;
        }

        let mut finding = Finding::new(
            CheckTag::UnexpectedVersion,
            format!("pkg-config files declare a version other than {expected}"),
        );
        for (path, declared) in mismatches {
            finding = finding
                .with_detail(path.display().to_string(), declared)
                .with_file(path);
        }
        report.push(finding);
    }
}
