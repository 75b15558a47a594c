/// Configuration for one audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    /// The version of the package whose files are being audited.
    pub package_version: Option<String>,
    /// Replaces `package_version` as the version the files must declare.
    /// An empty string disables the version check entirely.
    pub expected_version: Option<String>,
    /// The prefix every path variable must be rooted under.
    pub install_prefix: Option<String>,
    /// The package builds a moving upstream snapshot, so its recorded
    /// version is approximate.
    pub live: bool,
}

impl AuditConfig {
    /// The version the staged files are expected to declare, or `None`
    /// when the version check is disabled.
    #[must_use]
    pub fn effective_expected(&self) -> Option<&str> {
        let expected = self
            .expected_version
            .as_deref()
            .or(self.package_version.as_deref())?;
        if expected.is_empty() {
            None
        } else {
            Some(expected)
        }
    }

    /// The prefix to enforce, or `None` when the prefix check is disabled.
    #[must_use]
    pub fn effective_prefix(&self) -> Option<&str> {
        self.install_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
    }
}
