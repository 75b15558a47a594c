use std::path::Path;

use pcqa_core::Report;
use pcqa_pcfile::locate_pc_files;
use tracing::debug;

use crate::checks::{LdflagsCheck, LibdirCheck, PrefixCheck, SchemaCheck, VersionCheck};
use crate::config::AuditConfig;
use crate::context::AuditContext;
use crate::engine::AuditEngine;
use crate::providers::{HostPkgConfig, PmsVersionOrder};
use crate::traits::{PkgConfigClient, VersionOrder};

/// The whole audit: discovery, the five checks, one report.
pub struct AuditOperation<C, V> {
    client: C,
    order: V,
}

impl AuditOperation<HostPkgConfig, PmsVersionOrder> {
    /// An audit backed by the named pkg-config executable.
    #[must_use]
    pub fn with_host_tool(program: impl Into<String>) -> Self {
        Self::new(HostPkgConfig::new(program), PmsVersionOrder::new())
    }
}

impl<C, V> AuditOperation<C, V>
where
    C: PkgConfigClient,
    V: VersionOrder,
{
    #[must_use]
    pub fn new(client: C, order: V) -> Self {
        Self { client, order }
    }

    /// Runs every check over the staged tree under `root`.
    ///
    /// Findings are the only outcome; the audit itself cannot fail. A
    /// tree without `.pc` files produces a clean report without running
    /// any check.
    #[must_use]
    pub fn execute(&self, root: &Path, config: &AuditConfig) -> Report {
        let mut report = Report::new(root);
        let files = locate_pc_files(root);
        if files.is_empty() {
            debug!(root = %root.display(), "no pkg-config files staged, nothing to audit");
            return report;
        }
        debug!(count = files.len(), "auditing pkg-config files");

        let context = AuditContext {
            root,
            files: &files,
            config,
        };

        let ldflags = LdflagsCheck;
        let schema = SchemaCheck::new(&self.client);
        let prefix = PrefixCheck::new(&self.client);
        let libdir = LibdirCheck;
        let version = VersionCheck::new(&self.client, &self.order);

        let mut engine = AuditEngine::new();
        engine.add_check(&ldflags);
        engine.add_check(&schema);
        engine.add_check(&prefix);
        engine.add_check(&libdir);
        engine.add_check(&version);
        engine.run(&context, &mut report);

        report
    }
}
