use std::path::Path;

use pcqa_pcfile::PcFile;

use crate::config::AuditConfig;

/// Everything the checks get to look at for one staged tree.
#[derive(Debug)]
pub struct AuditContext<'a> {
    /// Root of the staged install tree.
    pub root: &'a Path,
    /// The discovered `.pc` files, sorted by path.
    pub files: &'a [PcFile],
    /// The run's configuration.
    pub config: &'a AuditConfig,
}
