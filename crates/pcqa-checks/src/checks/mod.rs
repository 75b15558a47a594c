mod ldflags;
mod libdir;
mod prefix;
mod schema;
mod version;

pub use ldflags::LdflagsCheck;
pub use libdir::LibdirCheck;
pub use prefix::PrefixCheck;
pub use schema::SchemaCheck;
pub use version::{VersionCheck, VersionComparison, compare_versions};

use pcqa_core::Report;

use crate::context::AuditContext;

/// One QA check over the discovered file set.
///
/// Checks never fail. Anything that prevents inspecting a file, like
/// unreadable content or a failed tool query, is logged and the file
/// contributes no finding.
pub trait QaCheck {
    fn check(&self, context: &AuditContext<'_>, report: &mut Report);
}
