use std::path::{Path, PathBuf};

use crate::error::Result;

/// Outcome of validating a set of `.pc` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Passed,
    Rejected {
        /// The tool's diagnostics, verbatim.
        diagnostics: String,
    },
}

/// Access to a pkg-config implementation on the host.
pub trait PkgConfigClient {
    /// Whether the tool can be invoked at all. Checks that need the tool
    /// skip silently when it cannot.
    fn is_available(&self) -> bool;

    /// Parses and resolves the given files, looking dependencies up in
    /// `search_path` only and following at most `max_depth` levels of
    /// `Requires` entries.
    ///
    /// # Errors
    ///
    /// Fails when the tool cannot be invoked or produces unusable output.
    /// A rejected file set is not an error; it comes back as
    /// [`Validation::Rejected`].
    fn validate(
        &self,
        files: &[PathBuf],
        search_path: &[PathBuf],
        max_depth: u32,
    ) -> Result<Validation>;

    /// Resolves a variable of one file. The value is empty when the
    /// variable is not set.
    ///
    /// # Errors
    ///
    /// Fails when the tool cannot be invoked, rejects the file, or
    /// produces unusable output.
    fn variable(&self, file: &Path, name: &str) -> Result<String>;

    /// The version the file's `Version` field declares, empty when the
    /// field is not set.
    ///
    /// # Errors
    ///
    /// Fails when the tool cannot be invoked, rejects the file, or
    /// produces unusable output.
    fn modversion(&self, file: &Path) -> Result<String>;
}
