use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PcFileError, Result};

/// Which pkgconfig directory a file was discovered in, named after the
/// directory's parent under `usr/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallDir {
    /// `usr/lib/pkgconfig`
    Lib,
    /// `usr/lib64/pkgconfig`
    Lib64,
    /// `usr/share/pkgconfig`
    Share,
    /// any other `usr/lib*/pkgconfig`, e.g. `lib32` or `libexec`
    OtherLib,
}

/// A staged `.pc` file.
///
/// Content is read on demand and never cached, so repeated audits of the
/// same tree observe whatever is on disk at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcFile {
    path: PathBuf,
    relative: PathBuf,
    install_dir: InstallDir,
}

impl PcFile {
    #[must_use]
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = pcqa_core::relative_to_root(root, &path);
        let install_dir = classify(&path);
        Self {
            path,
            relative,
            install_dir,
        }
    }

    /// The absolute path, suitable for reads and tool invocations.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path relative to the staging root, suitable for findings.
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    #[must_use]
    pub fn install_dir(&self) -> InstallDir {
        self.install_dir
    }

    /// # Errors
    ///
    /// Returns an error when the file cannot be read as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| PcFileError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

fn classify(path: &Path) -> InstallDir {
    // <root>/usr/<dir>/pkgconfig/<name>.pc, so the grandparent decides
    let dir = path
        .parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str());
    match dir {
        Some("lib") => InstallDir::Lib,
        Some("lib64") => InstallDir::Lib64,
        Some("share") => InstallDir::Share,
        _ => InstallDir::OtherLib,
    }
}
