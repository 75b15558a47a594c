use std::path::{Path, PathBuf};

/// Strips the staging root from a discovered path.
///
/// Paths outside the root are returned unchanged; findings then carry the
/// absolute path rather than a misleading relative one.
#[must_use]
pub fn relative_to_root(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
