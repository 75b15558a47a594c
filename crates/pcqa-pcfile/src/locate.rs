use std::fs;
use std::path::Path;

use tracing::debug;

use crate::file::PcFile;

/// Collects the staged `.pc` files under `<root>/usr/lib*/pkgconfig` and
/// `<root>/usr/share/pkgconfig`, sorted by path.
///
/// Symlinked directories are followed, so a merged tree where `usr/lib`
/// points at `usr/lib64` lists each file under both paths. Only regular
/// files count; a symlinked `.pc` file is not listed. Discovery never
/// fails; an unreadable or missing directory is treated as empty.
#[must_use]
pub fn locate_pc_files(root: &Path) -> Vec<PcFile> {
    let mut files = Vec::new();
    let usr = root.join("usr");
    let Ok(entries) = fs::read_dir(&usr) else {
        debug!(path = %usr.display(), "staging root has no usr directory");
        return files;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !(name.starts_with("lib") || name == "share") {
            continue;
        }
        if !fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_dir()) {
            continue;
        }
        collect_pc_files(&entry.path().join("pkgconfig"), root, &mut files);
    }
    files.sort_by(|a, b| a.path().cmp(b.path()));
    files
}

fn collect_pc_files(dir: &Path, root: &Path, files: &mut Vec<PcFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|extension| extension != "pc") {
            continue;
        }
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }
        files.push(PcFile::new(root, path));
    }
}
