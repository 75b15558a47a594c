use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs");

    let version = env!("CARGO_PKG_VERSION");

    let version_string = match git_short_hash() {
        Some(hash) if !is_release_commit(version) => {
            let build_date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            format!("{version}+{hash}.{build_date}")
        }
        _ => version.to_string(),
    };

    println!("cargo:rustc-env=PCQA_VERSION={version_string}");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    if hash.is_empty() {
        None
    } else {
        Some(hash.to_string())
    }
}

fn is_release_commit(version: &str) -> bool {
    let Ok(output) = Command::new("git")
        .args(["tag", "--points-at", "HEAD"])
        .output()
    else {
        return false;
    };
    if !output.status.success() {
        return false;
    }
    let tags = String::from_utf8_lossy(&output.stdout);
    let release_tag = format!("pcqa@v{version}");
    tags.lines().any(|tag| tag.trim() == release_tag)
}
