use std::path::Path;

use serde::Deserialize;

use crate::error::{CliError, Result};

/// Site defaults for the audit flags, loaded from a TOML file named on
/// the command line. Flags always win over profile values.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Profile {
    #[serde(rename = "pkg-config")]
    pub pkg_config: Option<String>,
    pub prefix: Option<String>,
    #[serde(rename = "package-version")]
    pub package_version: Option<String>,
    #[serde(rename = "expected-version")]
    pub expected_version: Option<String>,
    pub live: Option<bool>,
}

pub(crate) fn load_profile(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ProfileRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::ProfileParse {
        path: path.to_path_buf(),
        source,
    })
}
