use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to determine the current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to read profile '{path}'")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile '{path}'")]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to render the report")]
    RenderReport(#[source] serde_json::Error),
}

pub(crate) type Result<T> = std::result::Result<T, CliError>;
