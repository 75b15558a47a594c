use std::path::PathBuf;

use thiserror::Error;

/// Errors from querying the host pkg-config tool.
///
/// The checks absorb every variant: a failed query is logged, and the file
/// it concerned simply cannot contribute a finding.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status} for '{path}'")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
        path: PathBuf,
    },

    #[error("'{program}' produced output that is not UTF-8")]
    NonUtf8Output { program: String },

    #[error("cannot assemble a pkg-config search path")]
    SearchPath(#[source] std::env::JoinPathsError),
}

pub type Result<T> = std::result::Result<T, QueryError>;
