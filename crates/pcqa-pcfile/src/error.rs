use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcFileError {
    #[error("failed to read pkg-config file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PcFileError>;
