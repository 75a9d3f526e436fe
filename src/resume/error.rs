use crate::bencode::BencodeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("resume file not found: {0}")]
    NotFound(PathBuf),

    #[error("malformed resume file {path}: {source}")]
    Bencode {
        path: PathBuf,
        #[source]
        source: BencodeError,
    },

    #[error("invalid resume file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("save path key must be \"save_path\" or \"qBt-savePath\", got {0:?}")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
