use crate::archive::ArchiveError;
use crate::resume::ResumeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("directory backup failed: {0}")]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Resume(#[from] ResumeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
