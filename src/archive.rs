//! Directory snapshot archives.
//!
//! Before a batch run mutates anything, the whole resume directory is zipped
//! into a single timestamped archive. Restoring after a bad migration is
//! then one unzip, no matter how many records the run touched.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("source directory not found: {0}")]
    SourceNotFound(std::path::PathBuf),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Archives every regular file of `source_dir` into a zip at `archive_path`.
///
/// The walk is flat: subdirectories are skipped, entry names are the bare
/// file names. A file that disappears between listing and archiving fails
/// the whole archive; the caller treats that as fatal and aborts the batch,
/// so no retry happens here.
///
/// # Errors
///
/// [`ArchiveError`] if the source directory cannot be listed, the archive
/// file cannot be created, or any source file cannot be read mid-archive.
pub fn archive_dir(source_dir: &Path, archive_path: &Path) -> Result<(), ArchiveError> {
    if !source_dir.is_dir() {
        return Err(ArchiveError::SourceNotFound(source_dir.to_path_buf()));
    }

    info!("creating archive {}", archive_path.display());
    let mut archive = ZipWriter::new(BufWriter::new(File::create(archive_path)?));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in std::fs::read_dir(source_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!("archiving {name}");

        archive.start_file(name.as_str(), options)?;
        let mut source = File::open(entry.path())?;
        io::copy(&mut source, &mut archive)?;
    }

    archive.finish()?;
    info!("archive {} complete", archive_path.display());
    Ok(())
}
