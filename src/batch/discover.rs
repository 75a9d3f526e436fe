use std::fs::ReadDir;
use std::path::Path;

use tracing::{debug, error, warn};

use super::error::BatchError;
use crate::resume::{ResumeError, ResumeFile};

const RESUME_SUFFIX: &str = ".fastresume";

/// Finds resume files in `dir` whose save paths contain `existing_path`.
///
/// The returned iterator is lazy and single-pass: entries are listed,
/// loaded, and matched one at a time as the caller pulls on it. Entries
/// without the `.fastresume` suffix and records whose paths do not contain
/// the needle are filtered out silently.
///
/// A record that fails to load is handled per `raise_on_error`: `true`
/// yields the failure as the iterator's final item (fail-fast), `false`
/// logs a warning and moves on (best-effort).
///
/// # Errors
///
/// Fails immediately if `dir` cannot be listed.
pub fn discover(
    dir: &Path,
    existing_path: &str,
    raise_on_error: bool,
) -> Result<Discover, BatchError> {
    Ok(Discover {
        entries: std::fs::read_dir(dir)?,
        existing_path: existing_path.to_string(),
        raise_on_error,
        done: false,
    })
}

/// Lazy iterator over matching resume files, created by [`discover`].
#[derive(Debug)]
pub struct Discover {
    entries: ReadDir,
    existing_path: String,
    raise_on_error: bool,
    done: bool,
}

impl Iterator for Discover {
    type Item = Result<ResumeFile, ResumeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    if self.raise_on_error {
                        self.done = true;
                        return Some(Err(ResumeError::Io(e)));
                    }
                    warn!("unreadable directory entry, skipping: {e}");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_name().to_string_lossy().ends_with(RESUME_SUFFIX) {
                continue;
            }

            let resume = match ResumeFile::load(&path) {
                Ok(resume) => resume,
                Err(e) => {
                    if self.raise_on_error {
                        error!("unable to parse {}, stopping discovery", path.display());
                        self.done = true;
                        return Some(Err(e));
                    }
                    warn!("unable to parse {}, skipping: {e}", path.display());
                    continue;
                }
            };

            if resume.save_path().contains(&self.existing_path)
                || resume.qbt_save_path().contains(&self.existing_path)
            {
                debug!("discovered {}", path.display());
                return Some(Ok(resume));
            }
        }
    }
}
