use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};

use super::discover::discover;
use super::error::BatchError;
use crate::archive::archive_dir;
use crate::paths::TargetOs;
use crate::resume::{ResumeError, ResumeFile};

const ARCHIVE_PREFIX: &str = "fastresume_backup";
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// The result of rewriting one resume file during a batch run.
#[derive(Debug)]
pub struct ReplaceOutcome {
    /// The record's on-disk path.
    pub file: PathBuf,
    /// `Ok` when the rewrite persisted, the record's own failure otherwise.
    pub result: Result<(), ResumeError>,
}

/// Drives path migration across a whole `BT_backup` directory.
///
/// # Examples
///
/// ```no_run
/// use qbtmv::{BatchMove, TargetOs};
///
/// # async fn example() -> Result<(), qbtmv::BatchError> {
/// let mover = BatchMove::new("/home/user/.local/share/data/qBittorrent/BT_backup");
/// let outcomes = mover.run("/mnt/old", "/mnt/new", None, true, false).await?;
/// assert!(outcomes.iter().all(|o| o.result.is_ok()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BatchMove {
    bt_backup_path: PathBuf,
}

impl BatchMove {
    /// Creates a coordinator for the given `BT_backup` directory.
    ///
    /// See [`default_bt_backup_dir`] for the OS-default location.
    pub fn new(bt_backup_path: impl Into<PathBuf>) -> Self {
        let bt_backup_path = bt_backup_path.into();
        debug!("BT_backup path: {}", bt_backup_path.display());
        Self { bt_backup_path }
    }

    /// The directory this coordinator operates on.
    pub fn bt_backup_path(&self) -> &Path {
        &self.bt_backup_path
    }

    /// Rewrites every matching record under the directory.
    ///
    /// Steps, in order:
    ///
    /// 1. the directory must exist, else [`BatchError::NotADirectory`];
    /// 2. with `create_backup`, the whole directory is zipped to
    ///    `fastresume_backup<timestamp>.zip` next to it - a failed archive
    ///    aborts the run before any record is touched;
    /// 3. records whose save paths contain `existing_path` are discovered,
    ///    skipping unparseable files when `skip_bad_files` is set and
    ///    failing fast otherwise - discovery completes before any rewrite
    ///    is dispatched, so a fail-fast error returns with every record
    ///    still untouched and no task running;
    /// 4. each record is rewritten and persisted in its own blocking task
    ///    (`replace_paths`, no per-record backup - the directory archive
    ///    covers the run).
    ///
    /// All tasks are awaited; the returned outcomes carry one entry per
    /// discovered record, so a single record failing (disk full, permission
    /// denied) is visible without affecting its siblings.
    pub async fn run(
        &self,
        existing_path: &str,
        new_path: &str,
        target_os: Option<TargetOs>,
        create_backup: bool,
        skip_bad_files: bool,
    ) -> Result<Vec<ReplaceOutcome>, BatchError> {
        if !self.bt_backup_path.is_dir() {
            return Err(BatchError::NotADirectory(self.bt_backup_path.clone()));
        }

        if create_backup {
            let archive_name = format!(
                "{ARCHIVE_PREFIX}{}.zip",
                Local::now().format(TIMESTAMP_FORMAT)
            );
            let archive_path = self
                .bt_backup_path
                .parent()
                .unwrap_or(&self.bt_backup_path)
                .join(archive_name);
            let source = self.bt_backup_path.clone();
            tokio::task::spawn_blocking(move || archive_dir(&source, &archive_path))
                .await
                .map_err(|e| std::io::Error::other(format!("archive task failed: {e}")))??;
        }

        info!("searching for .fastresume files with path {existing_path:?}");
        // Discovery finishes before the first rewrite is dispatched. A
        // fail-fast error here must abort with no record modified and no
        // task left running behind the returned error.
        let mut records = Vec::new();
        for found in discover(&self.bt_backup_path, existing_path, !skip_bad_files)? {
            records.push(found?);
        }

        let mut handles = Vec::with_capacity(records.len());
        for mut resume in records {
            let existing = existing_path.to_string();
            let new = new_path.to_string();
            let file = resume.file_path().to_path_buf();

            handles.push((
                file,
                tokio::task::spawn_blocking(move || {
                    resume.replace_paths(&existing, &new, target_os, true, false)
                }),
            ));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (file, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    warn!("rewrite task for {} failed: {e}", file.display());
                    Err(ResumeError::Io(std::io::Error::other(format!(
                        "rewrite task failed: {e}"
                    ))))
                }
            };
            if let Err(e) = &result {
                warn!("failed to rewrite {}: {e}", file.display());
            }
            outcomes.push(ReplaceOutcome { file, result });
        }

        info!(
            "batch run complete: {} succeeded, {} failed",
            outcomes.iter().filter(|o| o.result.is_ok()).count(),
            outcomes.iter().filter(|o| o.result.is_err()).count(),
        );
        Ok(outcomes)
    }

    /// Rewrites a single, already-loaded record.
    ///
    /// Convenience wrapper over [`ResumeFile::replace_paths`] for callers
    /// that drive records one at a time instead of through [`run`](Self::run).
    pub fn update_one(
        resume: &mut ResumeFile,
        existing_path: &str,
        new_path: &str,
        target_os: Option<TargetOs>,
        save_file: bool,
        create_backup: bool,
    ) -> Result<(), ResumeError> {
        resume.replace_paths(existing_path, new_path, target_os, save_file, create_backup)
    }
}

/// Best-effort guess at qBittorrent's default `BT_backup` directory.
///
/// `None` when the relevant environment variable is unset. Any directory
/// can be passed to [`BatchMove::new`] instead; nothing here is validated
/// against the filesystem.
pub fn default_bt_backup_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        let local = std::env::var_os("LOCALAPPDATA")?;
        Some(PathBuf::from(local).join("qBittorrent").join("BT_backup"))
    } else if cfg!(target_os = "macos") {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join("Library/Application Support/qBittorrent/BT_backup"),
        )
    } else {
        let home = std::env::var_os("HOME")?;
        Some(PathBuf::from(home).join(".local/share/data/qBittorrent/BT_backup"))
    }
}
