use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use super::error::ResumeError;
use crate::bencode::{decode, encode, Value};
use crate::paths::{convert_slashes, TargetOs};

/// The engine's save location.
pub const SAVE_PATH_KEY: &str = "save_path";
/// The UI's copy of the save location; qBittorrent keeps both and they must
/// stay consistent.
pub const QBT_SAVE_PATH_KEY: &str = "qBt-savePath";
/// Per-file relative paths, present only for multi-file torrents.
pub const MAPPED_FILES_KEY: &str = "mapped_files";

const BACKUP_SUFFIX: &str = "bkup";
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// One decoded `.fastresume` file.
///
/// Loading validates that both save path keys exist and are UTF-8 strings;
/// everything else in the dictionary is carried along untouched and written
/// back byte-identically on [`save`](ResumeFile::save).
///
/// # Examples
///
/// ```no_run
/// use qbtmv::resume::ResumeFile;
/// use qbtmv::TargetOs;
///
/// # fn example() -> Result<(), qbtmv::ResumeError> {
/// let mut resume = ResumeFile::load("BT_backup/abcd1234.fastresume")?;
/// println!("currently at {}", resume.save_path());
///
/// resume.replace_paths("/mnt/old", "/mnt/new", Some(TargetOs::Linux), true, true)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResumeFile {
    file_path: PathBuf,
    data: Value,
}

impl ResumeFile {
    /// Loads and validates a resume file from disk.
    ///
    /// # Errors
    ///
    /// [`ResumeError::NotFound`] if `path` does not exist or is not a regular
    /// file; [`ResumeError::Bencode`] if the bytes do not decode;
    /// [`ResumeError::Malformed`] if the root is not a dictionary or either
    /// save path key is missing or not a UTF-8 string.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResumeError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ResumeError::NotFound(path.to_path_buf()));
        }
        // Resolve symlinks so the record's identity (and backup names) point
        // at the real file.
        let file_path = path.canonicalize()?;
        debug!("loading fastresume {}", file_path.display());

        let raw = std::fs::read(&file_path)?;
        let data = decode(&raw).map_err(|source| ResumeError::Bencode {
            path: file_path.clone(),
            source,
        })?;

        let resume = Self { file_path, data };
        resume.validate()?;
        Ok(resume)
    }

    fn validate(&self) -> Result<(), ResumeError> {
        let malformed = |reason: &str| ResumeError::Malformed {
            path: self.file_path.clone(),
            reason: reason.to_string(),
        };

        if self.data.as_dict().is_none() {
            return Err(malformed("root is not a dictionary"));
        }
        for key in [SAVE_PATH_KEY, QBT_SAVE_PATH_KEY] {
            match self.data.get(key.as_bytes()) {
                None => return Err(malformed(&format!("missing required key {key:?}"))),
                Some(v) if v.as_str().is_none() => {
                    return Err(malformed(&format!("{key:?} is not a UTF-8 string")))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// The canonical path this record was loaded from.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The derived backup path: original path, a second-granularity
    /// timestamp, and a `.bkup` suffix. Two backups of the same record
    /// within one second collide; accepted, not prevented.
    pub fn backup_file_name(&self) -> PathBuf {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        PathBuf::from(format!(
            "{}.{}.{}",
            self.file_path.display(),
            stamp,
            BACKUP_SUFFIX
        ))
    }

    // Both keys are checked at load time, so the lookups below cannot miss
    // short of a bug in our own mutators.
    fn path_field(&self, key: &str) -> &str {
        self.data
            .get(key.as_bytes())
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The engine save path (`save_path`).
    pub fn save_path(&self) -> &str {
        self.path_field(SAVE_PATH_KEY)
    }

    /// The client save path (`qBt-savePath`).
    pub fn qbt_save_path(&self) -> &str {
        self.path_field(QBT_SAVE_PATH_KEY)
    }

    /// Per-file path fragments for multi-file torrents.
    ///
    /// `None` when the record has no `mapped_files` key at all, which is
    /// distinct from a present-but-empty list. Entries that are not UTF-8
    /// are skipped.
    pub fn mapped_files(&self) -> Option<Vec<&str>> {
        let list = self.data.get(MAPPED_FILES_KEY.as_bytes())?.as_list()?;
        Some(list.iter().filter_map(Value::as_str).collect())
    }

    /// Sets a single save path field.
    ///
    /// `key` must be [`SAVE_PATH_KEY`] or [`QBT_SAVE_PATH_KEY`], anything
    /// else is [`ResumeError::InvalidKey`]. With `create_backup` the current
    /// in-memory state (including earlier unsaved edits) is written to the
    /// backup path before the field changes. With `target_os` the new value
    /// is run through the separator translator first. With `save_file` the
    /// record is persisted to its own path immediately after the change.
    pub fn set_path(
        &mut self,
        key: &str,
        path: &str,
        target_os: Option<TargetOs>,
        save_file: bool,
        create_backup: bool,
    ) -> Result<(), ResumeError> {
        if key != SAVE_PATH_KEY && key != QBT_SAVE_PATH_KEY {
            return Err(ResumeError::InvalidKey(key.to_string()));
        }
        if create_backup {
            self.save(Some(&self.backup_file_name()))?;
        }

        let path = match target_os {
            Some(os) => convert_slashes(path, os),
            None => path.to_string(),
        };
        debug!(
            "setting {key}: old={:?} new={path:?} target_os={target_os:?}",
            self.path_field(key)
        );
        self.data.insert(key, Value::string(&path));

        if save_file {
            self.save(None)?;
        }
        Ok(())
    }

    /// Sets both save path fields to `path`.
    ///
    /// The backup, when requested, is taken once before either field
    /// changes; the save, when requested, happens once after both. When
    /// `target_os` is given and the record has a `mapped_files` list, every
    /// UTF-8 entry of that list is translated too.
    pub fn set_all_paths(
        &mut self,
        path: &str,
        target_os: Option<TargetOs>,
        save_file: bool,
        create_backup: bool,
    ) -> Result<(), ResumeError> {
        if create_backup {
            self.save(Some(&self.backup_file_name()))?;
        }

        self.set_path(SAVE_PATH_KEY, path, target_os, false, false)?;
        self.set_path(QBT_SAVE_PATH_KEY, path, target_os, false, false)?;

        if let Some(os) = target_os {
            if let Some(list) = self
                .data
                .get_mut(MAPPED_FILES_KEY.as_bytes())
                .and_then(Value::as_list_mut)
            {
                debug!("converting slashes for mapped_files");
                for entry in list.iter_mut() {
                    if let Some(fragment) = entry.as_str() {
                        *entry = Value::string(&convert_slashes(fragment, os));
                    }
                }
            }
        }

        if save_file {
            self.save(None)?;
        }
        Ok(())
    }

    /// Rewrites both save paths by substring substitution.
    ///
    /// Replaces the first occurrence of `existing_path` in the current
    /// engine save path with `new_path` and applies the result to both
    /// fields via [`set_all_paths`](ResumeFile::set_all_paths). Only the
    /// first occurrence is substituted; a path containing the needle twice
    /// keeps its second occurrence.
    pub fn replace_paths(
        &mut self,
        existing_path: &str,
        new_path: &str,
        target_os: Option<TargetOs>,
        save_file: bool,
        create_backup: bool,
    ) -> Result<(), ResumeError> {
        info!("replacing paths in {}", self.file_path.display());
        let new_save_path = self.save_path().replacen(existing_path, new_path, 1);
        debug!("existing={existing_path:?} new={new_path:?} replaced={new_save_path:?}");
        self.set_all_paths(&new_save_path, target_os, save_file, create_backup)?;
        info!("paths replaced in {}", self.file_path.display());
        Ok(())
    }

    /// Re-encodes the full record and overwrites `file_name` (the record's
    /// own path when `None`) in a single wholesale write.
    pub fn save(&self, file_name: Option<&Path>) -> Result<(), ResumeError> {
        let target = file_name.unwrap_or(&self.file_path);
        info!("saving {}", target.display());
        std::fs::write(target, encode(&self.data))?;
        Ok(())
    }
}
