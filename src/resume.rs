//! qBittorrent `.fastresume` records.
//!
//! A fastresume file is one bencode dictionary holding the client's state for
//! a single torrent: where the data lives (`save_path` and its UI twin
//! `qBt-savePath`), optionally the per-file layout of a multi-file torrent
//! (`mapped_files`), plus a pile of fields this crate never interprets and
//! must hand back byte-for-byte.
//!
//! [`ResumeFile`] wraps one decoded file with typed accessors for the path
//! fields and mutators that can translate separators, write a timestamped
//! backup before touching anything, and persist the whole record wholesale.

mod error;
mod record;

pub use error::ResumeError;
pub use record::{ResumeFile, MAPPED_FILES_KEY, QBT_SAVE_PATH_KEY, SAVE_PATH_KEY};
