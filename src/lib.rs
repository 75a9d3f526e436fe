//! qbtmv - bulk path migration for qBittorrent `.fastresume` files
//!
//! When torrent data moves (new drive, new machine, Windows to Linux),
//! qBittorrent's per-torrent resume files still point at the old location.
//! This library rewrites the stored save paths in place, preserving every
//! other field byte-for-byte, with a directory-level backup archive taken
//! before any batch mutation.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode encoding/decoding
//! - [`resume`] - One `.fastresume` file as a typed, mutable record
//! - [`paths`] - Path separator translation between OS conventions
//! - [`batch`] - Discovery and concurrent batch rewriting
//! - [`archive`] - Zip snapshots of the resume directory
//!
//! # Example
//!
//! ```no_run
//! use qbtmv::{BatchMove, TargetOs};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mover = BatchMove::new("/home/user/.local/share/qBittorrent/BT_backup");
//! let outcomes = mover
//!     .run("/mnt/old", "/mnt/new", Some(TargetOs::Linux), true, true)
//!     .await?;
//!
//! for outcome in &outcomes {
//!     if let Err(e) = &outcome.result {
//!         eprintln!("{}: {}", outcome.file.display(), e);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod batch;
pub mod bencode;
pub mod paths;
pub mod resume;

pub use archive::{archive_dir, ArchiveError};
pub use batch::{default_bt_backup_dir, discover, BatchError, BatchMove, ReplaceOutcome};
pub use bencode::{decode, encode, BencodeError, Value};
pub use paths::{convert_slashes, TargetOs};
pub use resume::{ResumeError, ResumeFile};
