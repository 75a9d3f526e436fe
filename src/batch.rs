//! Batch discovery and rewriting of resume files.
//!
//! The coordinator scans a `BT_backup` directory for `.fastresume` records
//! whose save paths contain the path being migrated away from, then rewrites
//! each matching record in its own blocking task. A zip snapshot of the
//! whole directory is taken before the first mutation, so one bad run is one
//! unzip away from recovery.
//!
//! Records fail independently: a corrupt file can be skipped during
//! discovery (best-effort mode) or abort the scan (fail-fast), and a failed
//! rewrite shows up as that record's entry in the returned outcomes without
//! affecting its siblings.

mod discover;
mod error;
mod mover;

pub use discover::{discover, Discover};
pub use error::BatchError;
pub use mover::{default_bt_backup_dir, BatchMove, ReplaceOutcome};
