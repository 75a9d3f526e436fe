//! Path separator translation.
//!
//! Resume files store paths as plain strings in whatever convention the
//! client that wrote them used. When torrent data migrates between operating
//! systems the separators have to follow, independent of the OS this tool
//! happens to run on.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The path convention to normalize output paths to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOs {
    /// Backslash-separated paths.
    Windows,
    /// Forward-slash-separated paths.
    Linux,
    /// Forward-slash-separated paths.
    Mac,
}

/// Error for an unrecognized target OS name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown target OS {0:?}, expected Windows, Linux, or Mac")]
pub struct UnknownTargetOs(String);

impl FromStr for TargetOs {
    type Err = UnknownTargetOs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(TargetOs::Windows),
            "linux" => Ok(TargetOs::Linux),
            "mac" => Ok(TargetOs::Mac),
            _ => Err(UnknownTargetOs(s.to_string())),
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetOs::Windows => write!(f, "Windows"),
            TargetOs::Linux => write!(f, "Linux"),
            TargetOs::Mac => write!(f, "Mac"),
        }
    }
}

/// Converts a path's separators to the target OS convention.
///
/// Only separators change; segment content is never touched, and a path
/// already in the target convention comes back unchanged (the function is
/// idempotent).
///
/// # Examples
///
/// ```
/// use qbtmv::paths::{convert_slashes, TargetOs};
///
/// assert_eq!(convert_slashes("/mnt/new/data", TargetOs::Windows), r"\mnt\new\data");
/// assert_eq!(convert_slashes(r"C:\torrents\iso", TargetOs::Linux), "C:/torrents/iso");
/// assert_eq!(convert_slashes("/already/fine", TargetOs::Mac), "/already/fine");
/// ```
pub fn convert_slashes(path: &str, target_os: TargetOs) -> String {
    match target_os {
        TargetOs::Windows => path.replace('/', "\\"),
        TargetOs::Linux | TargetOs::Mac => path.replace('\\', "/"),
    }
}
