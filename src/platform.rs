//! Per-OS path conventions and the single-level create call.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixPaths;
#[cfg(windows)]
pub use windows::WindowsPaths;

use crate::error::ErrorKind;

use std::io;
use std::path::Path;

/// Platform implementation for the current build target.
#[cfg(unix)]
pub type HostPaths = UnixPaths;
/// Platform implementation for the current build target.
#[cfg(windows)]
pub type HostPaths = WindowsPaths;

/// Path conventions and directory creation for one OS family.
///
/// The provided implementations are plain `Copy` values, so one instance can
/// be shared freely across threads.
pub trait PlatformPaths {
    /// Bytes that separate components of `path`.
    ///
    /// Separators are always ASCII, so every position holding one is a valid
    /// cut point in the encoded path.
    fn separators(&self, path: &Path) -> &'static [u8];

    /// Length of `path` in the units the OS limit is expressed in.
    fn path_len(&self, path: &Path) -> usize;

    /// Longest resolved path accepted, as measured by [`path_len`](Self::path_len).
    fn max_path_len(&self) -> usize;

    /// Number of leading encoded bytes that belong to a prefix which cannot be
    /// created as a directory (a drive or share). Separators inside it are not
    /// cut points.
    fn root_len(&self, path: &Path) -> usize;

    /// The first `end` encoded bytes of `path`, or `None` if they cannot be
    /// expressed as a path on this platform.
    fn prefix<'a>(&self, path: &'a Path, end: usize) -> Option<&'a Path>;

    /// Create exactly one directory level.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Map an OS error from [`create_dir`](Self::create_dir) to an [`ErrorKind`].
    fn classify(&self, err: &io::Error) -> ErrorKind;
}
