use super::PlatformPaths;
use crate::error::ErrorKind;

use std::ffi::OsStr;
use std::fs::DirBuilder;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

/// Mode for newly created directories, before the umask is applied.
pub(crate) const DEFAULT_DIR_MODE: u32 = 0o775;

/// POSIX conventions: `/` separator, `PATH_MAX` limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnixPaths {
    mode: u32,
    max_path_len: usize,
}

impl UnixPaths {
    pub fn new() -> Self {
        Self {
            mode: DEFAULT_DIR_MODE,
            // PATH_MAX counts the trailing NUL
            max_path_len: (libc::PATH_MAX as usize).saturating_sub(1),
        }
    }

    /// Permission bits used for each created directory.
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    pub fn mode(&self) -> u32 {
        self.mode
    }
}

impl Default for UnixPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPaths for UnixPaths {
    fn separators(&self, _path: &Path) -> &'static [u8] {
        b"/"
    }

    fn path_len(&self, path: &Path) -> usize {
        path.as_os_str().len()
    }

    fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    fn root_len(&self, _path: &Path) -> usize {
        // `/` is handed to mkdir like any other prefix and reports EEXIST
        0
    }

    fn prefix<'a>(&self, path: &'a Path, end: usize) -> Option<&'a Path> {
        let bytes = path.as_os_str().as_bytes().get(..end)?;
        Some(Path::new(OsStr::from_bytes(bytes)))
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        DirBuilder::new().mode(self.mode).create(path)
    }

    fn classify(&self, err: &io::Error) -> ErrorKind {
        match err.raw_os_error() {
            Some(libc::EACCES | libc::EPERM | libc::EROFS) => ErrorKind::PermissionDenied,
            Some(libc::ENOENT) => ErrorKind::ParentMissing,
            Some(libc::ENOTDIR | libc::EEXIST) => ErrorKind::NotADirectory,
            Some(libc::ENAMETOOLONG) => ErrorKind::PathTooLong,
            _ => ErrorKind::from_io(err),
        }
    }
}
