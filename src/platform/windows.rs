use super::PlatformPaths;
use crate::error::ErrorKind;

use std::io;
use std::os::windows::ffi::OsStrExt;
use std::path::{Component, Path};

/// `MAX_PATH` minus the trailing NUL, in UTF-16 units.
pub(crate) const DEFAULT_MAX_PATH_LEN: usize = 259;

// Win32 error codes
const ERROR_FILE_NOT_FOUND: i32 = 2;
const ERROR_PATH_NOT_FOUND: i32 = 3;
const ERROR_ACCESS_DENIED: i32 = 5;
const ERROR_WRITE_PROTECT: i32 = 19;
const ERROR_FILE_EXISTS: i32 = 80;
const ERROR_INVALID_NAME: i32 = 123;
const ERROR_ALREADY_EXISTS: i32 = 183;
const ERROR_FILENAME_EXCED_RANGE: i32 = 206;
const ERROR_DIRECTORY: i32 = 267;

/// Windows conventions: `\` or `/` separators (only `\` in verbatim paths),
/// `MAX_PATH` limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsPaths {
    max_path_len: usize,
}

impl WindowsPaths {
    pub fn new() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }

    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }
}

impl Default for WindowsPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPaths for WindowsPaths {
    fn separators(&self, path: &Path) -> &'static [u8] {
        match path.components().next() {
            // `\\?\` paths are passed through untouched, so `/` is a literal character
            Some(Component::Prefix(prefix)) if prefix.kind().is_verbatim() => &b"\\"[..],
            _ => &b"\\/"[..],
        }
    }

    fn path_len(&self, path: &Path) -> usize {
        path.as_os_str().encode_wide().count()
    }

    fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    fn root_len(&self, path: &Path) -> usize {
        let mut components = path.components();
        let Some(Component::Prefix(prefix)) = components.next() else {
            return 0;
        };

        let len = prefix.as_os_str().len();
        match components.next() {
            Some(Component::RootDir) => len + 1,
            _ => len,
        }
    }

    fn prefix<'a>(&self, path: &'a Path, end: usize) -> Option<&'a Path> {
        path.to_str()?.get(..end).map(Path::new)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn classify(&self, err: &io::Error) -> ErrorKind {
        match err.raw_os_error() {
            Some(ERROR_ACCESS_DENIED | ERROR_WRITE_PROTECT) => ErrorKind::PermissionDenied,
            Some(ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND) => ErrorKind::ParentMissing,
            Some(ERROR_DIRECTORY | ERROR_ALREADY_EXISTS | ERROR_FILE_EXISTS) => {
                ErrorKind::NotADirectory
            }
            Some(ERROR_FILENAME_EXCED_RANGE) => ErrorKind::PathTooLong,
            Some(ERROR_INVALID_NAME) => ErrorKind::InvalidPath,
            _ => ErrorKind::from_io(err),
        }
    }
}
