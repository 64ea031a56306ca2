use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned by directory creation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create directory: {} ({kind})", .path.display())]
    Create {
        path: PathBuf,
        kind: ErrorKind,
        #[source]
        cause: std::io::Error,
    },

    #[error("Path is too long ({len}, limit is {max}): {}", .path.display())]
    PathTooLong { path: PathBuf, len: usize, max: usize },

    #[error("Failed to resolve path: {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Path cannot be split at its separators: {}", .path.display())]
    Unsplittable { path: PathBuf },
}

impl Error {
    /// Coarse category of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Create { kind, .. } => *kind,
            Error::PathTooLong { .. } => ErrorKind::PathTooLong,
            Error::Resolve { .. } => ErrorKind::InvalidPath,
            Error::Unsplittable { .. } => ErrorKind::InvalidPath,
        }
    }

    /// The path (or prefix) the failure applies to.
    pub fn path(&self) -> &Path {
        match self {
            Error::Create { path, .. }
            | Error::PathTooLong { path, .. }
            | Error::Resolve { path, .. }
            | Error::Unsplittable { path } => path,
        }
    }

    /// The underlying OS error code, if the OS reported one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::Create { cause, .. } | Error::Resolve { cause, .. } => cause.raw_os_error(),
            _ => None,
        }
    }
}

/// Category of a directory creation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PermissionDenied,
    ParentMissing,
    /// A path component exists but is not a directory.
    NotADirectory,
    PathTooLong,
    InvalidPath,
    Other,
}

impl ErrorKind {
    /// Fallback classification when the platform does not recognize the raw code.
    pub(crate) fn from_io(err: &std::io::Error) -> Self {
        use std::io::ErrorKind as Io;

        match err.kind() {
            Io::PermissionDenied | Io::ReadOnlyFilesystem => ErrorKind::PermissionDenied,
            Io::NotFound => ErrorKind::ParentMissing,
            Io::NotADirectory | Io::AlreadyExists => ErrorKind::NotADirectory,
            Io::InvalidFilename => ErrorKind::PathTooLong,
            Io::InvalidInput => ErrorKind::InvalidPath,
            _ => ErrorKind::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::ParentMissing => "parent directory missing",
            ErrorKind::NotADirectory => "not a directory",
            ErrorKind::PathTooLong => "path too long",
            ErrorKind::InvalidPath => "invalid path",
            ErrorKind::Other => "other error",
        };
        f.write_str(text)
    }
}

impl From<ErrorKind> for std::io::ErrorKind {
    fn from(kind: ErrorKind) -> Self {
        use std::io::ErrorKind as Io;

        match kind {
            ErrorKind::PermissionDenied => Io::PermissionDenied,
            ErrorKind::ParentMissing => Io::NotFound,
            ErrorKind::NotADirectory => Io::NotADirectory,
            ErrorKind::PathTooLong => Io::InvalidFilename,
            ErrorKind::InvalidPath => Io::InvalidInput,
            ErrorKind::Other => Io::Other,
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::new(err.kind().into(), err)
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
