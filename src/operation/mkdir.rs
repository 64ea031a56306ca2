use crate::error::{Error, Result};
use crate::platform::{HostPaths, PlatformPaths};
use crate::probe::path_is_directory;

use std::path::Path;

/// Outcome of a successful directory creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    /// The directory was created by this call.
    New,
    /// The directory was already there.
    AlreadyExisted,
}

impl Created {
    pub fn is_new(self) -> bool {
        self == Created::New
    }
}

/// Create a single directory level at `path`.
///
/// An existing directory is a success reported as [`Created::AlreadyExisted`].
pub fn make_directory(path: impl AsRef<Path>) -> Result<Created> {
    make_directory_with(&HostPaths::default(), path)
}

/// [`make_directory`] with an explicit platform.
pub fn make_directory_with<P: PlatformPaths>(
    platform: &P,
    path: impl AsRef<Path>,
) -> Result<Created> {
    let path = path.as_ref();

    match platform.create_dir(path) {
        Ok(()) => Ok(Created::New),
        // Also covers roots and a concurrent creator winning the race
        Err(_) if path_is_directory(path) => Ok(Created::AlreadyExisted),
        Err(cause) => Err(Error::Create {
            path: path.to_path_buf(),
            kind: platform.classify(&cause),
            cause,
        }),
    }
}
