use super::mkdir::{Created, make_directory_with};
use super::prefix::prefix_ends;
use crate::error::{Error, Result};
use crate::platform::{HostPaths, PlatformPaths};

use std::path::Path;

/// Create a directory and every missing parent, outermost first.
///
/// The path is made absolute, then cut after each separator and handed level
/// by level to [`make_directory`](super::make_directory); the full path is the
/// last level even without a trailing separator. The first failure is returned
/// as is and levels created before it are left in place.
///
/// Returns [`Created::New`] if any level was created by this call.
pub fn make_directory_all(path: impl AsRef<Path>) -> Result<Created> {
    make_directory_all_with(&HostPaths::default(), path)
}

/// [`make_directory_all`] with an explicit platform.
pub fn make_directory_all_with<P: PlatformPaths>(
    platform: &P,
    path: impl AsRef<Path>,
) -> Result<Created> {
    let path = path.as_ref();
    let resolved = std::path::absolute(path).map_err(|cause| Error::Resolve {
        path: path.to_path_buf(),
        cause,
    })?;

    let len = platform.path_len(&resolved);
    let max = platform.max_path_len();
    if len > max {
        return Err(Error::PathTooLong {
            path: resolved,
            len,
            max,
        });
    }

    let mut outcome = Created::AlreadyExisted;
    for end in prefix_ends(platform, &resolved) {
        let level = platform
            .prefix(&resolved, end)
            .ok_or_else(|| Error::Unsplittable {
                path: resolved.clone(),
            })?;

        if make_directory_with(platform, level)?.is_new() {
            outcome = Created::New;
        }
    }

    Ok(outcome)
}
