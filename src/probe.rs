use std::fs;
use std::path::Path;

/// Check if a path exists. Lookup failures of any kind count as absent.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Check if a path exists and is a directory. Symlinks are followed.
pub fn path_is_directory(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Check if a path exists and is anything other than a directory.
///
/// Device nodes, FIFOs and sockets count as files, so every existing path is
/// exactly one of a directory or a file.
pub fn path_is_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}
