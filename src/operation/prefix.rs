use crate::platform::PlatformPaths;

use std::path::Path;

/// Byte offsets at which `path` is cut into directory candidates.
///
/// Each offset ends just after a separator found past the platform root; the
/// full length follows when the path does not already end in a separator.
/// Offsets are strictly increasing, so parents always come before children.
pub(crate) fn prefix_ends<'a, P: PlatformPaths>(
    platform: &'a P,
    path: &'a Path,
) -> impl Iterator<Item = usize> + 'a {
    let bytes = path.as_os_str().as_encoded_bytes();
    let len = bytes.len();
    let start = platform.root_len(path).min(len);
    let separators = platform.separators(path);

    let cuts = bytes[start..]
        .iter()
        .enumerate()
        .filter(move |(_, byte)| separators.contains(*byte))
        .map(move |(offset, _)| start + offset + 1);

    let ends_with_separator = len > start && separators.contains(&bytes[len - 1]);
    let leaf = (!ends_with_separator).then_some(len);

    cuts.chain(leaf)
}
