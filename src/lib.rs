//! Cross-platform path probing and directory creation.
//!
//! ```no_run
//! use dirprobe::{Created, make_directory_all, path_is_directory};
//!
//! # fn main() -> dirprobe::Result<()> {
//! if make_directory_all("cache/thumbnails/large")? == Created::New {
//!     println!("created");
//! }
//! assert!(path_is_directory("cache/thumbnails"));
//! # Ok(())
//! # }
//! ```

mod error;
mod operation;
mod platform;
mod probe;

pub use error::{Error, ErrorKind, Result};
pub use operation::{
    Created, make_directory, make_directory_all, make_directory_all_with, make_directory_with,
};
#[cfg(unix)]
pub use platform::UnixPaths;
#[cfg(windows)]
pub use platform::WindowsPaths;
pub use platform::{HostPaths, PlatformPaths};
pub use probe::{path_exists, path_is_directory, path_is_file};
