mod mkdir;
mod mkdir_all;
mod prefix;

pub use mkdir::{Created, make_directory, make_directory_with};
pub use mkdir_all::{make_directory_all, make_directory_all_with};
