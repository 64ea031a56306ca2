use crate::common::TestTree;
use dirprobe::{path_exists, path_is_directory, path_is_file};

#[test]
fn test_missing_path_is_nothing() {
    let tree = TestTree::new();
    let missing = tree.path("missing/deeper");

    assert!(!path_exists(&missing));
    assert!(!path_is_directory(&missing));
    assert!(!path_is_file(&missing));
}

#[test]
fn test_directory_is_not_a_file() {
    let tree = TestTree::new();
    let dir = tree.create_dir("dir");

    assert!(path_exists(&dir));
    assert!(path_is_directory(&dir));
    assert!(!path_is_file(&dir));
}

#[test]
fn test_file_is_not_a_directory() {
    let tree = TestTree::new();
    let file = tree.create_file("dir/file.txt", "hello");

    assert!(path_exists(&file));
    assert!(path_is_file(&file));
    assert!(!path_is_directory(&file));
}

#[test]
fn test_accepts_str_and_string() {
    let tree = TestTree::new();
    let dir = tree.create_dir("dir");
    let as_string = dir.to_string_lossy().into_owned();

    assert!(path_is_directory(as_string.as_str()));
    assert!(path_is_directory(as_string));
}
