use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Scratch directory for filesystem tests
pub struct TestTree {
    temp_dir: TempDir,
}

impl TestTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get the tree root
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of an entry in the tree
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Create a regular file, including its parent directories
    pub fn create_file(&self, relative: &str, content: &str) -> PathBuf {
        let file_path = self.path(relative);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Create a directory, including its parents
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let dir_path = self.path(relative);
        fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    /// Sorted relative paths of every entry below the root
    pub fn snapshot(&self) -> Vec<String> {
        let mut entries: Vec<String> = WalkDir::new(self.root())
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.root())
                    .expect("Entry outside root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        entries.sort();
        entries
    }

    /// Whether directory permissions are enforced for the current user
    ///
    /// Returns false when running as root, which bypasses mode bits.
    #[cfg(unix)]
    pub fn permissions_enforced(&self) -> bool {
        let locked = self.lock_dir("permission-check");
        let enforced = fs::create_dir(locked.join("child")).is_err();
        self.unlock_dir("permission-check");
        fs::remove_dir_all(&locked).expect("Failed to remove permission check directory");
        enforced
    }

    /// Create a directory with mode 0o555 so nothing can be created inside it
    #[cfg(unix)]
    pub fn lock_dir(&self, relative: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir_path = self.create_dir(relative);
        fs::set_permissions(&dir_path, fs::Permissions::from_mode(0o555))
            .expect("Failed to lock directory");
        dir_path
    }

    /// Restore write access to a directory made with [`TestTree::lock_dir`]
    #[cfg(unix)]
    pub fn unlock_dir(&self, relative: &str) {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(self.path(relative), fs::Permissions::from_mode(0o755))
            .expect("Failed to unlock directory");
    }
}
