use std::path::{Path, PathBuf};

/// Name of the application directory under the platform data/config dirs
pub const APP_DIR_NAME: &str = "slate";

/// File name of the persisted recent-files list
pub const RECENT_FILES_NAME: &str = "recent.json";

/// Directory paths for persistent editor state
///
/// Only the top-level `main` function should use `dirs::*` to construct this;
/// all other code should receive it by construction/parameter passing, so tests
/// can point every piece of persistent state at an isolated temp directory.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// Data directory for persistent state (recent files, logs)
    /// e.g., ~/.local/share/slate on Linux, ~/Library/Application Support/slate on macOS
    pub data_dir: PathBuf,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    /// This should ONLY be called from main()
    pub fn from_system() -> std::io::Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine data directory",
                )
            })?
            .join(APP_DIR_NAME);

        Ok(Self { data_dir })
    }

    /// Create a DirectoryContext rooted at an explicit data directory
    /// (the `--data-dir` command line override)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Create a DirectoryContext for testing with a temp directory
    /// All paths point to subdirectories within the provided temp_dir
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            data_dir: temp_dir.join("data"),
        }
    }

    /// Get the recent files list path (default RecentList storage location)
    pub fn recent_files_path(&self) -> PathBuf {
        self.data_dir.join(RECENT_FILES_NAME)
    }

    /// Get the log directory path
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Get the main log file path
    pub fn log_path(&self) -> PathBuf {
        self.logs_dir().join("slate.log")
    }
}
