//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the application layer to perform file operations
//! without depending on concrete implementations (local, in-memory).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error that happened on `path`
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for crate::error::PrepError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => crate::error::PrepError::DirectoryNotFound { path },
            FsError::Io(_, io) => crate::error::PrepError::Io(io),
            other => crate::error::PrepError::Io(std::io::Error::other(other.to_string())),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory fakes in tests
pub trait FileSystem {
    /// Names of the regular files directly inside `dir` (not recursive)
    fn list_files(&self, dir: &Path) -> FsResult<Vec<String>>;

    /// Check if file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a file, overwriting the destination
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Move a file, overwriting the destination
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn list_files(&self, dir: &Path) -> FsResult<Vec<String>> {
        (**self).list_files(dir)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).copy(from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).rename(from, to)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }
}
