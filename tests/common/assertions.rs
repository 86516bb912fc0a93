//! Custom assertion macros for scenario and CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a file exists, listing what does exist under `$root` otherwise.
///
/// # Example
/// ```ignore
/// assert_exists!(env.game_root(), env.game_path("maps/kz_test.txt"));
/// ```
#[macro_export]
macro_rules! assert_exists {
    ($root:expr, $path:expr) => {
        let owned = $path;
        let path: &std::path::Path = owned.as_ref();
        assert!(
            path.exists(),
            "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
            path.display(),
            $crate::common::list_all_files(&$root).join("\n  ")
        );
    };
}

/// Assert that command output contains a substring
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}
