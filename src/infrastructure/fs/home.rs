//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! `mapprep_home_dir()` checks `MAPPREP_TEST_HOME` first and falls back to
//! `dirs::home_dir()`.
//!
//! Used wherever a functional path hangs off the home directory: the user
//! config file and the Steam roots searched on Linux and macOS.

use std::path::PathBuf;

/// Environment variable that overrides the home directory in tests.
pub const MAPPREP_TEST_HOME_VAR: &str = "MAPPREP_TEST_HOME";

/// Home directory for config and Steam lookups.
///
/// # Example
///
/// ```
/// use mapprep::infrastructure::fs::mapprep_home_dir;
///
/// if let Some(home) = mapprep_home_dir() {
///     let steam = home.join(".steam/steam");
/// }
/// ```
pub fn mapprep_home_dir() -> Option<PathBuf> {
    std::env::var(MAPPREP_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_dir_respects_test_home_env_var() {
        let test_home = "/test/fake/home";

        // SAFETY: only this test touches the variable and it is restored below
        unsafe {
            std::env::set_var(MAPPREP_TEST_HOME_VAR, test_home);
        }

        let result = mapprep_home_dir();

        unsafe {
            std::env::remove_var(MAPPREP_TEST_HOME_VAR);
        }

        assert_eq!(result, Some(PathBuf::from(test_home)));
    }
}
