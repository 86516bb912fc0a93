//! Explicitly configured installation path

use std::path::PathBuf;

use crate::domain::ports::InstallationLocator;

/// Returns the configured path when it exists on disk
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocator {
    path: Option<PathBuf>,
}

impl ConfiguredLocator {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl InstallationLocator for ConfiguredLocator {
    fn name(&self) -> &'static str {
        "configured"
    }

    fn locate(&self) -> Option<PathBuf> {
        self.path.clone().filter(|p| p.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn existing_directory_is_returned() {
        let dir = tempdir().unwrap();
        let locator = ConfiguredLocator::new(Some(dir.path().to_path_buf()));

        assert_eq!(locator.locate(), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn missing_directory_is_none() {
        let dir = tempdir().unwrap();
        let locator = ConfiguredLocator::new(Some(dir.path().join("nope")));

        assert_eq!(locator.locate(), None);
        assert_eq!(ConfiguredLocator::new(None).locate(), None);
    }
}
