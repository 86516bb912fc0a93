//! ImageAsset entity - a loading-screen source image
//!
//! Discovered in the source directory, numbered by sorted filename order,
//! converted once, then discarded.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ScreenshotName;

/// A source image paired with its destination naming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Absolute path of the source image
    source: PathBuf,
    /// Destination naming (map + 1-based index)
    name: ScreenshotName,
}

impl ImageAsset {
    pub fn new(source: impl Into<PathBuf>, name: ScreenshotName) -> Self {
        Self {
            source: source.into(),
            name,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name of the source, for display
    pub fn source_file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    pub fn name(&self) -> &ScreenshotName {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.name.index()
    }
}
