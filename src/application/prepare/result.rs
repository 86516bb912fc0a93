//! Prepare result types

use std::path::PathBuf;

use crate::domain::entities::DescriptionFile;
use crate::domain::ports::Conversion;

/// An image that was cropped and saved
#[derive(Debug, Clone)]
pub struct ConvertedImage {
    pub index: usize,
    pub source: PathBuf,
    pub dest: PathBuf,
    pub conversion: Conversion,
}

/// An image that could not be converted
#[derive(Debug, Clone)]
pub struct ImageFailure {
    pub index: usize,
    pub source: PathBuf,
    pub error: String,
}

/// What happened to the map description text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapInfoOutcome {
    /// A source `.txt` was moved into place
    Moved { from: PathBuf, to: PathBuf },
    /// No source `.txt`; an empty file was created
    Created(PathBuf),
    /// No source `.txt`; the existing destination was kept
    Kept(PathBuf),
}

/// Result of a prepare run
#[derive(Debug, Clone, Default)]
pub struct PrepareResult {
    /// Output directories that had to be created
    pub created_dirs: Vec<PathBuf>,
    /// Images cropped and saved
    pub converted: Vec<ConvertedImage>,
    /// Images skipped because conversion failed
    pub failed: Vec<ImageFailure>,
    /// Description files written, in sequence order
    pub descriptions: Vec<DescriptionFile>,
    /// Destination of the copied icon
    pub icon: Option<PathBuf>,
    /// Map description outcome
    pub map_info: Option<MapInfoOutcome>,
    /// Non-image errors (description, icon, map info)
    pub errors: Vec<String>,
}

impl PrepareResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images found in the source directory
    pub fn image_count(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Descriptions whose screenshot was converted, in sequence order
    pub fn compilable(&self) -> Vec<&DescriptionFile> {
        self.descriptions
            .iter()
            .filter(|d| self.converted.iter().any(|c| c.index == d.name().index()))
            .collect()
    }

    /// Check if every step succeeded
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.errors.is_empty()
    }
}
