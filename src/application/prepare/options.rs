//! Prepare options

use std::path::PathBuf;

use crate::application::layout::ContentLayout;
use crate::domain::services::DEFAULT_IMAGE_EXTENSIONS;
use crate::domain::value_objects::{AspectRatio, MapName};

/// Options for the prepare pipeline
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Map identifier embedded in every generated name
    pub map: MapName,
    /// Directory holding the source images, icon and description text
    pub source: PathBuf,
    /// Output roots
    pub layout: ContentLayout,
    /// Target aspect ratio for screenshots
    pub ratio: AspectRatio,
    /// Accepted image extensions (lowercase, no dot)
    pub extensions: Vec<String>,
}

impl PrepareOptions {
    pub fn new(map: MapName, source: impl Into<PathBuf>, layout: ContentLayout) -> Self {
        Self {
            map,
            source: source.into(),
            layout,
            ratio: AspectRatio::WIDESCREEN,
            extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    /// Set accepted image extensions
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        if !extensions.is_empty() {
            self.extensions = extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect();
        }
        self
    }
}
