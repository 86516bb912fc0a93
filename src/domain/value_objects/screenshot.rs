//! Screenshot naming
//!
//! The 1-based sequence number is the only key that ties a source image to
//! its description file and, after compiling, to its compiled artifacts.

use super::MapName;

/// Name parts of the `n`-th loading screen of a map
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenshotName {
    map: MapName,
    index: usize,
}

impl ScreenshotName {
    /// `index` is 1-based.
    pub fn new(map: MapName, index: usize) -> Self {
        debug_assert!(index >= 1, "screenshot indices start at 1");
        Self { map, index }
    }

    pub fn map(&self) -> &MapName {
        &self.map
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `{map}_{n}_png`
    pub fn stem(&self) -> String {
        format!("{}_{}_png", self.map, self.index)
    }

    /// `{map}_{n}_png.png`
    pub fn image_file_name(&self) -> String {
        format!("{}.png", self.stem())
    }

    /// `{map}_{n}_png.vmat`
    pub fn description_file_name(&self) -> String {
        format!("{}.vmat", self.stem())
    }
}

/// Pair every input with its 1-based screenshot name, in the given order.
pub fn number_sequence<T>(map: &MapName, items: Vec<T>) -> Vec<(ScreenshotName, T)> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (ScreenshotName::new(map.clone(), i + 1), item))
        .collect()
}
