//! Ordered fallback across locators

use std::path::PathBuf;

use crate::domain::ports::InstallationLocator;

/// Tries each locator in order and returns the first hit
#[derive(Default)]
pub struct ChainLocator {
    locators: Vec<Box<dyn InstallationLocator>>,
}

impl ChainLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locator: impl InstallationLocator + 'static) -> Self {
        self.locators.push(Box::new(locator));
        self
    }

    /// Like `locate`, but also reports which locator answered
    pub fn locate_with_source(&self) -> Option<(&'static str, PathBuf)> {
        self.locators
            .iter()
            .find_map(|l| l.locate().map(|path| (l.name(), path)))
    }
}

impl InstallationLocator for ChainLocator {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn locate(&self) -> Option<PathBuf> {
        self.locate_with_source().map(|(_, path)| path)
    }
}
