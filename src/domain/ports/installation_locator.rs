//! InstallationLocator port - finds the game installation root
//!
//! Platform discovery (Steam libraries, registry) lives behind this trait so
//! the run can fall back to asking the user, and tests can stub it.

use std::path::PathBuf;

/// Returns the game installation root, if one can be determined
pub trait InstallationLocator {
    /// Short label for reporting where the path came from
    fn name(&self) -> &'static str;

    fn locate(&self) -> Option<PathBuf>;
}

impl<L: InstallationLocator + ?Sized> InstallationLocator for Box<L> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn locate(&self) -> Option<PathBuf> {
        (**self).locate()
    }
}
