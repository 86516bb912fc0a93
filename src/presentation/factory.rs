//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::{CompileUseCase, PrepareUseCase};
use crate::infrastructure::{
    ChainLocator, ConfiguredLocator, LocalFs, PngCropConverter, ResourceCompiler, SteamLocator,
};

/// Type alias for the concrete PrepareUseCase with all dependencies
pub type ConcretePrepareUseCase = PrepareUseCase<LocalFs, PngCropConverter>;

/// Type alias for the concrete CompileUseCase with all dependencies
pub type ConcreteCompileUseCase = CompileUseCase<LocalFs, ResourceCompiler>;

/// Create a prepare use case backed by the local disk and the `image` crate
pub fn create_prepare_use_case() -> ConcretePrepareUseCase {
    PrepareUseCase::new(LocalFs::new(), PngCropConverter::new())
}

/// Create a compile use case running the resource compiler at `binary`
pub fn create_compile_use_case(binary: &Path) -> ConcreteCompileUseCase {
    CompileUseCase::new(LocalFs::new(), ResourceCompiler::new(binary))
}

/// Installation lookup: the configured path first, then Steam libraries
pub fn create_locator(configured: Option<PathBuf>) -> ChainLocator {
    ChainLocator::new()
        .with(ConfiguredLocator::new(configured))
        .with(SteamLocator::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn configured_install_path_wins() {
        let dir = tempdir().unwrap();
        let locator = create_locator(Some(dir.path().to_path_buf()));

        let (source, path) = locator.locate_with_source().unwrap();
        assert_eq!(source, "configured");
        assert_eq!(path, dir.path());
    }
}
