//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_compiler;
pub mod file_system;
pub mod image_converter;
pub mod installation_locator;
pub mod prepare_events;

pub use asset_compiler::{AssetCompiler, CompileOutput, CompilerError};
pub use file_system::{FileSystem, FsError, FsResult};
pub use image_converter::{Conversion, ConvertError, ImageConverter};
pub use installation_locator::InstallationLocator;
pub use prepare_events::{NoopEventSink, PrepareEvent, PrepareEventSink};
