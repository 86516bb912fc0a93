//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and home directory resolution
//! - `image/` - Decode, crop and PNG encode
//! - `compiler/` - The external resource compiler
//! - `locator/` - Installation discovery (configured path, Steam)
//! - `events/` - NDJSON event output

pub mod compiler;
pub mod events;
pub mod fs;
pub mod image;
pub mod locator;

// Re-export for convenience
pub use compiler::ResourceCompiler;
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use image::PngCropConverter;
pub use locator::{ChainLocator, ConfiguredLocator, SteamLocator};
