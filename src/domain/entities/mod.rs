//! Domain Entities
//!
//! Transient entities derived from one run's file system scans.
//! - `ImageAsset` - A source image with its screenshot number
//! - `DescriptionFile` - A generated `.vmat` material
//! - `CompiledArtifact` - A compiler output with a token in its name

mod compiled_artifact;
mod description_file;
mod image_asset;

pub use compiled_artifact::CompiledArtifact;
pub use description_file::{render_description, DescriptionFile, SCREENSHOTS_REL_DIR};
pub use image_asset::ImageAsset;
