//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PrepareUseCase` - Crop screenshots, write descriptions, place icon and map info
//! - `CompileUseCase` - Run the resource compiler and reconcile artifact names
//!
//! ## Layout
//!
//! - `ContentLayout` - Where every output lands inside an addon

pub mod compile;
pub mod layout;
pub mod prepare;

pub use compile::{CompileFailure, CompileOptions, CompileResult, CompileUseCase, RenamedArtifact};
pub use layout::{default_compiler_path, ContentLayout, COMPILER_REL_PATH};
pub use prepare::{
    ConvertedImage, ImageFailure, MapInfoOutcome, PrepareOptions, PrepareResult, PrepareUseCase,
};
