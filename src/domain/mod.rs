//! Domain Layer
//!
//! Pure rules for preparing map assets, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - ImageAsset, DescriptionFile, CompiledArtifact
//! - `value_objects/` - MapName, AspectRatio, CropRect, ScreenshotName
//! - `services/` - Crop geometry, name reconciliation, discovery rules
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
