//! mapprep - loading-screen and icon asset preparation for Source 2 map addons
//!
//! Takes a directory of screenshots, a map icon and a map description, and
//! lays them out inside a CS2 addon: screenshots are cropped to 16:9 and
//! saved as PNG next to generated `.vmat` descriptions, the icon and text are
//! copied into place, and the resource compiler can optionally be run with
//! its outputs renamed to the names the game expects.
//!
//! ## Layers
//!
//! - `domain` - naming, crop geometry and reconciliation rules (no I/O)
//! - `application` - the prepare and compile use cases
//! - `infrastructure` - disk, image codec, Steam discovery, compiler process
//! - `presentation` - CLI definition and use case wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CompileOptions, CompileResult, CompileUseCase, ContentLayout, PrepareOptions, PrepareResult,
    PrepareUseCase,
};
pub use config::{Config, ConfigWarning};
pub use domain::ports::{PrepareEvent, PrepareEventSink};
pub use domain::value_objects::{AspectRatio, MapName};
pub use error::{PrepError, PrepResult};
