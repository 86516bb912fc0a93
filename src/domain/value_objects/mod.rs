//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod aspect_ratio;
mod map_name;
mod screenshot;

pub use aspect_ratio::{AspectRatio, CropRect};
pub use map_name::{MapName, MapNameError};
pub use screenshot::{number_sequence, ScreenshotName};
