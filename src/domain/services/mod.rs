//! Domain Services
//!
//! Stateless rules with no I/O: crop geometry, compiled-name reconciliation
//! and source directory selection.

mod cropper;
mod discovery;
mod reconciler;

pub use cropper::crop_rect;
pub use discovery::{select_icon, select_images, select_map_info, DEFAULT_IMAGE_EXTENSIONS};
pub use reconciler::{reconcile_name, reconcile_stem, INFIX_MARKER};
