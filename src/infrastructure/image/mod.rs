//! Image Conversion
//!
//! Implements the ImageConverter port with the `image` crate.

mod converter;

pub use converter::PngCropConverter;
