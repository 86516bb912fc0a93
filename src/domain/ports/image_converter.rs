//! ImageConverter port - decode, crop and re-encode one image

use std::fmt;
use std::path::Path;

use crate::domain::value_objects::AspectRatio;

/// Dimensions before and after a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub original: (u32, u32),
    pub cropped: (u32, u32),
}

/// Conversion failure for a single image
#[derive(Debug)]
pub enum ConvertError {
    /// Source could not be decoded
    Decode(String),
    /// Source decoded to zero pixels
    Empty,
    /// Destination could not be encoded or written
    Encode(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Decode(msg) => write!(f, "cannot decode image: {}", msg),
            ConvertError::Empty => write!(f, "image has no pixels"),
            ConvertError::Encode(msg) => write!(f, "cannot write PNG: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Crops a source image to `ratio` and saves it as PNG at `dest`
pub trait ImageConverter {
    fn convert(
        &self,
        source: &Path,
        dest: &Path,
        ratio: AspectRatio,
    ) -> Result<Conversion, ConvertError>;
}
