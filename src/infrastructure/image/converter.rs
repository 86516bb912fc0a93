//! Center-crop and PNG re-encode

use std::path::Path;

use image::{GenericImageView, ImageFormat, ImageReader};

use crate::domain::ports::{Conversion, ConvertError, ImageConverter};
use crate::domain::services::crop_rect;
use crate::domain::value_objects::AspectRatio;

/// Decodes any supported format, crops the center to the target ratio and
/// writes a PNG.
///
/// The format is detected from file content, so a mislabeled extension
/// still decodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCropConverter;

impl PngCropConverter {
    pub fn new() -> Self {
        Self
    }
}

impl ImageConverter for PngCropConverter {
    fn convert(
        &self,
        source: &Path,
        dest: &Path,
        ratio: AspectRatio,
    ) -> Result<Conversion, ConvertError> {
        let img = ImageReader::open(source)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| ConvertError::Decode(e.to_string()))?
            .decode()
            .map_err(|e| ConvertError::Decode(e.to_string()))?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ConvertError::Empty);
        }

        let rect = crop_rect(width, height, ratio);
        let cropped = if rect.is_full(width, height) {
            img
        } else {
            img.crop_imm(rect.x, rect.y, rect.width, rect.height)
        };

        cropped
            .save_with_format(dest, ImageFormat::Png)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;

        Ok(Conversion {
            original: (width, height),
            cropped: cropped.dimensions(),
        })
    }
}
