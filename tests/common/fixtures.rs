//! Test fixtures - image writers and reusable file contents.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

/// Minimal map icon
pub const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1"></svg>"#;

/// Map description text shown on the loading screen
pub const MAP_INFO: &str = "A short kz map.\nDifficulty: easy\n";

/// Write a gradient image so crops are distinguishable from solid fills
pub fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 64]))
        .save_with_format(path, format)
        .unwrap();
}

/// Dimensions of an image on disk
pub fn image_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

/// Populate `source` with two screenshots, an icon and a map description.
///
/// `a.png` is 2000x1000 (wider than 16:9), `b.jpg` is 1000x1000 (narrower).
pub fn write_standard_source(source: &Path, map: &str) {
    std::fs::create_dir_all(source).unwrap();
    write_image(&source.join("a.png"), 2000, 1000, ImageFormat::Png);
    write_image(&source.join("b.jpg"), 1000, 1000, ImageFormat::Jpeg);
    std::fs::write(source.join("icon.svg"), ICON_SVG).unwrap();
    std::fs::write(source.join(format!("{map}.txt")), MAP_INFO).unwrap();
}
