//! Aspect-ratio crop geometry
//!
//! Pure arithmetic: given image dimensions, find the centered window that has
//! the target ratio. Images wider than the ratio lose left/right margins,
//! everything else loses top/bottom margins. No resampling happens here.

use crate::domain::value_objects::{AspectRatio, CropRect};

/// Centered crop window with the target ratio.
///
/// Extents are `round(h * num / den)` or `round(w * den / num)` with
/// round-half-to-even, clamped to `1..=original`. Zero-sized input yields a
/// zero-sized window.
pub fn crop_rect(width: u32, height: u32, ratio: AspectRatio) -> CropRect {
    if width == 0 || height == 0 {
        return CropRect::full(width, height);
    }

    if ratio.is_exceeded_by(width, height) {
        let new_width = scaled(height, ratio.num(), ratio.den()).clamp(1, width);
        CropRect {
            x: (width - new_width) / 2,
            y: 0,
            width: new_width,
            height,
        }
    } else {
        let new_height = scaled(width, ratio.den(), ratio.num()).clamp(1, height);
        CropRect {
            x: 0,
            y: (height - new_height) / 2,
            width,
            height: new_height,
        }
    }
}

/// `round(value * mul / div)` with ties to even, in integers.
fn scaled(value: u32, mul: u32, div: u32) -> u32 {
    let n = u64::from(value) * u64::from(mul);
    let d = u64::from(div);
    let (q, r) = (n / d, n % d);

    let rounded = match (2 * r).cmp(&d) {
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => q + (q & 1),
        std::cmp::Ordering::Less => q,
    };

    u32::try_from(rounded).unwrap_or(u32::MAX)
}
