//! Aspect ratio and crop window value types

use std::fmt;

/// An integer aspect ratio (`num:den`), compared without floating point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    num: u32,
    den: u32,
}

impl AspectRatio {
    /// The loading-screen ratio
    pub const WIDESCREEN: AspectRatio = AspectRatio { num: 16, den: 9 };

    /// Create a ratio; `None` if either side is zero.
    pub fn new(num: u32, den: u32) -> Option<Self> {
        if num == 0 || den == 0 {
            return None;
        }
        Some(Self { num, den })
    }

    pub fn num(&self) -> u32 {
        self.num
    }

    pub fn den(&self) -> u32 {
        self.den
    }

    /// Whether `width / height` is strictly wider than this ratio.
    pub fn is_exceeded_by(&self, width: u32, height: u32) -> bool {
        u64::from(width) * u64::from(self.den) > u64::from(height) * u64::from(self.num)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

/// A pixel window inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// The window covering a whole `width x height` image
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub fn is_full(&self, width: u32, height: u32) -> bool {
        *self == Self::full(width, height)
    }
}
