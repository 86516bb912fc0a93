//! Property tests for crop geometry.

use proptest::prelude::*;

use mapprep::domain::services::crop_rect;
use mapprep::AspectRatio;

fn ratio() -> impl Strategy<Value = AspectRatio> {
    (1u32..=64, 1u32..=64).prop_map(|(n, d)| AspectRatio::new(n, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The crop window always lies inside the image.
    #[test]
    fn property_crop_within_bounds(
        width in 1u32..=20_000,
        height in 1u32..=20_000,
        ratio in ratio()
    ) {
        let rect = crop_rect(width, height, ratio);

        prop_assert!(rect.width >= 1 && rect.height >= 1);
        prop_assert!(rect.x + rect.width <= width);
        prop_assert!(rect.y + rect.height <= height);
    }

    /// PROPERTY: Only one axis is ever cropped.
    #[test]
    fn property_crop_keeps_one_axis(
        width in 1u32..=20_000,
        height in 1u32..=20_000
    ) {
        let rect = crop_rect(width, height, AspectRatio::WIDESCREEN);

        prop_assert!(rect.width == width || rect.height == height);
        if rect.width < width {
            prop_assert_eq!(rect.y, 0);
        }
        if rect.height < height {
            prop_assert_eq!(rect.x, 0);
        }
    }

    /// PROPERTY: The window is centered to within one pixel.
    #[test]
    fn property_crop_is_centered(
        width in 1u32..=20_000,
        height in 1u32..=20_000
    ) {
        let rect = crop_rect(width, height, AspectRatio::WIDESCREEN);

        let left = rect.x;
        let right = width - rect.x - rect.width;
        let top = rect.y;
        let bottom = height - rect.y - rect.height;
        prop_assert!(left.abs_diff(right) <= 1);
        prop_assert!(top.abs_diff(bottom) <= 1);
    }

    /// PROPERTY: A wide image keeps its height and gets the 16:9 width for it.
    #[test]
    fn property_wide_images_get_widescreen_width(
        height in 9u32..=4_000,
        extra in 1u32..=4_000
    ) {
        // Strictly wider than 16:9
        let width = (height * 16).div_ceil(9) + extra;
        let rect = crop_rect(width, height, AspectRatio::WIDESCREEN);

        prop_assert_eq!(rect.height, height);
        // h * 16 / 9 never lands on .5, so plain rounding is exact
        let expected = (f64::from(height) * 16.0 / 9.0).round() as u32;
        prop_assert_eq!(rect.width, expected);
    }

    /// PROPERTY: A narrow image keeps its width and gets the 16:9 height for it.
    #[test]
    fn property_narrow_images_get_widescreen_height(
        width in 16u32..=4_000,
        extra in 0u32..=4_000
    ) {
        // At least as tall as 16:9
        let height = (width * 9).div_ceil(16) + extra;
        let rect = crop_rect(width, height, AspectRatio::WIDESCREEN);

        prop_assert_eq!(rect.width, width);
        // w * 9 / 16 is exact in f64
        let expected = (f64::from(width) * 9.0 / 16.0).round_ties_even() as u32;
        prop_assert_eq!(rect.height, expected);
    }

    /// PROPERTY: Half-pixel heights round to the even neighbour.
    #[test]
    fn property_half_pixel_heights_round_to_even(
        m in 1u32..=250,
        extra in 0u32..=4_000
    ) {
        // w * 9 / 16 == 9m + 4.5
        let width = 16 * m + 8;
        let height = 9 * m + 5 + extra;
        let rect = crop_rect(width, height, AspectRatio::WIDESCREEN);

        let below = 9 * m + 4;
        let expected = if below % 2 == 0 { below } else { below + 1 };
        prop_assert_eq!(rect.height, expected);
        prop_assert_eq!(rect.width, width);
    }

    /// PROPERTY: Zero-sized input never panics.
    #[test]
    fn property_zero_dimension_never_panics(
        width in 0u32..=2,
        height in 0u32..=2,
        ratio in ratio()
    ) {
        let _ = crop_rect(width, height, ratio);
    }
}
