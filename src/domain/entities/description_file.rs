//! DescriptionFile entity - a generated `.vmat` material
//!
//! The material is a composite-generic shader whose first texture layer is
//! the cropped screenshot. The resource compiler turns it into a `.vmat_c`
//! plus a `.vtex_c` for the referenced texture.

use crate::domain::value_objects::ScreenshotName;

/// Directory of loading-screen images, relative to an addon root.
pub const SCREENSHOTS_REL_DIR: &str = "panorama/images/map_icons/screenshots/1080p";

/// A generated material description for one screenshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionFile {
    name: ScreenshotName,
    content: String,
}

impl DescriptionFile {
    /// Build the description for a screenshot
    pub fn for_screenshot(name: ScreenshotName) -> Self {
        let content = render_description(&name);
        Self { name, content }
    }

    pub fn name(&self) -> &ScreenshotName {
        &self.name
    }

    /// File name (`{map}_{n}_png.vmat`)
    pub fn file_name(&self) -> String {
        self.name.description_file_name()
    }

    /// Path passed to the resource compiler, always `/`-separated
    pub fn compiler_relative_path(&self) -> String {
        format!("{}/{}", SCREENSHOTS_REL_DIR, self.file_name())
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Render the `.vmat` body for a screenshot
pub fn render_description(name: &ScreenshotName) -> String {
    let texture = format!("{}/{}", SCREENSHOTS_REL_DIR, name.image_file_name());

    format!(
        r#"// THIS FILE IS AUTO-GENERATED

Layer0
{{
    shader "csgo_composite_generic.vfx"

    g_flAlphaBlend "0.000"

    //---- Options ----
    TextureA "{texture}"
    TextureB ""


    VariableState
    {{
        "Options"
        {{
        }}
    }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::MapName;

    fn screenshot(index: usize) -> ScreenshotName {
        ScreenshotName::new(MapName::parse("kz_test").unwrap(), index)
    }

    #[test]
    fn content_references_texture_by_index() {
        let file = DescriptionFile::for_screenshot(screenshot(2));
        assert!(file.content().contains(
            "TextureA \"panorama/images/map_icons/screenshots/1080p/kz_test_2_png.png\""
        ));
        assert!(file.content().starts_with("// THIS FILE IS AUTO-GENERATED\n"));
    }

    #[test]
    fn content_has_balanced_braces() {
        let content = render_description(&screenshot(1));
        let open = content.matches('{').count();
        let close = content.matches('}').count();
        assert_eq!(open, 3);
        assert_eq!(open, close);
    }

    #[test]
    fn compiler_path_is_forward_slashed() {
        let file = DescriptionFile::for_screenshot(screenshot(1));
        assert_eq!(file.file_name(), "kz_test_1_png.vmat");
        assert_eq!(
            file.compiler_relative_path(),
            "panorama/images/map_icons/screenshots/1080p/kz_test_1_png.vmat"
        );
    }
}
