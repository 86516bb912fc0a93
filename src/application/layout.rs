//! Addon directory layout
//!
//! Every output path is derived from two roots: the addon's content tree
//! (sources the compiler reads) and its game tree (compiled outputs and
//! loose files the game reads directly).

use std::path::{Path, PathBuf};

use crate::domain::entities::SCREENSHOTS_REL_DIR;
use crate::domain::value_objects::{MapName, ScreenshotName};

const ICON_REL_DIR: &str = "panorama/images/map_icons";
const MAPS_REL_DIR: &str = "maps";

/// Resource compiler location relative to an installation root
pub const COMPILER_REL_PATH: &str = "game/bin/win64/resourcecompiler.exe";

/// Content and game roots of one addon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    content_root: PathBuf,
    game_root: PathBuf,
}

impl ContentLayout {
    pub fn new(content_root: impl Into<PathBuf>, game_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            game_root: game_root.into(),
        }
    }

    /// Standard addon layout under an installation root:
    /// `<install>/content/csgo_addons/<addon>` and `<install>/game/csgo_addons/<addon>`.
    pub fn from_install(install: &Path, addon: &str) -> Self {
        Self {
            content_root: install.join("content").join("csgo_addons").join(addon),
            game_root: install.join("game").join("csgo_addons").join(addon),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    pub fn game_root(&self) -> &Path {
        &self.game_root
    }

    /// Where cropped PNGs and `.vmat` files are written
    pub fn screenshots_dir(&self) -> PathBuf {
        join_rel(&self.content_root, SCREENSHOTS_REL_DIR)
    }

    /// Where the compiler writes compiled screenshots
    pub fn compiled_screenshots_dir(&self) -> PathBuf {
        join_rel(&self.game_root, SCREENSHOTS_REL_DIR)
    }

    pub fn icon_dir(&self) -> PathBuf {
        join_rel(&self.content_root, ICON_REL_DIR)
    }

    pub fn maps_dir(&self) -> PathBuf {
        self.game_root.join(MAPS_REL_DIR)
    }

    pub fn image_path(&self, name: &ScreenshotName) -> PathBuf {
        self.screenshots_dir().join(name.image_file_name())
    }

    pub fn description_path(&self, name: &ScreenshotName) -> PathBuf {
        self.screenshots_dir().join(name.description_file_name())
    }

    /// `map_icon_{map}.svg`
    pub fn icon_path(&self, map: &MapName) -> PathBuf {
        self.icon_dir().join(format!("map_icon_{}.svg", map))
    }

    /// `{map}.txt` in the game maps directory
    pub fn map_info_path(&self, map: &MapName) -> PathBuf {
        self.maps_dir().join(format!("{}.txt", map))
    }

    /// Directories the preparation step writes into
    pub fn output_dirs(&self) -> [PathBuf; 3] {
        [self.screenshots_dir(), self.icon_dir(), self.maps_dir()]
    }
}

/// Default resource compiler path for an installation root
pub fn default_compiler_path(install: &Path) -> PathBuf {
    join_rel(install, COMPILER_REL_PATH)
}

fn join_rel(root: &Path, rel: &str) -> PathBuf {
    rel.split('/').fold(root.to_path_buf(), |acc, seg| acc.join(seg))
}
