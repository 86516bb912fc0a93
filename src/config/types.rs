//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_IMAGE_EXTENSIONS;
use crate::error::PrepResult;

use super::loader::{self, ConfigWarning};

/// Where the game and the addon live
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InstallConfig {
    /// Game installation root; discovered through Steam when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Addon name; defaults to the map name
    #[serde(default)]
    pub addon: Option<String>,

    /// Explicit content root, bypassing `path` and `addon`
    #[serde(default)]
    pub content_root: Option<PathBuf>,

    /// Explicit game root, bypassing `path` and `addon`
    #[serde(default)]
    pub game_root: Option<PathBuf>,
}

/// Resource compiler settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Compile without asking; `None` means ask when interactive
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Compiler binary; defaults to the one inside the installation
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Source image selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImagesConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_IMAGE_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level, ordered from least to most output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PrepResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PrepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, else user config, else defaults; env applied on top.
    pub fn load_layered(source_dir: &Path) -> PrepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(source_dir)
    }

    /// Apply environment variable overrides (MAPPREP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
