//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrepError, PrepResult};
use crate::infrastructure::fs::MAPPREP_TEST_HOME_VAR;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project config file name, looked up in the source directory
pub const PROJECT_CONFIG_FILE: &str = "mapprep.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PrepResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PrepError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `mapprep.toml` next to the source images
pub fn project_config_path(source_dir: &Path) -> PathBuf {
    source_dir.join(PROJECT_CONFIG_FILE)
}

/// `<config dir>/mapprep/config.toml`
///
/// With `MAPPREP_TEST_HOME` set, the config dir is `$MAPPREP_TEST_HOME/.config`.
pub fn user_config_path() -> Option<PathBuf> {
    let base = match std::env::var(MAPPREP_TEST_HOME_VAR) {
        Ok(home) => Some(PathBuf::from(home).join(".config")),
        Err(_) => dirs::config_dir(),
    };
    base.map(|dir| dir.join("mapprep").join("config.toml"))
}

/// The first config file that exists wins; files are not merged.
pub fn load_layered(source_dir: &Path) -> PrepResult<(Config, Vec<ConfigWarning>)> {
    let candidates = std::iter::once(project_config_path(source_dir)).chain(user_config_path());

    for path in candidates {
        if path.is_file() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (MAPPREP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

pub(crate) fn with_env_overrides_from<F, W>(
    mut config: Config,
    get_env: F,
    warnings: &mut W,
) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: std::io::Write,
{
    let non_empty = |name: &str| get_env(name).filter(|v| !v.trim().is_empty());

    // MAPPREP_INSTALL_PATH
    if let Some(path) = non_empty("MAPPREP_INSTALL_PATH") {
        config.install.path = Some(PathBuf::from(path));
    }

    // MAPPREP_ADDON
    if let Some(addon) = non_empty("MAPPREP_ADDON") {
        config.install.addon = Some(addon.trim().to_string());
    }

    // MAPPREP_COMPILER
    if let Some(path) = non_empty("MAPPREP_COMPILER") {
        config.compiler.path = Some(PathBuf::from(path));
    }

    // MAPPREP_VERBOSITY
    if let Some(value) = non_empty("MAPPREP_VERBOSITY") {
        let validator =
            EnvVarValidator::new("MAPPREP_VERBOSITY", &["quiet", "normal", "verbose"]);
        config.output.verbosity = validator.parse_with_writer(
            &value,
            |v| match v.trim().to_lowercase().as_str() {
                "quiet" => Some(Verbosity::Quiet),
                "normal" => Some(Verbosity::Normal),
                "verbose" => Some(Verbosity::Verbose),
                _ => None,
            },
            config.output.verbosity,
            warnings,
        );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "install",
        "path",
        "addon",
        "content_root",
        "game_root",
        "compiler",
        "enabled",
        "images",
        "extensions",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
