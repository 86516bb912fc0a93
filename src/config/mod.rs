//! Configuration module for mapprep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (MAPPREP_*)
//! 3. Project config (`mapprep.toml` in the source directory)
//! 4. User config (`<config dir>/mapprep/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{project_config_path, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, CompilerConfig, Config, ImagesConfig, InstallConfig, OutputConfig, Verbosity,
};
