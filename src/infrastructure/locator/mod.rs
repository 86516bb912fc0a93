//! Installation Locators
//!
//! Implementations of the InstallationLocator port:
//!
//! - `ConfiguredLocator` - a path from flags, env or config
//! - `SteamLocator` - Steam roots and their library folders
//! - `ChainLocator` - first hit wins

mod chain;
mod configured;
mod steam;
pub mod vdf;

pub use chain::ChainLocator;
pub use configured::ConfiguredLocator;
pub use steam::{SteamLocator, GAME_DIR_NAME};
pub use vdf::parse_library_folders;
