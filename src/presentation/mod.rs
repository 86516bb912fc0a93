//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - The `mapprep` command line (`Cli`, `ColorWhen`)
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use mapprep::presentation::factory;
//!
//! let use_case = factory::create_prepare_use_case();
//! let result = use_case.execute(&options, &sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_compile_use_case, create_locator, create_prepare_use_case};
