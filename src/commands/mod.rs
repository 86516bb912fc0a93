//! Command implementations for the `mapprep` binary

mod prompt;
pub mod run;

pub use run::run;
