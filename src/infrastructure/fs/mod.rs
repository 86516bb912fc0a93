//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{mapprep_home_dir, MAPPREP_TEST_HOME_VAR};
pub use local::LocalFs;
