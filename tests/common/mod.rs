//! Common test utilities for mapprep scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated source, addon and home directories plus a CLI runner
//! - Assertion macros: `assert_exists!`, `assert_output_contains!`
//! - Fixtures: Image writers and small file contents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
