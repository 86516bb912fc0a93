//! External Compiler
//!
//! Implements the AssetCompiler port by running `resourcecompiler` as a
//! subprocess.

mod resource_compiler;

pub use resource_compiler::ResourceCompiler;
