//! Compile result types

use std::path::PathBuf;

/// A compiled artifact moved to its canonical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedArtifact {
    pub from: PathBuf,
    pub to: PathBuf,
    /// An older file at the canonical name was deleted first
    pub replaced: bool,
}

/// The compile failure that stopped the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileFailure {
    pub index: usize,
    pub relative: String,
    pub error: String,
}

/// Result of a compile run
#[derive(Debug, Clone, Default)]
pub struct CompileResult {
    /// Assets compiled, as passed to the compiler
    pub compiled: Vec<String>,
    /// Artifacts renamed
    pub renamed: Vec<RenamedArtifact>,
    /// Rename failures (the batch continues)
    pub errors: Vec<String>,
    /// Set when a compile failure stopped the batch
    pub aborted: Option<CompileFailure>,
    /// Assets never attempted because the batch stopped
    pub not_attempted: usize,
}

impl CompileResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if every asset compiled and every artifact was renamed
    pub fn is_success(&self) -> bool {
        self.aborted.is_none() && self.errors.is_empty()
    }
}
