//! CompiledArtifact entity - a compiler output awaiting its canonical name

use std::path::{Path, PathBuf};

use crate::domain::services::reconcile_stem;

/// A compiled file whose name still carries a compiler token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    path: PathBuf,
    canonical: PathBuf,
}

impl CompiledArtifact {
    /// Recognize an artifact of screenshot `stem` from its path; `None` if the
    /// name is not `{stem}_{token}.{ext}`.
    pub fn for_stem(path: impl Into<PathBuf>, stem: &str) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_str()?;
        let canonical_name = reconcile_stem(file_name, stem)?;
        let canonical = path.with_file_name(canonical_name);
        Some(Self { path, canonical })
    }

    /// Current (tokenized) path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path after reconciliation, in the same directory
    pub fn canonical_path(&self) -> &Path {
        &self.canonical
    }
}
