//! `resourcecompiler` subprocess

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{AssetCompiler, CompileOutput, CompilerError};

/// Runs the game's resource compiler on one description file at a time
#[derive(Debug, Clone)]
pub struct ResourceCompiler {
    binary: PathBuf,
}

impl ResourceCompiler {
    /// A relative `binary` resolves against the current directory, not the
    /// content root the process runs in.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        let binary = binary.into();
        Self {
            binary: std::path::absolute(&binary).unwrap_or(binary),
        }
    }
}

impl AssetCompiler for ResourceCompiler {
    fn compile(&self, working_dir: &Path, relative: &str) -> Result<CompileOutput, CompilerError> {
        if !self.binary.is_file() {
            return Err(CompilerError::NotFound(self.binary.clone()));
        }

        let output = Command::new(&self.binary)
            .arg(relative)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(CompilerError::Spawn)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(CompilerError::Failed {
                code: output.status.code(),
                stdout,
                stderr,
            });
        }

        Ok(CompileOutput { stdout, stderr })
    }
}
