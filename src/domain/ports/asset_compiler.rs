//! AssetCompiler port - the external resource compiler
//!
//! The application only consumes the completion status and whatever files
//! the compiler leaves behind; the compiler's internals are opaque.

use std::fmt;
use std::path::{Path, PathBuf};

/// Captured output of a successful compile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Compiler failures. Every variant is fatal for the batch.
#[derive(Debug)]
pub enum CompilerError {
    /// The compiler binary does not exist
    NotFound(PathBuf),
    /// The process could not be started
    Spawn(std::io::Error),
    /// The process ran and reported failure
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilerError::NotFound(path) => {
                write!(f, "compiler not found at {}", path.display())
            }
            CompilerError::Spawn(err) => write!(f, "failed to start compiler: {}", err),
            CompilerError::Failed { code, stderr, .. } => {
                match code {
                    Some(code) => write!(f, "compiler exited with code {}", code)?,
                    None => write!(f, "compiler was terminated by a signal")?,
                }
                let detail = stderr.trim();
                if !detail.is_empty() {
                    write!(f, ": {}", detail)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CompilerError {}

/// Compiles one description file.
///
/// `relative` is the asset path relative to `working_dir`, `/`-separated.
pub trait AssetCompiler {
    fn compile(&self, working_dir: &Path, relative: &str) -> Result<CompileOutput, CompilerError>;
}

impl<C: AssetCompiler + ?Sized> AssetCompiler for &C {
    fn compile(&self, working_dir: &Path, relative: &str) -> Result<CompileOutput, CompilerError> {
        (**self).compile(working_dir, relative)
    }
}
