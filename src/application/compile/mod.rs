//! Compile Module
//!
//! Runs the resource compiler over generated descriptions and reconciles
//! the names of the compiled artifacts.
//!
//! ## Structure
//!
//! - `options` - Layout of the addon being compiled (`CompileOptions`)
//! - `result` - Compiled, renamed and aborted items (`CompileResult`)
//! - `use_case` - Core use case logic (`CompileUseCase`)

mod options;
mod result;
mod use_case;

pub use options::CompileOptions;
pub use result::{CompileFailure, CompileResult, RenamedArtifact};
pub use use_case::CompileUseCase;
