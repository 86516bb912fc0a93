//! Prepare Module
//!
//! Turns the source directory of a map into addon content.
//!
//! ## Structure
//!
//! - `options` - What to prepare and where (`PrepareOptions`)
//! - `result` - What happened per item (`PrepareResult`)
//! - `use_case` - Core use case logic (`PrepareUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use mapprep::application::prepare::{PrepareOptions, PrepareUseCase};
//!
//! let use_case = PrepareUseCase::new(fs, converter);
//! let result = use_case.execute(&PrepareOptions::new(map, source, layout), &sink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::PrepareOptions;
pub use result::{ConvertedImage, ImageFailure, MapInfoOutcome, PrepareResult};
pub use use_case::PrepareUseCase;
