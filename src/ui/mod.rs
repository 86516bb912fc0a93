//! Terminal output for the `mapprep` binary
//!
//! - `primitives` / `blocks` / `widgets` - icons, colored text, headers, panels
//! - `views` - rendering of a prepare run and the console event sink
//! - `error` - error blocks, NDJSON errors and CI annotations

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
