//! Compile options

use crate::application::layout::ContentLayout;

/// Options for the compile pipeline
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Addon roots; the compiler runs inside the content root
    pub layout: ContentLayout,
}

impl CompileOptions {
    pub fn new(layout: ContentLayout) -> Self {
        Self { layout }
    }
}
