//! Prepare Event Port
//!
//! Provides an observable interface for the preparation and compile
//! pipelines. Enables console progress, JSON event streams, and testing.

use std::path::PathBuf;

/// Event emitted while preparing or compiling assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareEvent {
    /// Preparation started
    Started {
        map: String,
        source: PathBuf,
        image_count: usize,
    },

    /// An output directory did not exist and was created
    DirectoryCreated { path: PathBuf },

    /// Image cropped and saved as PNG
    ImageConverted {
        index: usize,
        source: PathBuf,
        dest: PathBuf,
        original: (u32, u32),
        cropped: (u32, u32),
    },

    /// Image conversion failed; the batch continues
    ImageFailed {
        index: usize,
        source: PathBuf,
        error: String,
    },

    /// Description file written
    DescriptionWritten { index: usize, path: PathBuf },

    /// Description file could not be written
    DescriptionFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Icon copied
    IconCopied { source: PathBuf, dest: PathBuf },

    /// Icon could not be copied
    IconFailed { source: PathBuf, error: String },

    /// No `.svg` in the source directory
    IconMissing,

    /// Map description text moved into place
    MapInfoMoved { source: PathBuf, dest: PathBuf },

    /// Empty map description created
    MapInfoCreated { path: PathBuf },

    /// Existing map description left untouched
    MapInfoKept { path: PathBuf },

    /// Map description could not be moved or created
    MapInfoFailed { path: PathBuf, error: String },

    /// Compile batch started
    CompileStarted { asset_count: usize },

    /// Compiling a single asset
    AssetCompiling { index: usize, relative: String },

    /// Asset compiled
    AssetCompiled { index: usize, relative: String },

    /// Asset failed to compile; the batch stops
    AssetFailed {
        index: usize,
        relative: String,
        error: String,
    },

    /// A compiled artifact was renamed to its canonical name
    ArtifactRenamed {
        from: PathBuf,
        to: PathBuf,
        replaced: bool,
    },

    /// Renaming a compiled artifact failed
    ArtifactFailed { path: PathBuf, error: String },

    /// Pipeline completed
    Completed {
        converted: usize,
        failed: usize,
        compiled: usize,
        renamed: usize,
        /// Write, rename and compile errors, excluding image failures
        errors: usize,
    },
}

/// Trait for receiving prepare events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: Silent operation
pub trait PrepareEventSink {
    /// Handle an event
    fn on_event(&self, event: PrepareEvent);
}

impl<S: PrepareEventSink + ?Sized> PrepareEventSink for &S {
    fn on_event(&self, event: PrepareEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PrepareEventSink for NoopEventSink {
    fn on_event(&self, _event: PrepareEvent) {}
}
