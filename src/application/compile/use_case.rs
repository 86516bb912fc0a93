//! Compile Use Case
//!
//! Compiles descriptions one at a time. After each successful compile the
//! artifacts of that asset are renamed to their canonical names. The first
//! compile failure stops the batch: later assets are neither compiled nor
//! reconciled.

use std::path::Path;

use crate::domain::entities::{CompiledArtifact, DescriptionFile};
use crate::domain::ports::{AssetCompiler, FileSystem, FsError, PrepareEvent, PrepareEventSink};
use crate::domain::value_objects::ScreenshotName;

use super::options::CompileOptions;
use super::result::{CompileFailure, CompileResult, RenamedArtifact};

/// Compile use case - compiler invocation plus name reconciliation
pub struct CompileUseCase<FS, AC>
where
    FS: FileSystem,
    AC: AssetCompiler,
{
    fs: FS,
    compiler: AC,
}

impl<FS, AC> CompileUseCase<FS, AC>
where
    FS: FileSystem,
    AC: AssetCompiler,
{
    /// Create a new compile use case
    pub fn new(fs: FS, compiler: AC) -> Self {
        Self { fs, compiler }
    }

    /// Compile and reconcile `descriptions` in order
    pub fn execute(
        &self,
        descriptions: &[&DescriptionFile],
        options: &CompileOptions,
        events: &dyn PrepareEventSink,
    ) -> CompileResult {
        let mut result = CompileResult::new();
        let working_dir = options.layout.content_root();
        let compiled_dir = options.layout.compiled_screenshots_dir();

        events.on_event(PrepareEvent::CompileStarted {
            asset_count: descriptions.len(),
        });

        for (position, description) in descriptions.iter().enumerate() {
            let index = description.name().index();
            let relative = description.compiler_relative_path();

            events.on_event(PrepareEvent::AssetCompiling {
                index,
                relative: relative.clone(),
            });

            if let Err(e) = self.compiler.compile(working_dir, &relative) {
                events.on_event(PrepareEvent::AssetFailed {
                    index,
                    relative: relative.clone(),
                    error: e.to_string(),
                });
                result.aborted = Some(CompileFailure {
                    index,
                    relative,
                    error: e.to_string(),
                });
                result.not_attempted = descriptions.len() - position - 1;
                break;
            }

            events.on_event(PrepareEvent::AssetCompiled {
                index,
                relative: relative.clone(),
            });
            result.compiled.push(relative);

            self.reconcile(description.name(), &compiled_dir, &mut result, events);
        }

        result
    }

    /// Rename the tokenized artifacts of one screenshot
    fn reconcile(
        &self,
        name: &ScreenshotName,
        compiled_dir: &Path,
        result: &mut CompileResult,
        events: &dyn PrepareEventSink,
    ) {
        let mut listing = match self.fs.list_files(compiled_dir) {
            Ok(listing) => listing,
            Err(FsError::NotFound(_)) => return,
            Err(e) => {
                result.errors.push(e.to_string());
                return;
            }
        };

        listing.sort();
        let stem = name.stem();

        for file in &listing {
            let Some(artifact) = CompiledArtifact::for_stem(compiled_dir.join(file), &stem) else {
                continue;
            };

            match self.rename_artifact(&artifact) {
                Ok(replaced) => {
                    events.on_event(PrepareEvent::ArtifactRenamed {
                        from: artifact.path().to_path_buf(),
                        to: artifact.canonical_path().to_path_buf(),
                        replaced,
                    });
                    result.renamed.push(RenamedArtifact {
                        from: artifact.path().to_path_buf(),
                        to: artifact.canonical_path().to_path_buf(),
                        replaced,
                    });
                }
                Err(e) => {
                    events.on_event(PrepareEvent::ArtifactFailed {
                        path: artifact.path().to_path_buf(),
                        error: e.to_string(),
                    });
                    result
                        .errors
                        .push(format!("{}: {}", artifact.path().display(), e));
                }
            }
        }
    }

    /// Last compile wins: an existing canonical file is deleted first.
    fn rename_artifact(&self, artifact: &CompiledArtifact) -> Result<bool, FsError> {
        let replaced = self.fs.exists(artifact.canonical_path());
        if replaced {
            self.fs.remove(artifact.canonical_path())?;
        }
        self.fs.rename(artifact.path(), artifact.canonical_path())?;
        Ok(replaced)
    }
}
