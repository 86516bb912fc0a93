//! Prepare Use Case
//!
//! Crops screenshots, writes their descriptions, copies the icon and places
//! the map description text. Per-item failures are recorded and the run
//! continues; only failing to read the source or create output directories
//! stops it.

use crate::domain::entities::{DescriptionFile, ImageAsset};
use crate::domain::ports::{FileSystem, ImageConverter, PrepareEvent, PrepareEventSink};
use crate::domain::services::{select_icon, select_images, select_map_info};
use crate::domain::value_objects::number_sequence;
use crate::error::{PrepError, PrepResult};

use super::options::PrepareOptions;
use super::result::{ConvertedImage, ImageFailure, MapInfoOutcome, PrepareResult};

/// Prepare use case - builds addon content from a source directory
pub struct PrepareUseCase<FS, IC>
where
    FS: FileSystem,
    IC: ImageConverter,
{
    fs: FS,
    converter: IC,
}

impl<FS, IC> PrepareUseCase<FS, IC>
where
    FS: FileSystem,
    IC: ImageConverter,
{
    /// Create a new prepare use case
    pub fn new(fs: FS, converter: IC) -> Self {
        Self { fs, converter }
    }

    /// Run the preparation pipeline
    pub fn execute(
        &self,
        options: &PrepareOptions,
        events: &dyn PrepareEventSink,
    ) -> PrepResult<PrepareResult> {
        if !self.fs.exists(&options.source) {
            return Err(PrepError::DirectoryNotFound {
                path: options.source.clone(),
            });
        }

        let listing = self.fs.list_files(&options.source)?;
        let names: Vec<&str> = listing.iter().map(String::as_str).collect();
        let images = select_images(&names, &options.extensions);

        events.on_event(PrepareEvent::Started {
            map: options.map.to_string(),
            source: options.source.clone(),
            image_count: images.len(),
        });

        let mut result = PrepareResult::new();
        self.ensure_output_dirs(options, &mut result, events)?;

        let assets: Vec<ImageAsset> = number_sequence(&options.map, images)
            .into_iter()
            .map(|(name, file)| ImageAsset::new(options.source.join(file), name))
            .collect();

        for asset in &assets {
            self.convert_image(asset, options, &mut result, events);
            self.write_description(asset, options, &mut result, events);
        }

        self.copy_icon(&names, options, &mut result, events);
        self.place_map_info(&names, options, &mut result, events);

        Ok(result)
    }

    fn ensure_output_dirs(
        &self,
        options: &PrepareOptions,
        result: &mut PrepareResult,
        events: &dyn PrepareEventSink,
    ) -> PrepResult<()> {
        for dir in options.layout.output_dirs() {
            if self.fs.exists(&dir) {
                continue;
            }
            self.fs.create_dir_all(&dir)?;
            events.on_event(PrepareEvent::DirectoryCreated { path: dir.clone() });
            result.created_dirs.push(dir);
        }
        Ok(())
    }

    fn convert_image(
        &self,
        asset: &ImageAsset,
        options: &PrepareOptions,
        result: &mut PrepareResult,
        events: &dyn PrepareEventSink,
    ) {
        let dest = options.layout.image_path(asset.name());

        match self.converter.convert(asset.source(), &dest, options.ratio) {
            Ok(conversion) => {
                events.on_event(PrepareEvent::ImageConverted {
                    index: asset.index(),
                    source: asset.source().to_path_buf(),
                    dest: dest.clone(),
                    original: conversion.original,
                    cropped: conversion.cropped,
                });
                result.converted.push(ConvertedImage {
                    index: asset.index(),
                    source: asset.source().to_path_buf(),
                    dest,
                    conversion,
                });
            }
            Err(e) => {
                events.on_event(PrepareEvent::ImageFailed {
                    index: asset.index(),
                    source: asset.source().to_path_buf(),
                    error: e.to_string(),
                });
                result.failed.push(ImageFailure {
                    index: asset.index(),
                    source: asset.source().to_path_buf(),
                    error: e.to_string(),
                });
            }
        }
    }

    /// Written even when the image failed, so numbering stays 1:1.
    fn write_description(
        &self,
        asset: &ImageAsset,
        options: &PrepareOptions,
        result: &mut PrepareResult,
        events: &dyn PrepareEventSink,
    ) {
        let description = DescriptionFile::for_screenshot(asset.name().clone());
        let path = options.layout.description_path(asset.name());

        match self.fs.write(&path, description.content()) {
            Ok(()) => {
                events.on_event(PrepareEvent::DescriptionWritten {
                    index: asset.index(),
                    path,
                });
                result.descriptions.push(description);
            }
            Err(e) => {
                events.on_event(PrepareEvent::DescriptionFailed {
                    index: asset.index(),
                    path: path.clone(),
                    error: e.to_string(),
                });
                result.errors.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    fn copy_icon(
        &self,
        names: &[&str],
        options: &PrepareOptions,
        result: &mut PrepareResult,
        events: &dyn PrepareEventSink,
    ) {
        let Some(icon) = select_icon(names) else {
            events.on_event(PrepareEvent::IconMissing);
            return;
        };

        let source = options.source.join(icon);
        let dest = options.layout.icon_path(&options.map);

        match self.fs.copy(&source, &dest) {
            Ok(()) => {
                events.on_event(PrepareEvent::IconCopied {
                    source,
                    dest: dest.clone(),
                });
                result.icon = Some(dest);
            }
            Err(e) => {
                events.on_event(PrepareEvent::IconFailed {
                    source: source.clone(),
                    error: e.to_string(),
                });
                result.errors.push(format!("copy {}: {}", source.display(), e));
            }
        }
    }

    fn place_map_info(
        &self,
        names: &[&str],
        options: &PrepareOptions,
        result: &mut PrepareResult,
        events: &dyn PrepareEventSink,
    ) {
        let dest = options.layout.map_info_path(&options.map);

        let outcome = match select_map_info(names) {
            Some(file) => {
                let source = options.source.join(file);
                self.fs.rename(&source, &dest).map(|()| MapInfoOutcome::Moved {
                    from: source,
                    to: dest.clone(),
                })
            }
            None if self.fs.exists(&dest) => Ok(MapInfoOutcome::Kept(dest.clone())),
            None => self
                .fs
                .write(&dest, "")
                .map(|()| MapInfoOutcome::Created(dest.clone())),
        };

        match outcome {
            Ok(outcome) => {
                events.on_event(match &outcome {
                    MapInfoOutcome::Moved { from, to } => PrepareEvent::MapInfoMoved {
                        source: from.clone(),
                        dest: to.clone(),
                    },
                    MapInfoOutcome::Created(path) => {
                        PrepareEvent::MapInfoCreated { path: path.clone() }
                    }
                    MapInfoOutcome::Kept(path) => PrepareEvent::MapInfoKept { path: path.clone() },
                });
                result.map_info = Some(outcome);
            }
            Err(e) => {
                events.on_event(PrepareEvent::MapInfoFailed {
                    path: dest.clone(),
                    error: e.to_string(),
                });
                result.errors.push(format!("{}: {}", dest.display(), e));
            }
        }
    }
}
