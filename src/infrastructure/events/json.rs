//! JSON Event Sink
//!
//! Outputs prepare and compile events as NDJSON, one object per line.

use crate::domain::ports::{PrepareEvent, PrepareEventSink};
use serde_json::{json, Value};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn path(p: &Path) -> String {
    p.display().to_string()
}

fn to_json(event: PrepareEvent) -> Value {
    match event {
        PrepareEvent::Started {
            map,
            source,
            image_count,
        } => json!({
            "event": "start",
            "map": map,
            "source": path(&source),
            "image_count": image_count,
        }),

        PrepareEvent::DirectoryCreated { path: dir } => json!({
            "event": "dir_created",
            "path": path(&dir),
        }),

        PrepareEvent::ImageConverted {
            index,
            source,
            dest,
            original,
            cropped,
        } => json!({
            "event": "image_converted",
            "index": index,
            "source": path(&source),
            "dest": path(&dest),
            "original": [original.0, original.1],
            "cropped": [cropped.0, cropped.1],
        }),

        PrepareEvent::ImageFailed {
            index,
            source,
            error,
        } => json!({
            "event": "image_error",
            "index": index,
            "source": path(&source),
            "error": error,
        }),

        PrepareEvent::DescriptionWritten { index, path: file } => json!({
            "event": "description_written",
            "index": index,
            "path": path(&file),
        }),

        PrepareEvent::DescriptionFailed {
            index,
            path: file,
            error,
        } => json!({
            "event": "description_error",
            "index": index,
            "path": path(&file),
            "error": error,
        }),

        PrepareEvent::IconCopied { source, dest } => json!({
            "event": "icon_copied",
            "source": path(&source),
            "dest": path(&dest),
        }),

        PrepareEvent::IconFailed { source, error } => json!({
            "event": "icon_error",
            "source": path(&source),
            "error": error,
        }),

        PrepareEvent::IconMissing => json!({ "event": "icon_missing" }),

        PrepareEvent::MapInfoMoved { source, dest } => json!({
            "event": "map_info",
            "action": "moved",
            "source": path(&source),
            "path": path(&dest),
        }),

        PrepareEvent::MapInfoCreated { path: file } => json!({
            "event": "map_info",
            "action": "created",
            "path": path(&file),
        }),

        PrepareEvent::MapInfoKept { path: file } => json!({
            "event": "map_info",
            "action": "kept",
            "path": path(&file),
        }),

        PrepareEvent::MapInfoFailed { path: file, error } => json!({
            "event": "map_info_error",
            "path": path(&file),
            "error": error,
        }),

        PrepareEvent::CompileStarted { asset_count } => json!({
            "event": "compile_start",
            "asset_count": asset_count,
        }),

        PrepareEvent::AssetCompiling { index, relative } => json!({
            "event": "compile_item_start",
            "index": index,
            "asset": relative,
        }),

        PrepareEvent::AssetCompiled { index, relative } => json!({
            "event": "compile_item_done",
            "index": index,
            "asset": relative,
        }),

        PrepareEvent::AssetFailed {
            index,
            relative,
            error,
        } => json!({
            "event": "compile_item_error",
            "index": index,
            "asset": relative,
            "error": error,
        }),

        PrepareEvent::ArtifactRenamed { from, to, replaced } => json!({
            "event": "artifact_renamed",
            "from": path(&from),
            "to": path(&to),
            "replaced": replaced,
        }),

        PrepareEvent::ArtifactFailed { path: file, error } => json!({
            "event": "artifact_error",
            "path": path(&file),
            "error": error,
        }),

        PrepareEvent::Completed {
            converted,
            failed,
            compiled,
            renamed,
            errors,
        } => {
            let status = if failed == 0 && errors == 0 {
                "success"
            } else {
                "partial"
            };
            json!({
                "event": "complete",
                "status": status,
                "converted": converted,
                "failed": failed,
                "compiled": compiled,
                "renamed": renamed,
                "errors": errors,
            })
        }
    }
}

impl PrepareEventSink for JsonEventSink {
    fn on_event(&self, event: PrepareEvent) {
        self.write_event(to_json(event));
    }
}
