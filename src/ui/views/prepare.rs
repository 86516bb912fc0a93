//! Terminal rendering of a prepare run
//!
//! `ConsoleEventSink` turns `PrepareEvent`s into icon lines. Errors are shown
//! at every verbosity, progress at normal, per-file detail only with `-v`.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use mapprep::config::{ConfigWarning, Verbosity};
use mapprep::{ContentLayout, PrepareEvent, PrepareEventSink};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_prepare_header(
    map: &str,
    source: &Path,
    layout: &ContentLayout,
    compile: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Prepare, format!("mapprep {}", map));
    header.add("Source", source.display().to_string());
    header.add("Content", layout.content_root().display().to_string());
    header.add("Game", layout.game_root().display().to_string());
    header.add("Compile", if compile { "yes" } else { "no" });
    header.render(supports_color, supports_unicode)
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let hint = warning
        .suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default();

    format!(
        "{} {} unknown config key '{}'{}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::dim(location).render(supports_color),
        warning.key,
        hint
    )
}

fn render_summary(
    converted: usize,
    failed: usize,
    compiled: usize,
    renamed: usize,
    errors: usize,
    ui: &UiContext,
) -> String {
    let mut summary = if failed == 0 && errors == 0 {
        ResultSummary::success("Prepare Complete")
    } else {
        ResultSummary::partial("Prepare Finished With Errors")
    };

    summary.add_stat("screenshots converted", converted);
    if compiled > 0 || renamed > 0 {
        summary.add_stat("assets compiled", compiled);
        summary.add_stat("artifacts renamed", renamed);
    }

    if failed > 0 {
        summary.add_warning(format!("{} images could not be converted", failed));
    }
    if errors > 0 {
        summary.add_warning(format!("{} errors encountered", errors));
    }
    if converted > 0 && compiled == 0 {
        summary.with_next_step("Run again with --compile to build the loading screens");
    }

    summary.render(ui.color, ui.unicode)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Least verbosity at which an event is shown
fn threshold(event: &PrepareEvent) -> Verbosity {
    match event {
        PrepareEvent::ImageFailed { .. }
        | PrepareEvent::DescriptionFailed { .. }
        | PrepareEvent::AssetFailed { .. }
        | PrepareEvent::ArtifactFailed { .. }
        | PrepareEvent::IconFailed { .. }
        | PrepareEvent::MapInfoFailed { .. }
        | PrepareEvent::IconMissing => Verbosity::Quiet,
        PrepareEvent::DirectoryCreated { .. }
        | PrepareEvent::DescriptionWritten { .. }
        | PrepareEvent::AssetCompiling { .. }
        | PrepareEvent::ArtifactRenamed { .. }
        | PrepareEvent::MapInfoKept { .. } => Verbosity::Verbose,
        _ => Verbosity::Normal,
    }
}

/// Text for one event, or `None` when it is hidden at the current verbosity
pub fn render_event(event: &PrepareEvent, ui: &UiContext) -> Option<String> {
    if ui.verbosity < threshold(event) {
        return None;
    }

    let (color, unicode) = (ui.color, ui.unicode);
    let ok = Icon::Success.colored(color, unicode);
    let fail = Icon::Error.colored(color, unicode);
    let progress = Icon::Progress.colored(color, unicode);
    let detail = format!("  {}", Icon::Arrow.colored(color, unicode));
    let to = if unicode { "→" } else { "->" };

    let line = match event {
        PrepareEvent::Started {
            source,
            image_count,
            ..
        } => format!(
            "{} Found {} images in {}",
            progress,
            image_count,
            source.display()
        ),
        PrepareEvent::DirectoryCreated { path } => {
            format!("{} created {}", detail, path.display())
        }
        PrepareEvent::ImageConverted {
            source,
            dest,
            original,
            cropped,
            ..
        } => format!(
            "{} {} {}x{} {} {} {}x{}",
            ok,
            file_name(source),
            original.0,
            original.1,
            to,
            file_name(dest),
            cropped.0,
            cropped.1
        ),
        PrepareEvent::ImageFailed { source, error, .. } => {
            format!("{} {}: {}", fail, file_name(source), error)
        }
        PrepareEvent::DescriptionWritten { path, .. } => {
            format!("{} {}", detail, file_name(path))
        }
        PrepareEvent::DescriptionFailed { path, error, .. } => {
            format!("{} {}: {}", fail, path.display(), error)
        }
        PrepareEvent::IconCopied { source, dest } => {
            format!("{} Icon {} {} {}", ok, file_name(source), to, file_name(dest))
        }
        PrepareEvent::IconFailed { source, error } => {
            format!("{} Icon {}: {}", fail, file_name(source), error)
        }
        PrepareEvent::IconMissing => format!(
            "{} No .svg icon in the source directory",
            Icon::Warning.colored(color, unicode)
        ),
        PrepareEvent::MapInfoMoved { dest, .. } => {
            format!("{} Map description moved to {}", ok, dest.display())
        }
        PrepareEvent::MapInfoCreated { path } => {
            format!("{} Created empty {}", ok, path.display())
        }
        PrepareEvent::MapInfoKept { path } => {
            format!("{} kept existing {}", detail, path.display())
        }
        PrepareEvent::MapInfoFailed { path, error } => {
            format!("{} Map description {}: {}", fail, path.display(), error)
        }
        PrepareEvent::CompileStarted { asset_count } => format!(
            "{} Compiling {} assets",
            Icon::Compile.colored(color, unicode),
            asset_count
        ),
        PrepareEvent::AssetCompiling { relative, .. } => format!("{} {}", detail, relative),
        PrepareEvent::AssetCompiled { relative, .. } => format!("{} Compiled {}", ok, relative),
        PrepareEvent::AssetFailed {
            relative, error, ..
        } => format!("{} {}: {}", fail, relative, error),
        PrepareEvent::ArtifactRenamed { from, to: dest, replaced } => format!(
            "{} {} {} {}{}",
            detail,
            file_name(from),
            to,
            file_name(dest),
            if *replaced { " (replaced)" } else { "" }
        ),
        PrepareEvent::ArtifactFailed { path, error } => {
            format!("{} {}: {}", fail, path.display(), error)
        }
        PrepareEvent::Completed {
            converted,
            failed,
            compiled,
            renamed,
            errors,
        } => {
            let summary = render_summary(*converted, *failed, *compiled, *renamed, *errors, ui);
            return Some(format!("\n{}", summary));
        }
    };

    Some(format!("{}\n", line))
}

/// Event sink printing human-readable progress
pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl PrepareEventSink for ConsoleEventSink {
    fn on_event(&self, event: PrepareEvent) {
        let Some(text) = render_event(&event, &self.ui) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}
