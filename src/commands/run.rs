//! The `mapprep` run: resolve inputs, prepare, optionally compile
//!
//! Every input comes from the first source that has it: CLI flag, then
//! config (which already folds in `MAPPREP_*` variables), then discovery,
//! then an interactive prompt when stdin is a terminal.

use std::path::{Path, PathBuf};

use anyhow::Result;
use mapprep::application::{default_compiler_path, CompileResult};
use mapprep::config::{ConfigWarning, Verbosity};
use mapprep::infrastructure::JsonEventSink;
use mapprep::presentation::{factory, Cli};
use mapprep::{
    CompileOptions, Config, ContentLayout, MapName, PrepError, PrepareEvent, PrepareEventSink,
    PrepareOptions,
};

use super::prompt;
use crate::ui::ci::{github_actions_annotation, in_github_actions, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::theme::PromptTheme;
use crate::ui::views::prepare::{render_config_warning, render_prepare_header, ConsoleEventSink};

/// Run the tool. `Ok(false)` means the run finished but some item failed.
pub fn run(cli: &Cli) -> Result<bool> {
    let (config, warnings) = Config::load_layered(&cli.source)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    let theme = PromptTheme::new(ui.color, ui.unicode);

    report_warnings(&warnings, &ui);

    let map = resolve_map(cli, &ui, &theme)?;
    let (layout, install) = resolve_layout(cli, &config, &map, &ui, &theme)?;
    let compile = decide_compile(cli, &config, &ui, &theme)?;

    if !ui.json && ui.verbosity > Verbosity::Quiet {
        print!(
            "{}",
            render_prepare_header(
                map.as_str(),
                &cli.source,
                &layout,
                compile,
                ui.color,
                ui.unicode
            )
        );
        println!();
    }

    let sink: Box<dyn PrepareEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    };

    let options = PrepareOptions::new(map, cli.source.clone(), layout.clone())
        .with_extensions(config.images.extensions.clone());
    let prepared = factory::create_prepare_use_case().execute(&options, sink.as_ref())?;

    let compiler = compiler_path(cli, &config, install.as_deref(), &layout);
    let descriptions = prepared.compilable();
    let compiled = if compile && !descriptions.is_empty() {
        factory::create_compile_use_case(&compiler).execute(
            &descriptions,
            &CompileOptions::new(layout.clone()),
            sink.as_ref(),
        )
    } else {
        CompileResult::new()
    };

    sink.on_event(PrepareEvent::Completed {
        converted: prepared.converted.len(),
        failed: prepared.failed.len(),
        compiled: compiled.compiled.len(),
        renamed: compiled.renamed.len(),
        errors: prepared.errors.len()
            + compiled.errors.len()
            + usize::from(compiled.aborted.is_some()),
    });

    if let Some(failure) = &compiled.aborted {
        let err = if compiler.is_file() {
            PrepError::CompilerFailed {
                asset: layout.content_root().join(&failure.relative),
                message: failure.error.clone(),
            }
        } else {
            PrepError::CompilerNotFound { path: compiler }
        };
        return Err(err.into());
    }

    Ok(prepared.is_success() && compiled.is_success())
}

fn report_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
        } else {
            if in_github_actions() {
                println!(
                    "{}",
                    github_actions_annotation(
                        AnnotationLevel::Warning,
                        &format!("unknown config key '{}'", warning.key),
                        Some(&warning.file.display().to_string()),
                        Some("mapprep"),
                    )
                );
            }
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
    }
}

fn resolve_map(cli: &Cli, ui: &UiContext, theme: &PromptTheme) -> Result<MapName, PrepError> {
    match &cli.map {
        Some(name) => MapName::parse(name).map_err(|e| PrepError::InvalidMapName {
            name: name.clone(),
            reason: e.to_string(),
        }),
        None if ui.interactive() => prompt::map_name(theme),
        None => Err(PrepError::InvalidMapName {
            name: String::new(),
            reason: "no map name given (pass --map)".to_string(),
        }),
    }
}

/// Explicit roots from flags, else from config when both are set there
fn explicit_roots(cli: &Cli, config: &Config) -> Option<ContentLayout> {
    match (&cli.content_root, &cli.game_root) {
        (Some(content), Some(game)) => Some(ContentLayout::new(content, game)),
        _ => match (&config.install.content_root, &config.install.game_root) {
            (Some(content), Some(game)) => Some(ContentLayout::new(content, game)),
            _ => None,
        },
    }
}

fn addon_name(cli: &Cli, config: &Config, map: &MapName) -> String {
    cli.addon
        .clone()
        .or_else(|| config.install.addon.clone())
        .unwrap_or_else(|| map.to_string())
}

fn resolve_layout(
    cli: &Cli,
    config: &Config,
    map: &MapName,
    ui: &UiContext,
    theme: &PromptTheme,
) -> Result<(ContentLayout, Option<PathBuf>), PrepError> {
    let configured = cli
        .install_path
        .clone()
        .or_else(|| config.install.path.clone());

    if let Some(layout) = explicit_roots(cli, config) {
        return Ok((layout, configured));
    }

    let install = match factory::create_locator(configured).locate_with_source() {
        Some((_, path)) => path,
        None if ui.interactive() => prompt::install_path(theme)?,
        None => return Err(PrepError::InstallationNotFound),
    };

    let layout = ContentLayout::from_install(&install, &addon_name(cli, config, map));
    Ok((layout, Some(install)))
}

fn decide_compile(
    cli: &Cli,
    config: &Config,
    ui: &UiContext,
    theme: &PromptTheme,
) -> Result<bool, PrepError> {
    match cli.compile_choice().or(config.compiler.enabled) {
        Some(choice) => Ok(choice),
        None if ui.interactive() => prompt::confirm_compile(theme),
        None => Ok(false),
    }
}

/// `--compiler`, then config, then the standard location under the install
fn compiler_path(
    cli: &Cli,
    config: &Config,
    install: Option<&Path>,
    layout: &ContentLayout,
) -> PathBuf {
    if let Some(path) = cli.compiler.clone().or_else(|| config.compiler.path.clone()) {
        return path;
    }

    // <install>/content/csgo_addons/<addon>
    let install = install
        .map(Path::to_path_buf)
        .or_else(|| layout.content_root().ancestors().nth(3).map(Path::to_path_buf))
        .unwrap_or_default();
    default_compiler_path(&install)
}
