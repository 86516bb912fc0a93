use std::path::Path;

use mapprep::PrepError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{github_actions_annotation, in_github_actions, AnnotationLevel};

pub fn format_prep_error(err: &PrepError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_prep_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_prep_error_with(err: &PrepError, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err {
        PrepError::InvalidMapName { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Use letters, digits, '_' and '-' only, e.g. --map kz_example"),
        PrepError::InstallationNotFound => ErrorBlock::new(err.to_string()).with_fix(
            "Pass --install-path, set MAPPREP_INSTALL_PATH, or add\n  [install]\n  path = \"...\"\nto mapprep.toml",
        ),
        PrepError::DirectoryNotFound { path } => ErrorBlock::new(err.to_string())
            .at(path)
            .with_fix("Point --source at the folder holding the screenshots"),
        PrepError::InvalidConfig { file, message } => ErrorBlock::new(message.as_str())
            .at(file)
            .with_fix("Fix the TOML and try again."),
        PrepError::CompilerNotFound { path } => ErrorBlock::new(err.to_string())
            .at(path)
            .with_fix("Pass --compiler, set MAPPREP_COMPILER, or rerun with --no-compile"),
        PrepError::CompilerFailed { asset, message } => {
            ErrorBlock::new(format!("resource compiler failed: {}", message)).at(asset)
        }
        other => ErrorBlock::new(other.to_string()),
    };

    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(prep) = err.downcast_ref::<PrepError>() {
        return format_prep_error(prep);
    }

    format!("[ERROR] {}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    if in_github_actions() {
        let file = err
            .downcast_ref::<PrepError>()
            .and_then(error_file)
            .map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                Some("mapprep"),
            )
        );
    }

    eprint!("{}", format_error(err));
}

fn error_file(err: &PrepError) -> Option<&Path> {
    match err {
        PrepError::DirectoryNotFound { path } => Some(path.as_path()),
        PrepError::InvalidConfig { file, .. } => Some(file.as_path()),
        PrepError::CompilerNotFound { path } => Some(path.as_path()),
        PrepError::CompilerFailed { asset, .. } => Some(asset.as_path()),
        _ => None,
    }
}
