//! Interactive prompts
//!
//! Only called when stdin is a terminal. A cancelled prompt (Ctrl+C, closed
//! stdin) becomes `PrepError::Aborted`.

use std::path::PathBuf;

use dialoguer::{Confirm, Input};
use mapprep::{MapName, PrepError};

use crate::ui::theme::PromptTheme;

pub fn map_name(theme: &PromptTheme) -> Result<MapName, PrepError> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Map name")
        .validate_with(|value: &String| -> Result<(), String> {
            MapName::parse(value).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|_| PrepError::Aborted)?;

    MapName::parse(&input).map_err(|e| PrepError::InvalidMapName {
        name: input.clone(),
        reason: e.to_string(),
    })
}

pub fn install_path(theme: &PromptTheme) -> Result<PathBuf, PrepError> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Game installation not found. Path to Counter-Strike Global Offensive")
        .validate_with(|value: &String| -> Result<(), String> {
            if PathBuf::from(value.trim()).is_dir() {
                Ok(())
            } else {
                Err(format!("'{}' is not a directory", value.trim()))
            }
        })
        .interact_text()
        .map_err(|_| PrepError::Aborted)?;

    Ok(PathBuf::from(input.trim()))
}

pub fn confirm_compile(theme: &PromptTheme) -> Result<bool, PrepError> {
    Confirm::with_theme(theme)
        .with_prompt("Compile the loading screen materials now?")
        .default(true)
        .interact()
        .map_err(|_| PrepError::Aborted)
}
