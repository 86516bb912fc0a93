use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use mapprep::config::{ColorMode, Config, Verbosity};
use mapprep::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        // -v always wins over a quieter config
        let verbosity = if verbose > 0 {
            Verbosity::Verbose
        } else {
            config.output.verbosity
        };

        Self {
            json,
            verbosity,
            caps,
            color,
            unicode,
        }
    }

    /// Prompts are allowed: interactive terminal and not emitting JSON
    pub fn interactive(&self) -> bool {
        !self.json && self.caps.can_prompt()
    }
}
