use std::path::PathBuf;

use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Boxed error with an optional location and a suggested fix
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    location: Option<PathBuf>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            fix: None,
        }
    }

    pub fn at(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::error("ERROR").bold().render(supports_color);
        let mut panel = Panel::with_title(title).style(PanelStyle::Error);

        if let Some(location) = &self.location {
            panel.add_line(location.display().to_string());
        }
        panel.add_empty();
        panel.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(ColoredText::success("FIX:").bold().render(supports_color));
            panel.add_line(fix.clone());
        }

        panel.render(supports_color, supports_unicode)
    }
}
