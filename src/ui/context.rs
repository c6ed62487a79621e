use objview::config::{ColorMode, Config};
use objview::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, cli_ascii: bool, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_color, cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            caps,
            color: color && !json,
            unicode,
        }
    }

    /// The interactive view needs a terminal on both ends, outside CI.
    pub fn interactive(&self) -> bool {
        self.caps.is_tty && !self.caps.is_ci
    }
}
