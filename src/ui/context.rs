use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use skyhook::config::{AnimationMode, ColorMode, OutputConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
    pub hyperlinks: bool,
    pub interactive: bool,
}

impl UiContext {
    pub fn new(verbose: bool, output: &OutputConfig) -> Self {
        Self::from_caps(verbose, output, detect_capabilities())
    }

    pub(crate) fn from_caps(verbose: bool, output: &OutputConfig, caps: TerminalCapabilities) -> Self {
        let color = match output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        let animation = match output.animation {
            AnimationMode::Never => false,
            AnimationMode::Auto => caps.is_tty && !caps.is_ci,
        };

        Self {
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
            animation,
            hyperlinks: color && caps.supports_hyperlinks,
            interactive: caps.is_tty && caps.stdin_is_tty,
        }
    }
}
