use std::time::{Duration, Instant};

use crate::ui::primitives::icon::Icon;

const SPINNER_FRAMES_DOTS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// Minimum time between frame advances
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
    last_tick: Instant,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
            last_tick: Instant::now(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
        self.last_tick = Instant::now();
    }

    /// Advance only if a frame interval has passed; returns whether it did.
    pub fn tick_if_due(&mut self) -> bool {
        if self.last_tick.elapsed() < FRAME_INTERVAL {
            return false;
        }
        self.tick();
        true
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = frames(supports_unicode);
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }

    pub fn succeed(&self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            message
        )
    }

    pub fn fail(&self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        )
    }

    pub fn warn(&self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            message
        )
    }
}

fn frames(supports_unicode: bool) -> &'static [char] {
    if supports_unicode {
        SPINNER_FRAMES_DOTS
    } else {
        SPINNER_FRAMES_ASCII
    }
}
