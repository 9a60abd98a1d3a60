//! Spinner-backed status line for long-running stages.
//!
//! Animated terminals get a live spinner redrawn in place. Everywhere else
//! only the final success/failure lines are printed, one per stage.

use std::io::{self, Write};

use skyhook::application::ProgressSink;
use skyhook::domain::ProgressEvent;

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveLine;
use crate::ui::widgets::spinner::Spinner;

pub struct Activity<W: Write> {
    out: W,
    color: bool,
    unicode: bool,
    animation: bool,
    spinner: Option<Spinner>,
    line: LiveLine,
}

impl Activity<io::Stdout> {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::new(io::stdout(), ui)
    }
}

impl<W: Write> Activity<W> {
    pub fn new(out: W, ui: &UiContext) -> Self {
        Self {
            out,
            color: ui.color,
            unicode: ui.unicode,
            animation: ui.animation,
            spinner: None,
            line: LiveLine::new(ui.caps.width),
        }
    }

    pub fn start(&mut self, message: impl Into<String>) {
        self.spinner = Some(Spinner::new(message));
        self.redraw();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        if let Some(spinner) = &mut self.spinner {
            spinner.set_message(message);
        }
        self.redraw();
    }

    pub fn tick(&mut self) {
        let due = self.spinner.as_mut().is_some_and(Spinner::tick_if_due);
        if due {
            self.redraw();
        }
    }

    pub fn succeed(&mut self, message: &str) {
        let line = Spinner::new("").succeed(message, self.color, self.unicode);
        self.finish(&line);
    }

    pub fn fail(&mut self, message: &str) {
        let line = Spinner::new("").fail(message, self.color, self.unicode);
        self.finish(&line);
    }

    pub fn warn(&mut self, message: &str) {
        let line = Spinner::new("").warn(message, self.color, self.unicode);
        self.finish(&line);
    }

    /// Print a line above the spinner.
    pub fn println(&mut self, text: &str) {
        if self.animation && self.spinner.is_some() {
            let _ = self.line.finish(&mut self.out, text);
            self.redraw();
        } else {
            let _ = writeln!(self.out, "{}", text);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn finish(&mut self, line: &str) {
        self.spinner = None;
        if self.animation {
            let _ = self.line.finish(&mut self.out, line);
        } else {
            let _ = writeln!(self.out, "{}", line);
        }
    }

    fn redraw(&mut self) {
        if !self.animation {
            return;
        }
        if let Some(spinner) = &self.spinner {
            let _ = self.line.draw(&mut self.out, &spinner.render(self.unicode));
        }
    }
}

impl<W: Write> ProgressSink for Activity<W> {
    fn on_event(&mut self, event: &ProgressEvent) {
        match event {
            ProgressEvent::UploadStarted(line) => self.set_message(line.as_str()),
            ProgressEvent::FileSyncing(path) if path.is_empty() => self.set_message("Syncing..."),
            ProgressEvent::FileSyncing(path) => self.set_message(format!("Syncing: {}...", path)),
            ProgressEvent::Ignored | ProgressEvent::Unrecognized => self.tick(),
        }
    }

    fn on_idle(&mut self) {
        self.tick();
    }
}
