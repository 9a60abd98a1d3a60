use crossterm::style::{Color, Stylize};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const BANNER: &str = r"   _____ __         __                __
  / ___// /____  __/ /_  ____  ____  / /__
  \__ \/ //_/ / / / __ \/ __ \/ __ \/ //_/
 ___/ / ,< / /_/ / / / / /_/ / /_/ / ,<
/____/_/|_|\__, /_/ /_/\____/\____/_/|_|
          /____/";

const BANNER_WIDTH: u16 = 42;
const TAGLINE: &str = " Cloud Composer DAG Deployment Utility ";

/// Start-of-run banner plus the resolved run parameters.
#[derive(Debug, Clone)]
pub struct IntroHeader {
    items: Vec<(String, String)>,
}

impl IntroHeader {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    /// `width` is the terminal width; the figure is dropped on narrow terminals.
    pub fn render(&self, supports_color: bool, supports_unicode: bool, width: u16) -> String {
        let mut out = String::new();
        if width >= BANNER_WIDTH {
            out.push_str(&ColoredText::info(BANNER).render(supports_color));
            out.push_str("\n\n");
        }

        let tagline = if supports_color {
            format!("{}", TAGLINE.with(Color::Black).on(Color::Cyan))
        } else {
            TAGLINE.trim().to_string()
        };
        out.push_str(&format!(
            "{} {}\n",
            Icon::Cloud.colored(supports_color, supports_unicode),
            tagline
        ));

        for (label, value) in &self.items {
            let label = ColoredText::dim(format!("{}:", label)).render(supports_color);
            out.push_str(&format!("  {} {}\n", label, value));
        }
        out
    }
}

impl Default for IntroHeader {
    fn default() -> Self {
        Self::new()
    }
}
