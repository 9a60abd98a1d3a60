use crossterm::style::Stylize;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::link::Link;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Result box shown after a successful sync.
#[derive(Debug, Clone)]
pub struct DeploySummary {
    folder: String,
    source: String,
    destination: String,
    files_synced: usize,
    console_url: String,
}

impl DeploySummary {
    pub fn new(
        folder: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        files_synced: usize,
        console_url: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            source: source.into(),
            destination: destination.into(),
            files_synced,
            console_url: console_url.into(),
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool, supports_hyperlinks: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Deployment Summary").bold().render(supports_color)
        );

        let files = if self.files_synced == 1 {
            "1 file".to_string()
        } else {
            format!("{} files", self.files_synced)
        };

        let link_label = if supports_color {
            format!("{}", "Open in Cloud Console".cyan().underlined())
        } else {
            "Open in Cloud Console".to_string()
        };
        let link = Link::new(link_label, self.console_url.as_str()).render(supports_hyperlinks);

        let mut b = Box::with_title(title).style(BoxStyle::Success);
        b.add_empty();
        b.add_rows(&[
            ("Source", self.source.clone()),
            ("Destination", self.destination.clone()),
            ("Files Synced", files),
            ("Composer URL", link),
        ]);
        b.add_empty();
        b.add_line(format!(
            "{} is now in sync with git + Cloud Composer.",
            ColoredText::plain(self.folder.as_str()).bold().render(supports_color)
        ));

        b.render(supports_color, supports_unicode)
    }
}
