/// Terminal hyperlink (OSC 8).
///
/// Renders as a clickable label on terminals that understand OSC 8 and as
/// the bare URL everywhere else, so the link survives copy and paste from
/// plain logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    label: String,
    url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn render(&self, supports_hyperlinks: bool) -> String {
        if !supports_hyperlinks {
            return self.url.clone();
        }
        format!("\u{1b}]8;;{}\u{1b}\\{}\u{1b}]8;;\u{1b}\\", self.url, self.label)
    }
}
