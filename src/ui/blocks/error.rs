use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// How loudly a failure is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User backed out; nothing went wrong
    Neutral,
    /// The run was refused (git state, configuration)
    Attention,
    /// Something broke
    Failure,
}

#[derive(Debug, Clone)]
pub struct ErrorReport {
    severity: Severity,
    title: String,
    message: Option<String>,
    details: Option<(String, String)>,
    hint: Option<String>,
}

impl ErrorReport {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: None,
            details: None,
            hint: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Verbatim block (captured tool output, debug dump) under a heading
    pub fn with_details(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.details = Some((heading.into(), body.into()));
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let (icon, title) = match self.severity {
            Severity::Neutral => (None, ColoredText::dim(self.title.as_str())),
            Severity::Attention => (Some(Icon::Warning), ColoredText::warning(self.title.as_str()).bold()),
            Severity::Failure => (Some(Icon::Error), ColoredText::error(self.title.as_str()).bold()),
        };
        match icon {
            Some(icon) => out.push_str(&format!(
                "{} {}\n",
                icon.colored(supports_color, supports_unicode),
                title.render(supports_color)
            )),
            None => out.push_str(&format!("{}\n", title.render(supports_color))),
        }

        if let Some(message) = &self.message {
            let styled = match self.severity {
                Severity::Neutral => ColoredText::plain(message.as_str()),
                Severity::Attention => ColoredText::warning(message.as_str()),
                Severity::Failure => ColoredText::error(message.as_str()),
            };
            for line in styled.render(supports_color).lines() {
                out.push_str(&format!("  {}\n", line));
            }
        }

        if let Some((heading, body)) = &self.details {
            out.push('\n');
            out.push_str(&ColoredText::error(heading.as_str()).render(supports_color));
            out.push('\n');
            out.push_str(body.trim_end());
            out.push('\n');
        }

        if let Some(hint) = &self.hint {
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(hint.as_str()).render(supports_color)
            ));
        }

        out
    }
}
