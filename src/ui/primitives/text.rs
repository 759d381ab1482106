use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme::Tone;

/// A string with an optional tone and weight, rendered only when color is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Option<Tone>,
    bold: bool,
}

impl ColoredText {
    fn toned(text: impl Into<String>, tone: Option<Tone>) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::toned(text, None)
    }

    pub fn with_tone(text: impl Into<String>, tone: Tone) -> Self {
        Self::toned(text, Some(tone))
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_tone(text, Tone::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(tone) = self.tone {
            styled = styled.with(tone.color());
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_means_no_escapes() {
        assert_eq!(ColoredText::success("ok").bold().render(false), "ok");
        assert_eq!(ColoredText::plain("x").render(false), "x");
    }

    #[test]
    fn toned_text_gets_escapes() {
        assert!(ColoredText::error("no").render(true).contains("\u{1b}["));
        assert!(ColoredText::plain("x").bold().render(true).contains("\u{1b}["));
    }

    #[test]
    fn display_is_the_raw_text() {
        assert_eq!(ColoredText::warning("careful").to_string(), "careful");
    }
}
