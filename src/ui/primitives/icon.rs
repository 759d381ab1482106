use crossterm::style::Stylize;

use crate::ui::theme::{self, Tone};

/// Named glyphs; the character set is picked at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Arrow,
    Bullet,
    Strength,
    Challenge,
    Advice,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let g = theme::glyphs(supports_unicode);
        match self {
            Icon::Success => g.success,
            Icon::Error => g.error,
            Icon::Warning => g.warning,
            Icon::Info => g.info,
            Icon::Arrow => g.arrow,
            Icon::Bullet => g.bullet,
            Icon::Strength => g.strength,
            Icon::Challenge => g.challenge,
            Icon::Advice => g.advice,
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Icon::Success | Icon::Strength => Tone::Success,
            Icon::Error | Icon::Challenge => Tone::Error,
            Icon::Warning => Tone::Warning,
            Icon::Info | Icon::Advice => Tone::Info,
            Icon::Arrow | Icon::Bullet => Tone::Dim,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.tone().color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallback() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Arrow.render(false), "->");
        assert_eq!(Icon::Challenge.render(false), "-");
    }

    #[test]
    fn unicode_glyphs() {
        assert_eq!(Icon::Warning.render(true), theme::UNICODE.warning);
        assert_eq!(Icon::Advice.render(true), "»");
    }

    #[test]
    fn uncolored_icon_is_plain() {
        assert_eq!(Icon::Error.colored(false, false), "[FAIL]");
    }

    #[test]
    fn colored_icon_has_escape() {
        assert!(Icon::Strength.colored(true, true).contains('\u{1b}'));
    }
}
