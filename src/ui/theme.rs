//! Colors and glyphs for the zodiac CLI.
//!
//! Every color goes through a `Tone`, and every icon or border glyph comes
//! from one of the two `Glyphs` sets. Nothing else in the UI names a raw
//! color or character.

use crossterm::style::Color;
use zodiac::Grade;

/// The five colors the UI may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    Dim,
}

impl Tone {
    /// Best and Good read as success, Discord as error
    pub fn for_grade(grade: Grade) -> Self {
        match grade {
            Grade::Best | Grade::Good => Tone::Success,
            Grade::Average => Tone::Info,
            Grade::Caution => Tone::Warning,
            Grade::Discord => Tone::Error,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Dim => Color::DarkGrey,
        }
    }
}

/// One complete character set for icons and box borders
#[derive(Debug)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub arrow: &'static str,
    pub bullet: &'static str,
    pub strength: &'static str,
    pub challenge: &'static str,
    pub advice: &'static str,
    /// top-left, top-right, bottom-left, bottom-right
    pub corners: [&'static str; 4],
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

pub const UNICODE: Glyphs = Glyphs {
    success: "✓",
    error: "✗",
    warning: "⚠",
    info: "ℹ",
    arrow: "→",
    bullet: "•",
    strength: "+",
    challenge: "−",
    advice: "»",
    corners: ["╭", "╮", "╰", "╯"],
    horizontal: "─",
    vertical: "│",
};

pub const ASCII: Glyphs = Glyphs {
    success: "[OK]",
    error: "[FAIL]",
    warning: "[WARN]",
    info: "[i]",
    arrow: "->",
    bullet: "-",
    strength: "+",
    challenge: "-",
    advice: ">",
    corners: ["+", "+", "+", "+"],
    horizontal: "-",
    vertical: "|",
};

pub fn glyphs(unicode: bool) -> &'static Glyphs {
    if unicode {
        &UNICODE
    } else {
        &ASCII
    }
}

/// Prompt theme for dialoguer: colorful when colors are on, plain otherwise.
pub fn prompt_theme(color: bool) -> Box<dyn dialoguer::theme::Theme> {
    if color {
        Box::new(dialoguer::theme::ColorfulTheme::default())
    } else {
        Box::new(dialoguer::theme::SimpleTheme)
    }
}
