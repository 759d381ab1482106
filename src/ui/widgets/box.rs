use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{self, Tone};

#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    max_width: Option<usize>,
    tone: Tone,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Border color
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Wrap long lines so the box fits in `width` terminal columns
    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(usize::from(width).saturating_sub(4).max(20));
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            match self.max_width {
                Some(width) if visible_width(part) > width => {
                    self.content.extend(wrap(part, width));
                }
                _ => self.content.push(part.to_string()),
            }
        }
    }

    /// Label/value line with the label padded to `label_width` columns
    pub fn add_row(&mut self, label: &str, value: impl AsRef<str>, label_width: usize) {
        let pad = label_width.saturating_sub(visible_width(label));
        self.add_line(format!("{}{}  {}", label, " ".repeat(pad), value.as_ref()));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.extend(self.content.iter().cloned());

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let g = theme::glyphs(supports_unicode);
        let [top_left, top_right, bottom_left, bottom_right] = g.corners;
        let edge = |s: &str| {
            if supports_color {
                s.with(self.tone.color()).to_string()
            } else {
                s.to_string()
            }
        };
        let rule = g.horizontal.repeat(inner_width);

        let mut out = edge(&format!("{top_left}{rule}{top_right}"));
        out.push('\n');
        for line in &lines {
            let pad = inner_width.saturating_sub(1 + visible_width(line));
            out.push_str(&format!(
                "{} {}{}{}\n",
                edge(g.vertical),
                line,
                " ".repeat(pad),
                edge(g.vertical)
            ));
        }
        out.push_str(&edge(&format!("{bottom_left}{rule}{bottom_right}")));
        out.push('\n');
        out
    }
}

/// Greedy word wrap by display width; over-long words are split by character
fn wrap(line: &str, width: usize) -> Vec<String> {
    let indent: String = line.chars().take_while(|c| *c == ' ').collect();
    let mut out = Vec::new();
    let mut current = indent.clone();

    for word in line.split_whitespace() {
        let needed = if current.trim().is_empty() {
            current.width() + word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.trim().is_empty() {
            out.push(std::mem::replace(&mut current, indent.clone()));
        }
        if !current.trim().is_empty() {
            current.push(' ');
        }
        for c in word.chars() {
            if current.width() + c.width().unwrap_or(0) > width && !current.trim().is_empty() {
                out.push(std::mem::replace(&mut current, indent.clone()));
            }
            current.push(c);
        }
    }
    if !current.trim().is_empty() {
        out.push(current);
    }
    out
}

pub(crate) fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Drop CSI sequences (`ESC [ ... final`), which is all crossterm emits
fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (false, c) => plain.push(c),
            (true, c) if c.is_ascii_alphabetic() => in_escape = false,
            (true, _) => {}
        }
    }
    Cow::Owned(plain)
}
