//! Per-command renderers. Views build strings; commands print them.

pub mod check;
pub mod compatibility;
pub mod interactive;
pub mod matrix;
pub mod sign;
pub mod validate;
pub mod version;
pub mod warnings;

use zodiac::Locale;

/// Pick the string for the active locale
pub(crate) fn tr(locale: Locale, ko: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::Ko => ko,
        Locale::En => en,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use zodiac::config::Config;
    use zodiac::Locale;

    use crate::ui::context::UiContext;
    use crate::ui::terminal::TerminalCapabilities;

    /// Plain, unicode, 100 columns
    pub fn plain_ui(locale: Locale) -> UiContext {
        let caps = TerminalCapabilities {
            is_tty: false,
            stdin_is_tty: false,
            supports_color: false,
            supports_unicode: true,
            is_ci: false,
            width: 100,
        };
        UiContext::from_caps(false, 0, None, Some(locale), &Config::default(), caps)
    }
}
