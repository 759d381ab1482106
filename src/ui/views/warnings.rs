use zodiac::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Unknown-key warnings, one block per key
pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut out = String::new();
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!(
                "Unknown config key '{}' in {}",
                warning.key, location
            ))
            .render(ui.color)
        ));
        if let Some(suggestion) = &warning.suggestion {
            out.push_str(&format!(
                "  {} did you mean '{}'?\n",
                Icon::Bullet.render(ui.unicode),
                suggestion
            ));
        }
    }
    out
}
