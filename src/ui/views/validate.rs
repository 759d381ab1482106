use zodiac::YearValidation;

use super::tr;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_validation(input: &str, validation: &YearValidation, ui: &UiContext) -> String {
    match validation.issue() {
        None => format!(
            "{} {} {}\n",
            Icon::Success.colored(ui.color, ui.unicode),
            input.trim(),
            tr(ui.locale, "는 올바른 연도입니다", "is a valid birth year"),
        ),
        Some(issue) => format!(
            "{} '{}': {}\n",
            Icon::Error.colored(ui.color, ui.unicode),
            input.trim(),
            ColoredText::error(issue.message()).render(ui.color),
        ),
    }
}
