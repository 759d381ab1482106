use super::tr;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Tone;
use crate::ui::widgets::r#box::Box;

pub fn render_banner(ui: &UiContext) -> String {
    let mut b = Box::with_title(
        ColoredText::info(tr(ui.locale, "띠 궁합", "Zodiac compatibility"))
            .bold()
            .render(ui.color),
    )
    .tone(Tone::Info);
    b.add_line(tr(
        ui.locale,
        "자녀와 부모의 출생 연도를 입력하세요.",
        "Enter the child's and the parent's birth years.",
    ));
    b.render(ui.color, ui.unicode)
}

/// Shown when there is no subcommand and nobody to prompt
pub fn render_no_command_hint() -> String {
    [
        "No command provided.",
        "Try: `zodiac sign 1996`, `zodiac match --child 1990 --parent 1985` or `zodiac --help`",
    ]
    .join("\n")
}
