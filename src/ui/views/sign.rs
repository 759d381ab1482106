use zodiac::presentation::output::sign_headline;
use zodiac::ZodiacInfo;

use super::tr;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Tone;
use crate::ui::widgets::r#box::Box;

pub fn render_sign(info: &ZodiacInfo, ui: &UiContext) -> String {
    let locale = ui.locale;
    let title = ColoredText::info(sign_headline(info, locale))
        .bold()
        .render(ui.color);

    let mut b = Box::with_title(title)
        .tone(Tone::Info)
        .max_width(ui.caps.width);
    b.add_empty();

    let label_width = 12;
    b.add_row(tr(locale, "성격", "Personality"), &info.personality, label_width);
    b.add_row(
        tr(locale, "특징", "Traits"),
        info.characteristics.join(", "),
        label_width,
    );
    b.add_row(
        tr(locale, "행운의 색", "Lucky colors"),
        info.lucky_colors.join(", "),
        label_width,
    );
    let numbers: Vec<String> = info.lucky_numbers.iter().map(u8::to_string).collect();
    b.add_row(
        tr(locale, "행운의 숫자", "Lucky numbers"),
        numbers.join(", "),
        label_width,
    );

    b.render(ui.color, ui.unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::test_support::plain_ui;
    use zodiac::{get_zodiac_info, Locale};

    #[test]
    fn sign_view_lists_metadata() {
        let info = get_zodiac_info(1990).unwrap();
        let rendered = render_sign(&info, &plain_ui(Locale::En));
        assert!(rendered.contains("🐴 Horse (year 1990, Fire)"));
        assert!(rendered.contains("Lucky numbers"));
        assert!(rendered.contains("2, 3, 7"));
    }

    #[test]
    fn sign_view_korean_labels() {
        let info = get_zodiac_info(1996).unwrap();
        let rendered = render_sign(&info, &plain_ui(Locale::Ko));
        assert!(rendered.contains("쥐띠"));
        assert!(rendered.contains("1996년"));
        assert!(rendered.contains("성격"));
    }
}
