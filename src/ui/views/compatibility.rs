use zodiac::presentation::output::{pair_line, score_badge, sign_headline};
use zodiac::{CompatibilityResult, FamilyReading, NarrativeSource, PairReading};

use super::tr;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Tone;
use crate::ui::widgets::r#box::Box;

pub fn render_result(result: &CompatibilityResult, ui: &UiContext) -> String {
    let locale = ui.locale;
    let arrow = Icon::Arrow.render(ui.unicode);
    let title = ColoredText::plain(pair_line(result, locale, arrow))
        .bold()
        .render(ui.color);

    let mut b = Box::with_title(title)
        .tone(Tone::for_grade(result.grade))
        .max_width(ui.caps.width);

    let badge = ColoredText::with_tone(
        score_badge(result, locale),
        Tone::for_grade(result.grade),
    )
    .bold()
    .render(ui.color);
    b.add_line(badge);
    b.add_line(ColoredText::dim(result.grade.description()).render(ui.color));
    b.add_empty();
    b.add_line(result.summary.as_str());
    b.add_line(result.description.as_str());

    let sections = [
        (tr(locale, "장점", "Strengths"), Icon::Strength, &result.positive_aspects),
        (tr(locale, "주의할 점", "Challenges"), Icon::Challenge, &result.challenges),
        (tr(locale, "조언", "Advice"), Icon::Advice, &result.advice),
    ];
    for (heading, icon, items) in sections {
        b.add_empty();
        b.add_line(ColoredText::plain(heading).bold().render(ui.color));
        for item in items.iter() {
            b.add_line(format!("  {} {}", icon.colored(ui.color, ui.unicode), item));
        }
    }

    if ui.verbose > 0 {
        let source = match result.narrative_source {
            NarrativeSource::Authored => "authored",
            NarrativeSource::Synthesized => "synthesized",
        };
        b.add_empty();
        b.add_line(ColoredText::dim(format!("narrative: {}", source)).render(ui.color));
    }

    b.render(ui.color, ui.unicode)
}

pub fn render_pair(reading: &PairReading, ui: &UiContext) -> String {
    let mut out = String::new();
    out.push_str(&people_line(
        tr(ui.locale, "자녀", "Child"),
        &sign_headline(&reading.child, ui.locale),
    ));
    out.push_str(&people_line(
        tr(ui.locale, "부모", "Parent"),
        &sign_headline(&reading.parent, ui.locale),
    ));
    out.push('\n');
    out.push_str(&render_result(&reading.result, ui));
    out
}

pub fn render_family(reading: &FamilyReading, ui: &UiContext) -> String {
    let locale = ui.locale;
    let mut out = String::new();
    out.push_str(&people_line(
        tr(locale, "자녀", "Child"),
        &sign_headline(&reading.child, locale),
    ));
    out.push_str(&people_line(
        tr(locale, "아버지", "Father"),
        &sign_headline(&reading.father, locale),
    ));
    if let Some(mother) = &reading.mother {
        out.push_str(&people_line(
            tr(locale, "어머니", "Mother"),
            &sign_headline(mother, locale),
        ));
    }

    for result in &reading.results {
        out.push('\n');
        out.push_str(&render_result(result, ui));
    }

    let shared_sign = reading
        .mother
        .as_ref()
        .is_some_and(|m| m.animal == reading.father.animal);
    if shared_sign {
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            Icon::Info.colored(ui.color, ui.unicode),
            tr(
                locale,
                "부모님의 띠가 같아 결과를 한 번만 표시합니다.",
                "Both parents share a sign, so one result covers both."
            )
        ));
    }
    out
}

fn people_line(label: &str, headline: &str) -> String {
    format!("{}: {}\n", label, headline)
}
