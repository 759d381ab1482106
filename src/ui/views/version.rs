use zodiac::domain::services::{matrix::SCORE_TIERS, narrative::AUTHORED_NARRATIVES};
use zodiac::{MAX_YEAR, MIN_YEAR};

use crate::ui::context::UiContext;
use crate::ui::theme::Tone;
use crate::ui::widgets::r#box::Box;

pub fn render_version(version: &str, ui: &UiContext) -> String {
    let tiers: Vec<String> = SCORE_TIERS.iter().map(u8::to_string).collect();

    let mut b = Box::with_title(format!("Zodiac v{}", version)).tone(Tone::Info);
    b.add_empty();
    b.add_row("Years", format!("{}-{}", MIN_YEAR, MAX_YEAR), 10);
    b.add_row("Matrix", format!("12x12, tiers {}", tiers.join("/")), 10);
    b.add_row("Narratives", AUTHORED_NARRATIVES.len().to_string(), 10);
    b.add_row("Locale", ui.locale.to_string(), 10);
    b.render(ui.color, ui.unicode)
}
