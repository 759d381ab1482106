use zodiac::presentation::output::MatrixTable;
use zodiac::Grade;

use super::tr;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Tone;
use crate::ui::widgets::table::Table;

pub fn render_matrix(ui: &UiContext) -> String {
    let matrix = MatrixTable::build(ui.locale);

    let corner = tr(ui.locale, "자녀＼부모", "child\\parent").to_string();
    let mut table = Table::new(std::iter::once(corner).chain(matrix.header).collect());
    for (label, cells) in matrix.rows {
        table.add_row(std::iter::once(label).chain(cells).collect());
    }

    let color = ui.color;
    let mut out = table.render_with(|_, column, cell| {
        if column == 0 {
            return cell.to_string();
        }
        match cell.parse::<u8>() {
            Ok(score) => {
                ColoredText::with_tone(cell, Tone::for_grade(Grade::from_score(score))).render(color)
            }
            Err(_) => cell.to_string(),
        }
    });

    out.push('\n');
    let legend: Vec<String> = Grade::ALL
        .iter()
        .map(|g| {
            ColoredText::with_tone(g.label(ui.locale), Tone::for_grade(*g)).render(color)
        })
        .collect();
    out.push_str(&legend.join("  "));
    out.push('\n');
    out
}
