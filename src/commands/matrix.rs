use anyhow::Result;
use serde::Serialize;
use zodiac::domain::services::matrix;
use zodiac::ZodiacAnimal;

use super::JsonRun;
use crate::ui::context::UiContext;
use crate::ui::views::matrix::render_matrix;

/// Rows are the child's sign, columns the parent's, both in `signs` order
#[derive(Debug, Serialize)]
struct MatrixPayload {
    signs: [ZodiacAnimal; 12],
    scores: Vec<[u8; 12]>,
}

pub fn cmd_matrix(ui: &UiContext) -> Result<()> {
    if ui.json {
        let run = JsonRun::start("matrix")?;
        let payload = MatrixPayload {
            signs: ZodiacAnimal::ALL,
            scores: ZodiacAnimal::ALL.iter().map(|&a| matrix::row(a)).collect(),
        };
        run.finish(&payload, true)?;
        return Ok(());
    }

    print!("{}", render_matrix(ui));
    Ok(())
}
