use anyhow::Result;
use serde::Serialize;
use zodiac::domain::services::{matrix::SCORE_TIERS, narrative::AUTHORED_NARRATIVES};
use zodiac::{MAX_YEAR, MIN_YEAR};

use super::JsonRun;
use crate::ui::context::UiContext;
use crate::ui::views::version::render_version;

#[derive(Debug, Serialize)]
struct VersionPayload {
    version: &'static str,
    min_year: i32,
    max_year: i32,
    score_tiers: [u8; 5],
    authored_narratives: usize,
}

pub fn cmd_version(ui: &UiContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if ui.json {
        let run = JsonRun::start("version")?;
        let payload = VersionPayload {
            version,
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
            score_tiers: SCORE_TIERS,
            authored_narratives: AUTHORED_NARRATIVES.len(),
        };
        run.finish(&payload, true)?;
        return Ok(());
    }

    print!("{}", render_version(version, ui));
    Ok(())
}
