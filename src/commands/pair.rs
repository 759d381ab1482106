use anyhow::Result;
use zodiac::{Clock, ReadingService};

use super::JsonRun;
use crate::ui::context::UiContext;
use crate::ui::views::compatibility::render_pair;

pub fn cmd_match<C: Clock>(
    child: i32,
    parent: i32,
    ui: &UiContext,
    service: &ReadingService<C>,
) -> Result<()> {
    let run = if ui.json { Some(JsonRun::start("match")?) } else { None };

    let reading = service.pair(child, parent)?;

    match run {
        Some(run) => run.finish(&reading, true)?,
        None => print!("{}", render_pair(&reading, ui)),
    }
    Ok(())
}
