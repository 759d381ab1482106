use anyhow::Result;
use zodiac::{Clock, ReadingService};

use super::JsonRun;
use crate::ui::context::UiContext;
use crate::ui::views::compatibility::render_family;

pub fn cmd_family<C: Clock>(
    child: i32,
    father: i32,
    mother: Option<i32>,
    ui: &UiContext,
    service: &ReadingService<C>,
) -> Result<()> {
    let run = if ui.json { Some(JsonRun::start("family")?) } else { None };

    let reading = service.family(child, father, mother)?;

    match run {
        Some(run) => run.finish(&reading, true)?,
        None => print!("{}", render_family(&reading, ui)),
    }
    Ok(())
}
