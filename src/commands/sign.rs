use anyhow::Result;
use zodiac::{Clock, ReadingService};

use super::JsonRun;
use crate::ui::context::UiContext;
use crate::ui::views::sign::render_sign;

pub fn cmd_sign<C: Clock>(year: i32, ui: &UiContext, service: &ReadingService<C>) -> Result<()> {
    let run = if ui.json { Some(JsonRun::start("sign")?) } else { None };

    let info = service.sign(year)?;

    match run {
        Some(run) => run.finish(&info, true)?,
        None => print!("{}", render_sign(&info, ui)),
    }
    Ok(())
}
