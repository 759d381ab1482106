use anyhow::Result;
use zodiac::audit_tables;

use super::JsonRun;
use crate::ui::context::UiContext;
use crate::ui::views::check::render_check;

/// Exits with status 1 when the audit reports errors
pub fn cmd_check(ui: &UiContext) -> Result<()> {
    let report = audit_tables();

    if ui.json {
        let run = JsonRun::start("check")?;
        run.finish(&report, !report.has_errors())?;
    } else {
        print!("{}", render_check(&report, ui));
    }

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
