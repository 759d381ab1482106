use anyhow::Result;
use serde::Serialize;
use zodiac::{validate_year_input, Clock, YearValidation};

use super::JsonRun;
use crate::ui::context::UiContext;
use crate::ui::views::validate::render_validation;

#[derive(Debug, Serialize)]
struct ValidatePayload<'a> {
    input: &'a str,
    #[serde(flatten)]
    validation: YearValidation,
}

/// Exits with status 1 when the input is invalid
pub fn cmd_validate(input: &str, ui: &UiContext, clock: &impl Clock) -> Result<()> {
    let validation = validate_year_input(input, clock);
    tracing::debug!(input, valid = validation.is_valid(), "validated year input");

    if ui.json {
        let run = JsonRun::start("validate")?;
        run.finish(&ValidatePayload { input, validation }, validation.is_valid())?;
    } else {
        print!("{}", render_validation(input, &validation, ui));
    }

    if !validation.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}
