//! Interactive prompts when `zodiac` runs without a subcommand

use anyhow::Result;
use dialoguer::theme::Theme;
use dialoguer::Input;
use zodiac::{Clock, ReadingService, ZodiacError};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::ErrorEvent;
use crate::ui::theme::prompt_theme;
use crate::ui::views::compatibility::render_pair;
use crate::ui::views::interactive::{render_banner, render_no_command_hint};
use crate::ui::views::tr;

/// Exits with status 2 when there is no terminal to prompt on
pub fn cmd_interactive<C: Clock>(ui: &UiContext, service: &ReadingService<C>) -> Result<()> {
    if ui.json {
        emit_event(
            &ErrorEvent::new("interactive", "no_command", "no command provided")
                .with_help("interactive prompts are not available with --json"),
        )?;
        std::process::exit(2);
    }

    if !ui.caps.stdin_is_tty || !ui.caps.is_tty {
        eprintln!("{}", render_no_command_hint());
        std::process::exit(2);
    }

    print!("{}", render_banner(ui));
    let theme = prompt_theme(ui.color);

    let child = prompt_year(
        theme.as_ref(),
        tr(ui.locale, "자녀의 출생 연도", "Child's birth year"),
        service,
    )?;
    let parent = prompt_year(
        theme.as_ref(),
        tr(ui.locale, "부모의 출생 연도", "Parent's birth year"),
        service,
    )?;

    let reading = service.pair(child, parent)?;
    println!();
    print!("{}", render_pair(&reading, ui));
    Ok(())
}

fn prompt_year<C: Clock>(
    theme: &dyn Theme,
    prompt: &str,
    service: &ReadingService<C>,
) -> Result<i32> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            service.parse_year(input).map(|_| ()).map_err(inline_message)
        })
        .interact_text()?;

    Ok(service.parse_year(&input)?)
}

fn inline_message(err: ZodiacError) -> String {
    match err {
        ZodiacError::InvalidYear { issue, .. } => issue.message(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zodiac::FixedClock;

    #[test]
    fn inline_message_uses_issue_text() {
        let service = ReadingService::new(FixedClock::new(2025));
        let err = service.parse_year("2030").unwrap_err();
        assert_eq!(inline_message(err), "future year not allowed");
    }
}
