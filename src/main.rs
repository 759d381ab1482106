//! Zodiac CLI - zodiac signs and parent-child compatibility
//!
//! Usage: zodiac [OPTIONS] [COMMAND]
//!
//! Commands:
//!   sign      Show the sign for a birth year
//!   match     Score a child's sign against a parent's sign
//!   family    Score a child against both parents
//!   matrix    Print the full compatibility matrix
//!   validate  Validate free-text year input
//!   check     Audit the built-in tables

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use zodiac::config::{Config, LoadedConfig, Verbosity};
use zodiac::presentation::{Cli, Commands};
use zodiac::{ReadingService, SystemClock, ZodiacError, MAX_YEAR, MIN_YEAR};

use commands::command_name;
use ui::context::UiContext;
use ui::json::emit_event;
use ui::json::events::ErrorEvent;
use ui::views::warnings::render_config_warnings;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        report_error(&cli, &err);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,zodiac=debug",
        _ => "warn,zodiac=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let LoadedConfig {
        config,
        source,
        warnings,
    } = Config::discover(&cwd)?;
    tracing::debug!(source = ?source, "configuration loaded");

    let verbose = cli.verbose.max(config.output.verbosity.as_verbose_count());
    let ui = UiContext::new(cli.json, verbose, cli.color, cli.locale, &config);

    if config.output.verbosity != Verbosity::Quiet && !cli.json {
        eprint!("{}", render_config_warnings(&warnings, &ui));
    }

    let service = ReadingService::new(SystemClock);

    match &cli.command {
        Some(Commands::Sign { year }) => commands::sign::cmd_sign(*year, &ui, &service),
        Some(Commands::Match { child, parent }) => {
            commands::pair::cmd_match(*child, *parent, &ui, &service)
        }
        Some(Commands::Family {
            child,
            father,
            mother,
        }) => commands::family::cmd_family(*child, *father, *mother, &ui, &service),
        Some(Commands::Matrix) => commands::matrix::cmd_matrix(&ui),
        Some(Commands::Validate { input }) => {
            commands::validate::cmd_validate(input, &ui, &SystemClock)
        }
        Some(Commands::Check) => commands::check::cmd_check(&ui),
        Some(Commands::Version) => commands::version::cmd_version(&ui),
        None => commands::interactive::cmd_interactive(&ui, &service),
    }
}

fn report_error(cli: &Cli, err: &anyhow::Error) {
    let zodiac_err = err.downcast_ref::<ZodiacError>();

    if cli.json {
        let code = zodiac_err.map_or("internal", ZodiacError::code);
        let mut event = ErrorEvent::new(command_name(cli.command.as_ref()), code, err.to_string());
        if let Some(help) = zodiac_err.and_then(help_for) {
            event = event.with_help(help);
        }
        // stdout is gone if this fails; nothing left to report to
        let _ = emit_event(&event);
        return;
    }

    eprintln!("Error: {err}");
    if let Some(help) = zodiac_err.and_then(help_for) {
        eprintln!("  {help}");
    }
}

fn help_for(err: &ZodiacError) -> Option<String> {
    match err {
        ZodiacError::InvalidYear { .. } | ZodiacError::YearOutOfRange { .. } => Some(format!(
            "Years must be between {} and the current year (at most {})",
            MIN_YEAR, MAX_YEAR
        )),
        ZodiacError::InvalidConfig { .. } => {
            Some("Fix or remove the config file, then run the command again".to_string())
        }
        ZodiacError::Io(_) => None,
    }
}
