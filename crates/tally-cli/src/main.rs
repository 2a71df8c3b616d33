//! Tally CLI - small console record keepers and calculators
//!
//! Each subcommand runs one interactive program against stdin/stdout. Domain
//! failures are printed inside the session; only terminal I/O and config
//! errors end the process with a non-zero status.

mod app;
mod cli;
mod commands;
mod config;
mod console;
mod logging;
mod ui;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use tally_core::domain::text_stats::SAMPLE_TEXT;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::console::Console;
use crate::ui::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let app = AppContext::new(&cli);

    match run(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let ctx = UiContext::from_env(cli.format.as_deref(), cli.no_color, cli.ascii);
            eprintln!("{}", ui::error_message(&ctx, &format!("{:#}", err), None));
            ExitCode::FAILURE
        }
    }
}

fn run(app: &AppContext) -> anyhow::Result<()> {
    let config = app.config()?;
    logging::init(config.log.level.as_deref());

    let cli = app.cli();
    if let Commands::Completions { shell } = &cli.command {
        return commands::misc::handle_completions(*shell, &mut io::stdout());
    }

    let ui = app.ui()?;
    debug!(mode = ?ui.mode, color = ui.color, "ui resolved");
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), ui).quiet(app.quiet());
    let heading = ui::header(console.ui(), cli.command.name(), None);
    console.banner(&heading)?;

    match &cli.command {
        Commands::Contacts { empty } => {
            let dir = app.export_dir()?;
            commands::contacts::run(&mut console, &dir, *empty)?;
        }
        Commands::Library => commands::library::run(&mut console)?,
        Commands::Notes => {
            let dir = app.export_dir()?;
            commands::notes::run(&mut console, &dir)?;
        }
        Commands::Tasks => commands::tasks::run(&mut console)?,
        Commands::Bmi => commands::bmi::run(&mut console)?,
        Commands::Temperature => commands::temperature::run(&mut console)?,
        Commands::Guess { secret } => match secret {
            Some(secret) => commands::guess::run(&mut console, || Ok(*secret))?,
            None => commands::guess::run(&mut console, commands::guess::random_secret)?,
        },
        Commands::Text { file } => {
            let dir = app.export_dir()?;
            let text = match file {
                Some(path) => std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?,
                None => SAMPLE_TEXT.to_string(),
            };
            commands::text::run(&mut console, &dir, &text)?;
        }
        Commands::Numbers { values, threshold } => {
            commands::numbers::run(&mut console, values, *threshold)?
        }
        Commands::Calc { a, op, b } => commands::calc::run(&mut console, *a, op.as_deref(), *b)?,
        Commands::Register { name, email, age } => {
            commands::register::run(&mut console, name.as_deref(), email.as_deref(), *age)?
        }
        Commands::Greet { name, hour } => {
            commands::greet::run(&mut console, name.as_deref(), *hour)?
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
