//! Modali - Which-key style command launcher
//!
//! Type a key sequence, watch the options narrow, launch a command.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};

mod app;
mod bindings;
mod dispatch;
mod input;
mod logging;
mod ui;

use app::{App, AppConfig};
use dispatch::Dispatcher;
use ui::terminal::{self, Tui};

#[derive(Parser, Debug)]
#[command(name = "modali", version, about = "Which-key style command launcher")]
struct Args {
    /// Bindings file to use instead of the default location
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Check the bindings file for errors and exit
    #[arg(short, long)]
    validate: bool,

    /// Write logs to this file (or directory)
    #[arg(long, env = "MODALI_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Escape clears the typed keys instead of closing the launcher
    #[arg(long)]
    keep_open: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let started = Instant::now();
    let args = Args::parse();

    let mut config = AppConfig::default();
    if let Some(path) = args.input {
        config.bindings_path = path;
    }
    config.log_file = args.log_file;
    config.escape_exits = !args.keep_open;

    let _log_guard = match logging::init(config.log_file.clone()) {
        Ok(guard) => {
            info!("Logging to {}", guard.log_file.display());
            Some(guard)
        }
        Err(e) => {
            eprintln!("modali: logging disabled: {e}");
            None
        }
    };

    if args.validate {
        return Ok(validate(&config.bindings_path));
    }

    let report = bindings::load(&config.bindings_path);
    debug!("Bindings ready after {:.2?}", started.elapsed());

    let mut terminal = terminal::setup().context("Failed to set up terminal")?;

    let mut app = App::new(config, &report, Dispatcher::default());
    let result = run_app(&mut terminal, &mut app);

    terminal::restore(&mut terminal)?;

    result?;
    info!("Session ended after {:.2?}", started.elapsed());
    Ok(ExitCode::SUCCESS)
}

fn run_app(
    terminal: &mut Tui,
    app: &mut App<'_>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Print every problem in the bindings file. Exit status 1 if there were any.
fn validate(path: &Path) -> ExitCode {
    let report = bindings::load(path);

    if let Some(error) = &report.load_error {
        println!("error: {error}");
    }
    for error in &report.entry_errors {
        println!("warning: {error}");
    }

    if report.is_clean() {
        println!(
            "{}: OK ({} bindings)",
            path.display(),
            report.tree.node_count()
        );
        ExitCode::SUCCESS
    } else {
        println!(
            "{}: {} problem(s), {} entr{} skipped",
            path.display(),
            report.problem_count(),
            report.skipped_count(),
            if report.skipped_count() == 1 { "y" } else { "ies" }
        );
        ExitCode::FAILURE
    }
}
