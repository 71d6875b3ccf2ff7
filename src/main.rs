//! wallview - A terminal wallpaper picker

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use wallview::app::{run_app, Config, USAGE};
use wallview::integrate::{exit_code, OverlaySession};
use wallview::logging;

fn main() -> ExitCode {
    logging::init();

    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(exit_code::ERROR as u8);
        }
    };

    // Start the overlay daemon before the TUI so warnings stay readable
    let mut overlay = start_overlay(&config);

    let result = run_with_config(&config, &mut overlay);

    // Explicit teardown on every exit path
    if let Some(session) = overlay.as_mut() {
        session.close();
    }

    match result {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            tracing::error!("fatal: {:#}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Spawn the overlay daemon; previews are disabled if it cannot start
fn start_overlay(config: &Config) -> Option<OverlaySession> {
    if !config.preview_enabled {
        return None;
    }
    match OverlaySession::spawn(&config.overlay.command, &config.overlay.args) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("image previews disabled: {}", e);
            eprintln!("Warning: Could not start {}: {}", config.overlay.command, e);
            eprintln!("Image previews will be disabled.");
            None
        }
    }
}

fn run_with_config(config: &Config, overlay: &mut Option<OverlaySession>) -> anyhow::Result<()> {
    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config, overlay);

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result
}
