//! Main event loop for the application
//!
//! One message at a time goes through the reducer. Terminal input is polled
//! with a short timeout; between polls, finished background jobs are drained.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::prelude::*;

use crate::app::Config;
use crate::core::BrowserState;
use crate::handler::{handle_key_event, init, update, Effect, KeyAction, Message};
use crate::integrate::{Compositor, Hyprctl, OverlaySession, WallpaperSetter};
use crate::render::OverlayRequest;

use super::render::{render_frame, RenderContext};
use super::worker::Worker;

/// Input poll timeout (balances responsiveness and CPU usage)
const POLL_INTERVAL: Duration = Duration::from_millis(60);

/// Whether the loop keeps going after an effect
enum Flow {
    Continue,
    Quit,
}

/// Main event loop
///
/// Returns once a quit key is pressed. The overlay session is closed on quit;
/// on error the caller is responsible for closing it.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &Config,
    overlay: &mut Option<OverlaySession>,
) -> anyhow::Result<()> {
    let setter = WallpaperSetter::new(
        Hyprctl::new(config.wallpaper.hyprctl.clone()),
        config.wallpaper.resolved_config_path(),
    );
    let worker = Worker::new(setter);

    let mut state = BrowserState::new(config.start_dir.clone());
    let size = terminal.size()?;
    update(
        &mut state,
        Message::Resize {
            width: size.width,
            height: size.height,
        },
    );
    let first = init(&mut state);
    if let Flow::Quit = perform(first, &worker, overlay) {
        return Ok(());
    }

    loop {
        // Finished background jobs
        while let Some(msg) = worker.try_recv() {
            if let Some(effect) = update(&mut state, msg) {
                if let Flow::Quit = perform(effect, &worker, overlay) {
                    return Ok(());
                }
            }
        }

        let ctx = RenderContext {
            state: &state,
            layout: &config.layout,
            theme: &config.theme,
            overlay_available: overlay.as_ref().is_some_and(|o| o.is_open()),
        };
        let mut request = None;
        terminal.draw(|frame| request = render_frame(frame, &ctx))?;

        // After the draw so the image lands on top of the fresh frame
        if let (Some(request), Some(session)) = (request, overlay.as_mut()) {
            apply_overlay(session, &request);
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let msg = match event::read()? {
            Event::Key(key) => match handle_key_event(key) {
                KeyAction::None => continue,
                action => Message::Key(action),
            },
            Event::Resize(width, height) => Message::Resize { width, height },
            _ => continue,
        };

        if let Some(effect) = update(&mut state, msg) {
            if let Flow::Quit = perform(effect, &worker, overlay) {
                return Ok(());
            }
        }
    }
}

/// Carry out an effect returned by the reducer
fn perform<C>(effect: Effect, worker: &Worker<C>, overlay: &mut Option<OverlaySession>) -> Flow
where
    C: Compositor + Send + Sync + 'static,
{
    match effect {
        Effect::LoadEntries { path, generation } => {
            worker.load_entries(path, generation);
            Flow::Continue
        }
        Effect::SetWallpaper { path } => {
            tracing::info!(path = %path.display(), "setting wallpaper");
            worker.set_wallpaper(path);
            Flow::Continue
        }
        Effect::Quit => {
            if let Some(session) = overlay.as_mut() {
                session.close();
            }
            Flow::Quit
        }
    }
}

/// Send the frame's overlay request to the daemon
fn apply_overlay(session: &mut OverlaySession, request: &OverlayRequest) {
    let result = match request {
        OverlayRequest::Show { path, area } if area.width > 0 && area.height > 0 => {
            session.show(path, area.x, area.y, area.width, area.height)
        }
        _ => session.hide(),
    };
    if let Err(e) = result {
        // A broken pipe will not heal; stop talking to the daemon
        tracing::warn!("overlay command failed, previews disabled: {}", e);
        session.close();
    }
}
