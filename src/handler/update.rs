//! Message reducer
//!
//! Every change to [`BrowserState`] goes through [`update`]. Work that must
//! leave the event loop (listing a directory, talking to the compositor,
//! quitting) is returned as an [`Effect`]; its result comes back later as
//! another [`Message`].

use std::path::PathBuf;

use crate::core::{BrowserState, Phase};
use crate::handler::key::KeyAction;
use crate::integrate::WallpaperOutcome;
use crate::listing::Entry;

/// Status text shown while the compositor is busy
pub const SETTING_WALLPAPER: &str = "Setting wallpaper...";

/// Input to the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A mapped key press
    Key(KeyAction),
    /// Terminal size changed
    Resize { width: u16, height: u16 },
    /// A directory listing finished
    EntriesLoaded {
        generation: u64,
        path: PathBuf,
        entries: Vec<Entry>,
    },
    /// A wallpaper-set request finished
    WallpaperSet(WallpaperOutcome),
}

/// Work the event loop must carry out after a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// List `path` in the background, tagged with `generation`
    LoadEntries { path: PathBuf, generation: u64 },
    /// Set `path` as wallpaper in the background
    SetWallpaper { path: PathBuf },
    /// Close the overlay and leave the loop
    Quit,
}

/// Effect that starts the very first listing
pub fn init(state: &mut BrowserState) -> Effect {
    let generation = state.begin_reload();
    Effect::LoadEntries {
        path: state.current_path.clone(),
        generation,
    }
}

/// Apply `msg` to `state`
pub fn update(state: &mut BrowserState, msg: Message) -> Option<Effect> {
    if state.is_quitting() {
        return None;
    }

    match msg {
        Message::Key(action) => handle_action(state, action),
        Message::Resize { width, height } => {
            state.viewport = (width, height);
            None
        }
        Message::EntriesLoaded {
            generation,
            path,
            entries,
        } => {
            if !state.apply_listing(generation, &path, entries) {
                tracing::debug!(
                    generation,
                    current = state.generation,
                    path = %path.display(),
                    "dropping stale listing"
                );
            }
            None
        }
        Message::WallpaperSet(outcome) => {
            state.set_message(outcome.message());
            None
        }
    }
}

fn handle_action(state: &mut BrowserState, action: KeyAction) -> Option<Effect> {
    match action {
        KeyAction::None => None,
        KeyAction::Quit => {
            state.phase = Phase::Quitting;
            Some(Effect::Quit)
        }
        KeyAction::MoveUp => {
            state.move_up();
            None
        }
        KeyAction::MoveDown => {
            state.move_down();
            None
        }
        KeyAction::Open => open_entry(state),
        KeyAction::Back => go_to_parent(state),
    }
}

fn open_entry(state: &mut BrowserState) -> Option<Effect> {
    let entry = state.current_entry()?;
    let (is_dir, is_image) = (entry.is_dir, entry.is_image);
    let path = entry.path_in(&state.current_path);

    if is_dir {
        let generation = state.begin_navigation(path.clone());
        return Some(Effect::LoadEntries { path, generation });
    }

    if is_image {
        state.set_message(SETTING_WALLPAPER);
        return Some(Effect::SetWallpaper { path });
    }

    None
}

fn go_to_parent(state: &mut BrowserState) -> Option<Effect> {
    let parent = state.current_path.parent()?.to_path_buf();
    let generation = state.begin_navigation(parent.clone());
    Some(Effect::LoadEntries {
        path: parent,
        generation,
    })
}
