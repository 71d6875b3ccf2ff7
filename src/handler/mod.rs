//! Handler module - Input mapping and the state reducer

pub mod key;
pub mod update;

pub use key::{handle_key_event, KeyAction};
pub use update::{init, update, Effect, Message, SETTING_WALLPAPER};
