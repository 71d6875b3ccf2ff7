//! Integrate module - External process integration
//!
//! - Wallpaper: drive the compositor's wallpaper daemon (`hyprctl hyprpaper`)
//! - Overlay: draw image previews through a `ueberzug layer` daemon

pub mod overlay;
pub mod wallpaper;

pub use overlay::{OverlayCommand, OverlaySession, PREVIEW_IDENTIFIER};
pub use wallpaper::{
    hyprpaper_config_path, render_hyprpaper_config, save_hyprpaper_config, Compositor, Hyprctl,
    Monitor, WallpaperOutcome, WallpaperSetter,
};

/// Exit codes for the `wv` binary
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Bad arguments, bad start path, or runtime error
    pub const ERROR: i32 = 1;
}
