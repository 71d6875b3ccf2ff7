//! Application module
//!
//! This module contains configuration, the background worker, frame
//! composition and the event loop.

mod config;
mod config_file;
mod event_loop;
mod render;
mod worker;

pub use config::{validate_dir, Config, USAGE};
pub use config_file::{ConfigFile, OverlayConfig, ThemeConfig, WallpaperConfig};
pub use event_loop::run_app;
pub use render::{render_frame, RenderContext};
pub use worker::Worker;
