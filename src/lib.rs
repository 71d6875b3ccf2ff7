//! wallview - A terminal wallpaper picker
//!
//! Browse folders, preview images through an overlay daemon and set the
//! selected image as wallpaper via the compositor.

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod integrate;
pub mod listing;
pub mod logging;
pub mod render;

pub use error::{Result, WallviewError};
