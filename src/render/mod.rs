//! Render module - UI rendering

pub mod layout;
pub mod list;
pub mod preview;
pub mod theme;

pub use layout::{
    compute_layout, scroll_window, truncate_name, FrameLayout, LayoutConfig, OverlayRequest,
};
pub use list::{render_list, HELP_TEXT, TITLE};
pub use preview::{preview_lines, render_preview};
pub use theme::{parse_color, Theme};
