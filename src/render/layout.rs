//! Frame layout calculations
//!
//! Everything here is pure: given the state and the terminal area it decides
//! where the panes go, which rows are visible and where the overlay image
//! should be drawn. Nothing is drawn and no process is touched.

use std::ops::Range;
use std::path::PathBuf;

use ratatui::layout::Rect;
use serde::Deserialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::BrowserState;

/// Lines above the entry rows in the list pane (title, path, blank)
pub const LIST_HEADER_LINES: u16 = 3;
/// Lines below the entry rows in the list pane (blank, status, help)
pub const LIST_FOOTER_LINES: u16 = 3;
/// Border plus padding on each side of a pane
pub const PANE_INSET: u16 = 2;
/// Lines above the image in the preview pane (name, blank)
pub const PREVIEW_HEADER_LINES: u16 = 2;
/// Suffix appended to truncated names
pub const ELLIPSIS: &str = "...";
/// Cells taken by the folder/image marker in front of a name
pub const ENTRY_PREFIX_WIDTH: usize = 3;

/// Sizing knobs from the `[layout]` config section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Share of the terminal width given to the list pane
    pub list_width_percent: u16,
    /// Floor for the number of entry rows
    pub min_visible_rows: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            list_width_percent: 35,
            min_visible_rows: 5,
        }
    }
}

/// What the overlay daemon should do for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayRequest {
    /// Draw `path` inside `area` (terminal cells)
    Show { path: PathBuf, area: Rect },
    /// Remove the image
    Hide,
}

/// Result of laying out one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    /// List pane, including its border
    pub list: Rect,
    /// Preview pane, including its border
    pub preview: Rect,
    /// Indices of the entries to draw
    pub rows: Range<usize>,
    /// Maximum display cells for an entry name
    pub name_width: usize,
    /// Overlay instruction for the selected entry
    pub overlay: OverlayRequest,
}

/// Lay out a frame for `state` inside `area`
pub fn compute_layout(state: &BrowserState, config: &LayoutConfig, area: Rect) -> FrameLayout {
    let (list, preview) = split_panes(area, config.list_width_percent);

    let list_inner = inset(list);
    let visible = (list_inner
        .height
        .saturating_sub(LIST_HEADER_LINES + LIST_FOOTER_LINES) as usize)
        .max(config.min_visible_rows);
    let rows = scroll_window(state.entries.len(), state.cursor, visible);
    let name_width = (list_inner.width as usize).saturating_sub(ENTRY_PREFIX_WIDTH);

    let overlay = match state.current_entry() {
        Some(entry) if entry.is_image => OverlayRequest::Show {
            path: entry.path_in(&state.current_path),
            area: image_area(preview),
        },
        _ => OverlayRequest::Hide,
    };

    FrameLayout {
        list,
        preview,
        rows,
        name_width,
        overlay,
    }
}

/// Split `area` into list and preview panes side by side
pub fn split_panes(area: Rect, list_width_percent: u16) -> (Rect, Rect) {
    let percent = list_width_percent.min(100) as u32;
    let list_width = (area.width as u32 * percent / 100) as u16;
    let list = Rect::new(area.x, area.y, list_width, area.height);
    let preview = Rect::new(
        area.x + list_width,
        area.y,
        area.width - list_width,
        area.height,
    );
    (list, preview)
}

/// Content area of a pane (inside border and padding)
pub fn inset(pane: Rect) -> Rect {
    Rect::new(
        pane.x + PANE_INSET,
        pane.y + PANE_INSET,
        pane.width.saturating_sub(PANE_INSET * 2),
        pane.height.saturating_sub(PANE_INSET * 2),
    )
}

/// Cell rectangle the overlay image may occupy inside the preview pane
pub fn image_area(preview: Rect) -> Rect {
    let inner = inset(preview);
    Rect::new(
        inner.x,
        inner.y + PREVIEW_HEADER_LINES,
        inner.width,
        inner.height.saturating_sub(PREVIEW_HEADER_LINES),
    )
}

/// Scroll-follow window of `visible` rows over `len` entries.
///
/// Starts at 0 until the cursor falls below the window, then the cursor is
/// kept on the last visible row.
pub fn scroll_window(len: usize, cursor: usize, visible: usize) -> Range<usize> {
    let start = if visible > 0 && cursor >= visible {
        cursor + 1 - visible
    } else {
        0
    };
    let start = start.min(len);
    let end = (start + visible).min(len);
    start..end
}

/// Cut `name` to `max` display cells, ending in an ellipsis when shortened
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.width() <= max {
        return name.to_string();
    }
    let suffix_width = ELLIPSIS.width();
    if max <= suffix_width {
        return ELLIPSIS.chars().take(max).collect();
    }

    let budget = max - suffix_width;
    let mut used = 0;
    let mut cut = String::new();
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push_str(ELLIPSIS);
    cut
}
