//! Preview pane rendering
//!
//! Only text is drawn here; the image itself is painted by the overlay
//! daemon on top of the area given by `OverlayRequest::Show`.

use ratatui::{style::Style, text::Line, widgets::Paragraph, Frame};

use super::layout::FrameLayout;
use super::list::{pane_block, FOLDER_MARKER, IMAGE_MARKER};
use super::theme::Theme;
use crate::core::BrowserState;

/// Text lines for the preview pane
pub fn preview_lines(
    state: &BrowserState,
    overlay_available: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let Some(entry) = state.current_entry() else {
        return vec![Line::raw("No selection")];
    };

    if entry.is_dir {
        return vec![
            Line::styled(
                format!("{}{}", FOLDER_MARKER, entry.name),
                Style::default().fg(theme.folder),
            ),
            Line::raw(""),
            Line::raw("(folder)"),
        ];
    }

    let mut lines = vec![Line::styled(
        format!("{}{}", IMAGE_MARKER, entry.name),
        Style::default().fg(theme.image),
    )];
    if !overlay_available {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "(preview unavailable)",
            Style::default().fg(theme.help),
        ));
    }
    lines
}

/// Render the preview pane into `layout.preview`
pub fn render_preview(
    frame: &mut Frame,
    state: &BrowserState,
    layout: &FrameLayout,
    theme: &Theme,
    overlay_available: bool,
) {
    let lines = preview_lines(state, overlay_available, theme);
    let para = Paragraph::new(lines).block(pane_block(theme));
    frame.render_widget(para, layout.preview);
}
