//! List pane rendering

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::layout::{truncate_name, FrameLayout, LIST_FOOTER_LINES, LIST_HEADER_LINES};
use super::theme::Theme;
use crate::core::BrowserState;
use crate::listing::Entry;

/// Pane title
pub const TITLE: &str = "Wallpaper Selector";
/// Key hint shown under the list
pub const HELP_TEXT: &str = "j/k: up/down • h/l: back/enter • enter: select • q: quit";
/// Marker in front of folder names
pub const FOLDER_MARKER: &str = "📁 ";
/// Marker in front of image names
pub const IMAGE_MARKER: &str = "🖼  ";

/// Shared rounded, padded pane block
pub fn pane_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .padding(Padding::uniform(1))
}

/// Render the list pane into `layout.list`
///
/// Header, entry rows and footer get their own areas. Entry rows never wrap,
/// so exactly `layout.rows` lines are used and the cursor row stays on screen.
pub fn render_list(frame: &mut Frame, state: &BrowserState, layout: &FrameLayout, theme: &Theme) {
    let block = pane_block(theme);
    let inner = block.inner(layout.list);
    frame.render_widget(block, layout.list);

    let path = state.current_path.display().to_string();
    let header = Paragraph::new(vec![
        Line::styled(TITLE, theme.title_style()),
        Line::styled(
            truncate_name(&path, inner.width as usize),
            Style::default().fg(theme.path),
        ),
    ]);
    frame.render_widget(header, band(inner, 0, LIST_HEADER_LINES));

    let mut rows = Vec::new();
    if state.phase.is_loading() {
        rows.push(Line::styled("Loading...", Style::default().fg(theme.help)));
    } else if state.entries.is_empty() {
        rows.push(Line::styled("(empty)", Style::default().fg(theme.folder)));
    } else {
        for index in layout.rows.clone() {
            let Some(entry) = state.entries.get(index) else {
                break;
            };
            rows.push(entry_line(
                entry,
                index == state.cursor,
                layout.name_width,
                theme,
            ));
        }
    }
    let height = rows.len() as u16;
    frame.render_widget(Paragraph::new(rows), band(inner, LIST_HEADER_LINES, height));

    // Bottom lines of the pane, below the blank separator
    let mut footer = Vec::new();
    if !state.status_message.is_empty() {
        footer.push(Line::styled(
            state.status_message.clone(),
            Style::default().fg(theme.status),
        ));
    }
    footer.push(Line::styled(HELP_TEXT, Style::default().fg(theme.help)));
    let footer_lines = LIST_FOOTER_LINES - 1;
    let footer_top = inner.height.saturating_sub(footer_lines);
    frame.render_widget(
        Paragraph::new(footer).wrap(Wrap { trim: true }),
        band(inner, footer_top, footer_lines),
    );
}

/// Horizontal slice of `area` starting `top` lines down, clipped to `area`
fn band(area: Rect, top: u16, height: u16) -> Rect {
    let top = top.min(area.height);
    Rect::new(
        area.x,
        area.y + top,
        area.width,
        height.min(area.height - top),
    )
}

/// Render a single entry row
fn entry_line(entry: &Entry, selected: bool, name_width: usize, theme: &Theme) -> Line<'static> {
    let marker = if entry.is_dir {
        FOLDER_MARKER
    } else {
        IMAGE_MARKER
    };
    let text = format!("{}{}", marker, truncate_name(&entry.name, name_width));
    Line::from(Span::styled(text, theme.entry_style(entry.is_dir, selected)))
}
