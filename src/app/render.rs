//! Rendering helpers for the event loop

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::core::BrowserState;
use crate::render::{
    compute_layout, render_list, render_preview, LayoutConfig, OverlayRequest, Theme,
};

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a BrowserState,
    pub layout: &'a LayoutConfig,
    pub theme: &'a Theme,
    /// Whether an overlay daemon is running
    pub overlay_available: bool,
}

/// Render a complete frame.
///
/// Returns what the overlay should show, or `None` before the terminal size
/// is known.
pub fn render_frame(frame: &mut Frame, ctx: &RenderContext) -> Option<OverlayRequest> {
    let area = frame.area();
    if ctx.state.viewport.0 == 0 {
        frame.render_widget(Paragraph::new("Loading..."), area);
        return None;
    }

    let layout = compute_layout(ctx.state, ctx.layout, area);
    render_list(frame, ctx.state, &layout, ctx.theme);
    render_preview(frame, ctx.state, &layout, ctx.theme, ctx.overlay_available);
    Some(layout.overlay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BrowserState;
    use crate::listing::Entry;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::path::{Path, PathBuf};

    fn draw(state: &BrowserState, overlay_available: bool) -> (Buffer, Option<OverlayRequest>) {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let ctx = RenderContext {
            state,
            layout: &LayoutConfig::default(),
            theme: &Theme::default(),
            overlay_available,
        };
        let mut request = None;
        terminal
            .draw(|frame| request = render_frame(frame, &ctx))
            .unwrap();
        (terminal.backend().buffer().clone(), request)
    }

    /// Screen rows, restricted to columns `xs`
    fn rows(buffer: &Buffer, xs: std::ops::Range<u16>) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| xs.clone().map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn screen(state: &BrowserState, overlay_available: bool) -> (String, Option<OverlayRequest>) {
        let (buffer, request) = draw(state, overlay_available);
        let mut text = rows(&buffer, 0..buffer.area.width).join("\n");
        text.push('\n');
        (text, request)
    }

    fn loaded(entries: Vec<Entry>) -> BrowserState {
        let mut state = BrowserState::new(PathBuf::from("/pics"));
        let generation = state.begin_reload();
        state.apply_listing(generation, Path::new("/pics"), entries);
        state.viewport = (100, 30);
        state
    }

    #[test]
    fn test_zero_viewport_shows_loading() {
        let state = BrowserState::new(PathBuf::from("/pics"));
        let (text, request) = screen(&state, true);
        assert!(text.starts_with("Loading..."));
        assert!(request.is_none());
    }

    #[test]
    fn test_list_pane_contents() {
        let mut state = loaded(vec![Entry::dir("Photos"), Entry::image("B.png")]);
        state.set_message("Wallpaper set and saved!");
        let (text, request) = screen(&state, true);

        assert!(text.contains("Wallpaper Selector"));
        assert!(text.contains("/pics"));
        assert!(text.contains("Photos"));
        assert!(text.contains("B.png"));
        assert!(text.contains("Wallpaper set and saved!"));
        assert!(text.contains("j/k: up/down"));
        assert!(text.contains("(folder)"));
        assert_eq!(request, Some(OverlayRequest::Hide));
    }

    #[test]
    fn test_empty_listing_placeholder() {
        let state = loaded(vec![]);
        let (text, _) = screen(&state, true);
        assert!(text.contains("(empty)"));
        assert!(text.contains("No selection"));
    }

    #[test]
    fn test_image_selection_requests_overlay() {
        let mut state = loaded(vec![Entry::image("x.png")]);
        state.cursor = 0;
        let (_, request) = screen(&state, true);
        assert!(matches!(
            request,
            Some(OverlayRequest::Show { ref path, .. }) if path == Path::new("/pics/x.png")
        ));
    }

    #[test]
    fn test_text_fallback_without_overlay() {
        let state = loaded(vec![Entry::image("x.png")]);
        let (text, _) = screen(&state, false);
        assert!(text.contains("(preview unavailable)"));
    }

    #[test]
    fn test_wide_names_stay_on_one_row_each() {
        let entries = (0..30)
            .map(|i| Entry::image(format!("{:02}壁紙の写真コレクション夏休み旅行記録.png", i)))
            .collect();
        let mut state = loaded(entries);
        state.cursor = 25;
        state.set_message("Setting wallpaper...");
        let (buffer, _) = draw(&state, true);
        // List pane is the left 35 columns
        let list = rows(&buffer, 0..35);

        // 30 rows high: border, padding, 3 header lines, then 20 entry rows
        let entry_rows: Vec<&String> = list.iter().filter(|r| r.contains('壁')).collect();
        assert_eq!(entry_rows.len(), 20);
        assert!(entry_rows[0].contains("06壁"));
        assert!(entry_rows[19].contains("25壁"));
        assert!(!list.iter().any(|r| r.contains("05壁")));
        assert!(entry_rows.iter().all(|r| r.contains("...")));

        assert!(list.iter().any(|r| r.contains("Setting wallpaper...")));
        assert!(list.iter().any(|r| r.contains("j/k: up/down")));
    }

    #[test]
    fn test_selected_row_visible_at_end_of_long_listing() {
        let entries = (0..200)
            .map(|i| Entry::dir(format!("{:03}_folder_with_a_rather_long_name", i)))
            .collect();
        let mut state = loaded(entries);
        state.cursor = 199;
        let (buffer, _) = draw(&state, true);
        let list = rows(&buffer, 0..35);

        assert!(list.iter().any(|r| r.contains("199_folder")));
        assert!(list.iter().any(|r| r.contains("180_folder")));
        assert!(!list.iter().any(|r| r.contains("179_folder")));
        assert!(list.iter().any(|r| r.contains("j/k: up/down")));
    }
}
