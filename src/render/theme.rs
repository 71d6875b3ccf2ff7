//! Theme colors for the two panes
//!
//! Built once from the `[theme]` section of the config file and passed to the
//! render functions by reference.

use ratatui::style::{Color, Modifier, Style};

use crate::app::ThemeConfig;

/// Parsed theme with ratatui Color values
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: Color,
    pub path: Color,
    pub folder: Color,
    pub image: Color,
    pub selected_fg: Color,
    pub folder_selected_bg: Color,
    pub image_selected_bg: Color,
    pub border: Color,
    pub status: Color,
    pub help: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Create theme from the config file section
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            title: parse_color(&config.title),
            path: parse_color(&config.path),
            folder: parse_color(&config.folder),
            image: parse_color(&config.image),
            selected_fg: parse_color(&config.selected_fg),
            folder_selected_bg: parse_color(&config.folder_selected_bg),
            image_selected_bg: parse_color(&config.image_selected_bg),
            border: parse_color(&config.border),
            status: parse_color(&config.status),
            help: parse_color(&config.help),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Row style for a folder or image, selected or not
    pub fn entry_style(&self, is_dir: bool, selected: bool) -> Style {
        match (is_dir, selected) {
            (true, false) => Style::default().fg(self.folder),
            (false, false) => Style::default().fg(self.image),
            (true, true) => Style::default()
                .fg(self.selected_fg)
                .bg(self.folder_selected_bg)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default()
                .fg(self.selected_fg)
                .bg(self.image_selected_bg)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Parse color string to ratatui Color
///
/// Supported formats:
/// - Named colors: "red", "blue", "darkgray", ...
/// - Hex colors: "#ff0000", "#f00"
/// - 256 colors: "color123" or "123"
pub fn parse_color(s: &str) -> Color {
    let s = s.trim().to_lowercase();

    if s == "default" || s == "reset" || s.is_empty() {
        return Color::Reset;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    if let Some(n) = s.strip_prefix("color") {
        if let Ok(n) = n.parse::<u8>() {
            return Color::Indexed(n);
        }
    }
    if let Ok(n) = s.parse::<u8>() {
        return Color::Indexed(n);
    }

    match s.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

/// Parse hex color (#rgb or #rrggbb)
fn parse_hex_color(hex: &str) -> Color {
    if !hex.is_ascii() {
        return Color::Reset;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
            match (expand(0), expand(1), expand(2)) {
                (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
                _ => Color::Reset,
            }
        }
        6 => match (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])) {
            (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
            _ => Color::Reset,
        },
        _ => Color::Reset,
    }
}
