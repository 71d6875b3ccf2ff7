//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/wallview/config.toml`. Every key is
//! optional; a missing or unreadable file means defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WallviewError};
use crate::integrate::hyprpaper_config_path;
use crate::render::LayoutConfig;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Pane sizing
    pub layout: LayoutConfig,
    /// Overlay daemon settings
    pub overlay: OverlayConfig,
    /// Compositor settings
    pub wallpaper: WallpaperConfig,
    /// Colors
    pub theme: ThemeConfig,
}

/// Overlay daemon settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Start the overlay daemon at all
    pub enabled: bool,
    /// Program to run
    pub command: String,
    /// Arguments passed to `command`
    pub args: Vec<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "ueberzug".to_string(),
            args: vec!["layer".to_string(), "--silent".to_string()],
        }
    }
}

/// Compositor settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WallpaperConfig {
    /// hyprctl binary
    pub hyprctl: String,
    /// Where to persist the wallpaper (default `~/.config/hypr/hyprpaper.conf`)
    pub config_path: Option<PathBuf>,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            hyprctl: "hyprctl".to_string(),
            config_path: None,
        }
    }
}

impl WallpaperConfig {
    /// Configured path, or the hyprpaper default
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.config_path.clone().or_else(hyprpaper_config_path)
    }
}

/// Color strings, parsed by `render::parse_color`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub title: String,
    pub path: String,
    pub folder: String,
    pub image: String,
    pub selected_fg: String,
    pub folder_selected_bg: String,
    pub image_selected_bg: String,
    pub border: String,
    pub status: String,
    pub help: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            title: "205".to_string(),
            path: "243".to_string(),
            folder: "75".to_string(),
            image: "212".to_string(),
            selected_fg: "229".to_string(),
            folder_selected_bg: "24".to_string(),
            image_selected_bg: "57".to_string(),
            border: "62".to_string(),
            status: "10".to_string(),
            help: "241".to_string(),
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/wallview)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wallview"))
    }

    /// Get the config file path (~/.config/wallview/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WallviewError::config(e.to_string()))
    }
}
