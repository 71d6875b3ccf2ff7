//! Application configuration from CLI arguments

use std::env;
use std::path::{Path, PathBuf};

use super::config_file::{ConfigFile, OverlayConfig, WallpaperConfig};
use crate::error::{Result, WallviewError};
use crate::integrate::exit_code;
use crate::render::{LayoutConfig, Theme};

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Directory to start browsing in (canonical)
    pub start_dir: PathBuf,
    /// Whether to start the overlay daemon
    pub preview_enabled: bool,
    /// Pane sizing
    pub layout: LayoutConfig,
    /// Colors
    pub theme: Theme,
    /// Overlay daemon command line
    pub overlay: OverlayConfig,
    /// Compositor settings
    pub wallpaper: WallpaperConfig,
}

impl Config {
    /// Parse the process arguments on top of `~/.config/wallview/config.toml`
    pub fn from_args() -> Result<Self> {
        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("wv {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                _ => {}
            }
        }

        Self::parse(args, ConfigFile::load())
    }

    /// Parse `args` (without the program name) on top of `file`
    pub fn parse<I>(args: I, file: ConfigFile) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut start: Option<PathBuf> = None;
        let mut no_preview = false;

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "--no-preview" => no_preview = true,
                path if !path.starts_with('-') => {
                    if start.is_some() {
                        return Err(WallviewError::usage(format!(
                            "unexpected argument '{}'",
                            path
                        )));
                    }
                    start = Some(PathBuf::from(path));
                }
                unknown => {
                    return Err(WallviewError::usage(format!(
                        "unknown option '{}'",
                        unknown
                    )));
                }
            }
        }

        let start = match start {
            Some(path) => path,
            None => dirs::home_dir()
                .ok_or_else(|| WallviewError::usage("cannot determine home directory"))?,
        };
        let start_dir = validate_dir(&start)?;

        Ok(Self {
            start_dir,
            preview_enabled: file.overlay.enabled && !no_preview,
            layout: file.layout,
            theme: Theme::from_config(&file.theme),
            overlay: file.overlay,
            wallpaper: file.wallpaper,
        })
    }
}

/// Check that `path` is an accessible directory and make it absolute
pub fn validate_dir(path: &Path) -> Result<PathBuf> {
    let meta = std::fs::metadata(path).map_err(|e| {
        WallviewError::usage(format!("cannot access '{}': {}", path.display(), e))
    })?;
    if !meta.is_dir() {
        return Err(WallviewError::usage(format!(
            "'{}' is not a directory",
            path.display()
        )));
    }
    Ok(path.canonicalize()?)
}

/// Short usage block printed to stderr after argument errors
pub const USAGE: &str = "Usage: wv [OPTIONS] [directory]
  directory: Starting folder to browse
  (omit to start from home directory)
  Run 'wv --help' for more.";

fn print_help() {
    println!(
        r#"wv - wallview: pick a wallpaper from the terminal

USAGE:
    wv [OPTIONS] [DIRECTORY]

    DIRECTORY defaults to your home directory.

OPTIONS:
    --no-preview    Do not start the image overlay daemon
    -h, --help      Show this help message
    -V, --version   Show version

KEYBINDINGS:
    k/↑             Move up
    j/↓             Move down
    l/→/Enter       Open folder, or set image as wallpaper
    h/←/Backspace   Parent folder
    q/Esc/Ctrl+C    Quit

CONFIG FILE:
    ~/.config/wallview/config.toml

FILES WRITTEN:
    ~/.config/hypr/hyprpaper.conf   Rewritten on every wallpaper change

ENVIRONMENT:
    RUST_LOG        Log filter (log file lives in the cache directory)

EXIT CODES:
    0               Normal exit
    1               Invalid arguments, bad start directory, or runtime error
"#
    );
}
