//! Wallpaper setting through the compositor
//!
//! Flow: resolve path → query monitors → preload → apply per monitor →
//! persist `hyprpaper.conf`. Every failure becomes a status string; a failed
//! save after a successful apply is still reported as success.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::error::{Result, WallviewError};

/// A monitor reported by the compositor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Monitor {
    pub name: String,
}

impl Monitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Operations the wallpaper flow needs from the compositor
pub trait Compositor {
    /// Active monitors
    fn monitors(&self) -> Result<Vec<Monitor>>;
    /// Load the image into the wallpaper daemon
    fn preload(&self, path: &Path) -> Result<()>;
    /// Show a preloaded image on one monitor
    fn apply(&self, monitor: &str, path: &Path) -> Result<()>;
}

/// Hyprland's `hyprctl` command-line client
#[derive(Debug, Clone)]
pub struct Hyprctl {
    program: String,
}

impl Hyprctl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run hyprctl and return stdout; a non-zero exit is an error
    fn run(&self, args: &[&OsStr]) -> Result<Vec<u8>> {
        tracing::debug!(program = %self.program, ?args, "running compositor command");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| WallviewError::compositor(format!("{}: {}", self.program, e)))?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() {
            output.status.to_string()
        } else {
            stderr
        };
        Err(WallviewError::compositor(detail))
    }
}

impl Default for Hyprctl {
    fn default() -> Self {
        Self::new("hyprctl")
    }
}

impl Compositor for Hyprctl {
    fn monitors(&self) -> Result<Vec<Monitor>> {
        let stdout = self.run(&[OsStr::new("monitors"), OsStr::new("-j")])?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    fn preload(&self, path: &Path) -> Result<()> {
        let args = [OsStr::new("hyprpaper"), OsStr::new("preload"), path.as_os_str()];
        self.run(&args).map(|_| ())
    }

    fn apply(&self, monitor: &str, path: &Path) -> Result<()> {
        let arg = wallpaper_arg(monitor, path);
        let args = [OsStr::new("hyprpaper"), OsStr::new("wallpaper"), arg.as_os_str()];
        self.run(&args).map(|_| ())
    }
}

/// `monitor,path` with the path bytes untouched
fn wallpaper_arg(monitor: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(monitor);
    arg.push(",");
    arg.push(path);
    arg
}

/// Result of a wallpaper-set request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallpaperOutcome {
    /// Applied on every monitor and persisted
    Saved,
    /// Applied, but writing the config file failed
    Applied { save_error: String },
    /// Nothing (or not everything) was applied
    Failed(String),
}

impl WallpaperOutcome {
    /// Whether the wallpaper visibly changed
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Status line text
    pub fn message(&self) -> String {
        match self {
            Self::Saved => "Wallpaper set and saved!".to_string(),
            Self::Applied { save_error } => format!("Set! (config save failed: {})", save_error),
            Self::Failed(msg) => msg.clone(),
        }
    }
}

/// Default hyprpaper config location (`~/.config/hypr/hyprpaper.conf`)
pub fn hyprpaper_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("hypr").join("hyprpaper.conf"))
}

/// Build the hyprpaper config for `image` on `monitors`.
///
/// Returned as bytes so a non-UTF-8 image path is written as-is.
pub fn render_hyprpaper_config(image: &Path, monitors: &[Monitor]) -> Vec<u8> {
    let image = image.as_os_str().as_encoded_bytes();
    let mut config = Vec::new();
    config.extend_from_slice(b"preload = ");
    config.extend_from_slice(image);
    config.push(b'\n');
    for monitor in monitors {
        config.extend_from_slice(format!("wallpaper = {},", monitor.name).as_bytes());
        config.extend_from_slice(image);
        config.push(b'\n');
    }
    config.extend_from_slice(b"splash = false\n");
    config.extend_from_slice(b"ipc = on\n");
    config
}

/// Overwrite `config_path` with the config for `image` on `monitors`
pub fn save_hyprpaper_config(config_path: &Path, image: &Path, monitors: &[Monitor]) -> Result<()> {
    if let Some(dir) = config_path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(config_path, render_hyprpaper_config(image, monitors))?;
    Ok(())
}

/// Runs the full wallpaper flow against a compositor
#[derive(Debug, Clone)]
pub struct WallpaperSetter<C> {
    compositor: C,
    config_path: Option<PathBuf>,
}

impl<C: Compositor> WallpaperSetter<C> {
    /// `config_path` of `None` means there is nowhere to persist the setting
    pub fn new(compositor: C, config_path: Option<PathBuf>) -> Self {
        Self {
            compositor,
            config_path,
        }
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Set `image` as wallpaper on every monitor
    pub fn set(&self, image: &Path) -> WallpaperOutcome {
        let outcome = self.set_inner(image);
        match &outcome {
            WallpaperOutcome::Failed(msg) => {
                tracing::warn!(image = %image.display(), "wallpaper not set: {}", msg)
            }
            other => tracing::info!(image = %image.display(), "{}", other.message()),
        }
        outcome
    }

    fn set_inner(&self, image: &Path) -> WallpaperOutcome {
        let image = match std::path::absolute(image) {
            Ok(p) => p,
            Err(e) => return WallpaperOutcome::Failed(format!("Error: {}", e)),
        };

        let monitors = match self.compositor.monitors() {
            Ok(m) => m,
            Err(e) => return WallpaperOutcome::Failed(format!("Error getting monitors: {}", e)),
        };
        if monitors.is_empty() {
            return WallpaperOutcome::Failed(WallviewError::NoMonitors.to_string());
        }

        if let Err(e) = self.compositor.preload(&image) {
            return WallpaperOutcome::Failed(format!("Error preloading: {}", e));
        }

        for monitor in &monitors {
            if let Err(e) = self.compositor.apply(&monitor.name, &image) {
                return WallpaperOutcome::Failed(format!(
                    "Error setting wallpaper on {}: {}",
                    monitor.name, e
                ));
            }
        }

        let saved = match &self.config_path {
            Some(path) => save_hyprpaper_config(path, &image, &monitors),
            None => Err(WallviewError::config("home directory not found")),
        };
        match saved {
            Ok(()) => WallpaperOutcome::Saved,
            Err(e) => WallpaperOutcome::Applied {
                save_error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records every call; fails where told to
    #[derive(Default)]
    struct FakeCompositor {
        monitors: Vec<Monitor>,
        fail_preload: bool,
        fail_on: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeCompositor {
        fn with_monitors(names: &[&str]) -> Self {
            Self {
                monitors: names.iter().map(|n| Monitor::new(*n)).collect(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Compositor for FakeCompositor {
        fn monitors(&self) -> Result<Vec<Monitor>> {
            self.calls.lock().unwrap().push("monitors".into());
            Ok(self.monitors.clone())
        }

        fn preload(&self, path: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("preload {}", path.display()));
            if self.fail_preload {
                return Err(WallviewError::compositor("no such file"));
            }
            Ok(())
        }

        fn apply(&self, monitor: &str, path: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("apply {},{}", monitor, path.display()));
            if self.fail_on.as_deref() == Some(monitor) {
                return Err(WallviewError::compositor("monitor busy"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_success_writes_config_for_every_monitor() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("hypr").join("hyprpaper.conf");
        let setter = WallpaperSetter::new(
            FakeCompositor::with_monitors(&["eDP-1", "HDMI-1"]),
            Some(config.clone()),
        );

        let outcome = setter.set(Path::new("/tmp/x.jpg"));
        assert_eq!(outcome, WallpaperOutcome::Saved);
        assert_eq!(outcome.message(), "Wallpaper set and saved!");

        let written = fs::read_to_string(&config).unwrap();
        assert!(written.contains("wallpaper = eDP-1,/tmp/x.jpg"));
        assert!(written.contains("wallpaper = HDMI-1,/tmp/x.jpg"));
        assert_eq!(
            setter.compositor().calls(),
            vec![
                "monitors",
                "preload /tmp/x.jpg",
                "apply eDP-1,/tmp/x.jpg",
                "apply HDMI-1,/tmp/x.jpg",
            ]
        );
    }

    #[test]
    fn test_no_monitors_skips_preload_and_apply() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("hyprpaper.conf");
        let setter = WallpaperSetter::new(FakeCompositor::default(), Some(config.clone()));

        let outcome = setter.set(Path::new("/tmp/x.jpg"));
        assert_eq!(outcome, WallpaperOutcome::Failed("No monitors found".into()));
        assert!(!outcome.is_success());
        assert_eq!(setter.compositor().calls(), vec!["monitors"]);
        assert!(!config.exists());
    }

    #[test]
    fn test_preload_failure_reported() {
        let mut fake = FakeCompositor::with_monitors(&["eDP-1"]);
        fake.fail_preload = true;
        let setter = WallpaperSetter::new(fake, None);

        let outcome = setter.set(Path::new("/tmp/x.jpg"));
        assert_eq!(
            outcome,
            WallpaperOutcome::Failed("Error preloading: no such file".into())
        );
        assert_eq!(setter.compositor().calls().len(), 2);
    }

    #[test]
    fn test_apply_failure_names_monitor() {
        let mut fake = FakeCompositor::with_monitors(&["eDP-1", "HDMI-1"]);
        fake.fail_on = Some("HDMI-1".into());
        let setter = WallpaperSetter::new(fake, None);

        let outcome = setter.set(Path::new("/tmp/x.jpg"));
        assert_eq!(
            outcome.message(),
            "Error setting wallpaper on HDMI-1: monitor busy"
        );
    }

    #[test]
    fn test_save_failure_is_partial_success() {
        let temp = TempDir::new().unwrap();
        // A file where the config directory should be
        let blocker = temp.path().join("hypr");
        fs::write(&blocker, "").unwrap();
        let setter = WallpaperSetter::new(
            FakeCompositor::with_monitors(&["eDP-1"]),
            Some(blocker.join("hyprpaper.conf")),
        );

        let outcome = setter.set(Path::new("/tmp/x.jpg"));
        assert!(outcome.is_success());
        assert!(matches!(outcome, WallpaperOutcome::Applied { .. }));
        assert!(outcome.message().starts_with("Set! (config save failed:"));
    }

    #[test]
    fn test_missing_config_location_is_partial_success() {
        let setter = WallpaperSetter::new(FakeCompositor::with_monitors(&["eDP-1"]), None);
        let outcome = setter.set(Path::new("/tmp/x.jpg"));
        assert!(matches!(outcome, WallpaperOutcome::Applied { .. }));
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let setter = WallpaperSetter::new(FakeCompositor::with_monitors(&["eDP-1"]), None);
        setter.set(Path::new("walls/x.png"));

        let cwd = std::env::current_dir().unwrap();
        let expected = format!("preload {}", cwd.join("walls/x.png").display());
        assert_eq!(setter.compositor().calls()[1], expected);
    }

    #[test]
    fn test_render_config_layout() {
        let bytes = render_hyprpaper_config(
            Path::new("/w/a.png"),
            &[Monitor::new("DP-1"), Monitor::new("DP-2")],
        );
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "preload = /w/a.png\n\
             wallpaper = DP-1,/w/a.png\n\
             wallpaper = DP-2,/w/a.png\n\
             splash = false\n\
             ipc = on\n"
        );
    }

    #[test]
    fn test_save_overwrites_previous_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hyprpaper.conf");
        fs::write(&path, "preload = /old.png\nsomething else\n").unwrap();

        save_hyprpaper_config(&path, Path::new("/new.png"), &[Monitor::new("eDP-1")]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("/old.png"));
        assert!(text.starts_with("preload = /new.png\n"));
    }

    #[test]
    fn test_wallpaper_arg() {
        assert_eq!(
            wallpaper_arg("eDP-1", Path::new("/w/a.png")),
            OsString::from("eDP-1,/w/a.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_reaches_compositor_and_config_untouched() {
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/w/caf\xe9.png"));
        assert_eq!(
            wallpaper_arg("eDP-1", path).as_bytes(),
            b"eDP-1,/w/caf\xe9.png"
        );

        let temp = TempDir::new().unwrap();
        let config = temp.path().join("hyprpaper.conf");
        save_hyprpaper_config(&config, path, &[Monitor::new("eDP-1")]).unwrap();
        let written = fs::read(&config).unwrap();
        assert!(written.starts_with(b"preload = /w/caf\xe9.png\n"));
        assert!(written
            .windows(b"wallpaper = eDP-1,/w/caf\xe9.png\n".len())
            .any(|w| w == b"wallpaper = eDP-1,/w/caf\xe9.png\n"));
    }

    #[test]
    fn test_monitor_json_shape() {
        let json = r#"[{"id":0,"name":"eDP-1","width":1920},{"id":1,"name":"HDMI-1"}]"#;
        let monitors: Vec<Monitor> = serde_json::from_str(json).unwrap();
        assert_eq!(monitors, vec![Monitor::new("eDP-1"), Monitor::new("HDMI-1")]);
    }

    #[test]
    fn test_missing_hyprctl_is_error() {
        let hyprctl = Hyprctl::new("/nonexistent/bin/hyprctl");
        assert!(hyprctl.monitors().is_err());
    }
}
