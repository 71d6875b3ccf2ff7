//! Image overlay daemon (`ueberzug layer`)
//!
//! The daemon reads one JSON command per line on stdin and draws images on
//! top of terminal cells. Every command uses the same identifier, so a new
//! `add` replaces the previous image instead of stacking.

use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use serde::Serialize;

use crate::error::{Result, WallviewError};

/// Identifier shared by every overlay command
pub const PREVIEW_IDENTIFIER: &str = "preview";

/// A single overlay command, serialized as one JSON line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum OverlayCommand {
    /// Draw `path` inside the given cell rectangle
    Add {
        identifier: String,
        path: String,
        x: u16,
        y: u16,
        max_width: u16,
        max_height: u16,
    },
    /// Remove whatever is drawn under `identifier`
    Remove { identifier: String },
}

impl OverlayCommand {
    pub fn add(path: &Path, x: u16, y: u16, max_width: u16, max_height: u16) -> Self {
        Self::Add {
            identifier: PREVIEW_IDENTIFIER.to_string(),
            path: path.to_string_lossy().into_owned(),
            x,
            y,
            max_width,
            max_height,
        }
    }

    pub fn remove() -> Self {
        Self::Remove {
            identifier: PREVIEW_IDENTIFIER.to_string(),
        }
    }

    /// JSON encoding terminated by a newline
    pub fn to_line(&self) -> Result<String> {
        let mut line = serde_json::to_string(self)
            .map_err(|e| WallviewError::overlay(format!("encode failed: {}", e)))?;
        line.push('\n');
        Ok(line)
    }
}

/// Owned handle to a running overlay daemon
///
/// Must be released with [`OverlaySession::close`]; dropping it without
/// closing leaves the daemon running until its stdin closes.
pub struct OverlaySession {
    child: Option<Child>,
    stream: Option<Box<dyn Write + Send>>,
    last_sent: Option<OverlayCommand>,
}

impl OverlaySession {
    /// Start `program args...` with a piped stdin
    pub fn spawn(program: &str, args: &[String]) -> Result<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| WallviewError::overlay(format!("cannot start {}: {}", program, e)))?;

        let Some(stdin) = child.stdin.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(WallviewError::overlay("daemon stdin unavailable"));
        };

        tracing::debug!(program, pid = child.id(), "overlay daemon started");
        Ok(Self {
            child: Some(child),
            stream: Some(Box::new(stdin)),
            last_sent: None,
        })
    }

    /// Session writing to an arbitrary stream, with no process attached
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            child: None,
            stream: Some(Box::new(writer)),
            last_sent: None,
        }
    }

    /// Whether commands still reach the daemon
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Draw `path` at cell (x, y) within max_width x max_height cells
    pub fn show(
        &mut self,
        path: &Path,
        x: u16,
        y: u16,
        max_width: u16,
        max_height: u16,
    ) -> Result<()> {
        self.send(OverlayCommand::add(path, x, y, max_width, max_height))
    }

    /// Remove the preview image
    pub fn hide(&mut self) -> Result<()> {
        self.send(OverlayCommand::remove())
    }

    /// Write one command. Repeating the previous command is a no-op.
    pub fn send(&mut self, command: OverlayCommand) -> Result<()> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(());
        };
        if self.last_sent.as_ref() == Some(&command) {
            return Ok(());
        }

        let line = command.to_line()?;
        stream.write_all(line.as_bytes())?;
        stream.flush()?;
        tracing::debug!(command = line.trim_end(), "overlay command sent");
        self.last_sent = Some(command);
        Ok(())
    }

    /// Close the command stream and kill the daemon. Safe to call repeatedly.
    pub fn close(&mut self) {
        // Dropping the stream closes the daemon's stdin
        self.stream = None;
        self.last_sent = None;

        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                tracing::debug!(error = %e, "overlay daemon already gone");
            }
            let _ = child.wait();
            tracing::debug!("overlay daemon stopped");
        }
    }
}
