//! Unified error types for wallview
//!
//! Library code returns these; the binary wraps them in `anyhow` at the edges.

/// Unified error type for wallview operations
#[derive(Debug, thiserror::Error)]
pub enum WallviewError {
    /// I/O errors (file operations, subprocess pipes, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Compositor command failed or produced unreadable output
    #[error("{0}")]
    Compositor(String),

    /// Compositor reported no active monitors
    #[error("No monitors found")]
    NoMonitors,

    /// Overlay daemon errors
    #[error("Overlay error: {0}")]
    Overlay(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Bad command-line arguments or start directory
    #[error("{0}")]
    Usage(String),
}

/// Convenience Result type using WallviewError
pub type Result<T> = std::result::Result<T, WallviewError>;

impl WallviewError {
    /// Create a Compositor error
    pub fn compositor(msg: impl Into<String>) -> Self {
        Self::Compositor(msg.into())
    }

    /// Create an Overlay error
    pub fn overlay(msg: impl Into<String>) -> Self {
        Self::Overlay(msg.into())
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

impl From<serde_json::Error> for WallviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::Compositor(format!("invalid JSON: {}", err))
    }
}
