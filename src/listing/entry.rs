//! Directory entry definition

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Image extensions shown in the listing (compared lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// A single row in the browser listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name for display (lossy for non-UTF-8 names)
    pub name: String,
    /// File name as stored on disk; used to build paths
    pub file_name: OsString,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Whether this is a supported image file
    pub is_image: bool,
}

impl Entry {
    fn new(file_name: OsString, is_dir: bool) -> Self {
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            is_dir,
            is_image: !is_dir,
        }
    }

    /// Create a directory entry
    pub fn dir(file_name: impl Into<OsString>) -> Self {
        Self::new(file_name.into(), true)
    }

    /// Create an image entry
    pub fn image(file_name: impl Into<OsString>) -> Self {
        Self::new(file_name.into(), false)
    }

    /// Full path of this entry inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// Whether a file name starts with a dot
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Check whether a file name carries a supported image extension
pub fn is_image_name(name: impl AsRef<Path>) -> bool {
    name.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
