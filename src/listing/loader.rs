//! Directory listing policy
//!
//! Folders first, then images, each group sorted by name. Hidden entries and
//! anything that is not a folder or a supported image are dropped.

use std::fs;
use std::path::Path;

use super::entry::{is_hidden_name, is_image_name, Entry};

/// Read `dir` and build the browser listing.
///
/// A read failure yields an empty listing.
pub fn load_entries(dir: &Path) -> Vec<Entry> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "directory read failed");
            return Vec::new();
        }
    };

    let mut folders = Vec::new();
    let mut files = Vec::new();

    for dir_entry in read.filter_map(|e| e.ok()) {
        let name = dir_entry.file_name();
        if is_hidden_name(&name) {
            continue;
        }

        // Follow symlinks so a link to a folder browses like a folder
        let is_dir = dir_entry.path().is_dir();
        if is_dir {
            folders.push(Entry::dir(name));
        } else if is_image_name(&name) {
            files.push(Entry::image(name));
        }
    }

    folders.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    folders.extend(files);
    folders
}
