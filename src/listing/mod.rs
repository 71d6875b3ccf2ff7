//! Listing module - Directory entries and the reload policy

pub mod entry;
pub mod loader;

pub use entry::{is_hidden_name, is_image_name, Entry, IMAGE_EXTENSIONS};
pub use loader::load_entries;
