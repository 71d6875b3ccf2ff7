//! Core module - Browser state and lifecycle phase

pub mod mode;
pub mod state;

pub use mode::Phase;
pub use state::BrowserState;
