#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const TROVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod hunter;
pub mod style;

// Re-exports for convenience
pub use hunter::Hunter;
pub use style::GameStyle;
