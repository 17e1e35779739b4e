//! Single-purpose controls.

pub mod toggle;

pub use toggle::{Toggle, ToggleProps};
