//! Core, DOM-free primitives and helpers for the Web UI.
pub mod settings;
pub mod store;
