//! Feature slices composed by the app shell.

pub mod settings;
