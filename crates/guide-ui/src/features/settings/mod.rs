//! Settings feature slice.
//!
//! # Design
//! - Keep settings rendering in the view module.
//! - Delegate state ownership and persistence to the injected dispatcher.

pub mod view;
