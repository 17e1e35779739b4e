//! Reusable presentational components.

pub mod daisy;
