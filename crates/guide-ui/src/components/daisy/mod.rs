#![doc(hidden)]

//! DaisyUI-inspired component wrappers organised with Atomic Design layers.

pub mod atoms;

pub use atoms::*;
