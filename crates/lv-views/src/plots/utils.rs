//! Utilities for chart outputs

pub mod colors;

pub use colors::Palette;
