//! Loader configuration

pub mod loader_config;
pub mod null_handling;

pub use loader_config::*;
pub use null_handling::*;
