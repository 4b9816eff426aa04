//! Configuration management for calplan.
//!
//! This module handles loading configuration from `~/.calplan/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig};
