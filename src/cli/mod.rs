//! Command-line interface for calplan.

pub mod args;
pub mod commands;
