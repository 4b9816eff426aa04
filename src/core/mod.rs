//! Core utilities for calplan.
//!
//! This module provides the date parsing helpers shared by the header
//! parser and the renderers.

mod date;

pub use date::{parse_iso_date, parse_weekday, weekday_abbrev};
