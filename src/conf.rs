//! Application settings
//!
//! This module re-exports everything from `tabib-conf`.

pub use tabib_conf::*;
