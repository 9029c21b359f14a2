//! Translation collaborator and message catalogs
//!
//! This module re-exports everything from `tabib-i18n`.

pub use tabib_i18n::*;
