//! Form state, validation and the sign-up wizard
//!
//! This module re-exports everything from `tabib-forms`.

pub use tabib_forms::*;
