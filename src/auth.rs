//! Sign-up service contract
//!
//! This module re-exports everything from `tabib-auth`.

pub use tabib_auth::*;
