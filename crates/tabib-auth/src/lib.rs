//! Sign-up service contract for Tabib clients
//!
//! The authentication backend is an external collaborator. This crate fixes
//! the shape the client depends on:
//!
//! - [`SignUpRequest`]: the transformed snapshot, the account kind
//!   discriminator (`"doctor"` / `"user"`) and, for doctors, the image
//! - [`SignUpSuccess`]: success, optionally carrying a deep link
//! - [`SignUpError`]: a rejection carrying a human-readable message
//! - [`SignUpService`]: the asynchronous call itself

pub mod error;
pub mod request;
pub mod service;

pub use error::{SignUpError, SignUpResult};
pub use request::{AccountKind, SignUpRequest, SignUpSuccess};
pub use service::SignUpService;
