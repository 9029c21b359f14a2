//! Form state and validation for Tabib sign-up flows
//!
//! This crate holds everything a registration screen owns while the user
//! fills it in:
//! - Snapshots of field values (short account form, extended doctor form)
//! - Work intervals and the selected profile image
//! - Field descriptors with an explicit field kind (free text, single or
//!   multiple selection)
//! - The validation engine (pure: snapshot and step in, error map out)
//! - The three-step wizard cursor gated by validation
//! - [`FormStore`], tying the above together per screen

pub mod error;
pub mod error_map;
pub mod field;
pub mod snapshot;
pub mod store;
pub mod validators;
pub mod wizard;

pub use error::{FormError, FormResult};
pub use error_map::ErrorMap;
pub use field::{FieldDescriptor, FieldId, FieldKind, Keyboard};
pub use snapshot::{ExtendedSnapshot, FormValues, SelectedImage, ShortSnapshot, Weekday, WorkInterval};
pub use store::FormStore;
pub use validators::{ErrorCode, MIN_PASSWORD_LENGTH, is_valid, validate_all, validate_codes, validate_step};
pub use wizard::{Advance, StepCursor, StepId};
