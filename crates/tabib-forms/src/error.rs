//! Error types for form state handling.

use crate::field::FieldId;
use thiserror::Error;

/// Errors raised by invalid operations on form state.
///
/// Field validation failures are not errors: they are reported through
/// [`ErrorMap`](crate::ErrorMap).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
	/// The field does not belong to this form variant.
	#[error("field {0} is not part of this form")]
	UnknownField(FieldId),

	/// The field holds structured data and cannot be set from text.
	#[error("field {0} cannot be set from text")]
	NotATextField(FieldId),

	/// A work interval time did not have the `HH:MM` shape.
	#[error("invalid time {0:?}, expected HH:MM")]
	InvalidTime(String),

	/// Weekday index outside the seven-day range.
	#[error("weekday index {0} out of range")]
	UnknownWeekday(usize),

	/// Removal index outside the current interval list.
	#[error("work interval index {index} out of range (len {len})")]
	IntervalIndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;
