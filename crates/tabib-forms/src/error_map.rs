use crate::field::FieldId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field to message results of the most recent validation pass.
///
/// Absence of a key means the field is currently valid. An `ErrorMap` is
/// always rebuilt from scratch; it is never patched field by field.
///
/// # Examples
///
/// ```
/// use tabib_forms::{ErrorMap, FieldId};
///
/// let mut errors = ErrorMap::new();
/// errors.insert(FieldId::Email, "email_invalid");
/// assert_eq!(errors.get(FieldId::Email), Some("email_invalid"));
/// assert!(errors.get(FieldId::Name).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap(BTreeMap<FieldId, String>);

impl ErrorMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	pub fn get(&self, field: FieldId) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: FieldId) -> bool {
		self.0.contains_key(&field)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Fold another pass into this one, as done when several steps are
	/// validated together before submission.
	pub fn merge(&mut self, other: ErrorMap) {
		self.0.extend(other.0);
	}

	pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
		self.0.keys().copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
		self.0.iter().map(|(field, message)| (*field, message.as_str()))
	}
}

impl FromIterator<(FieldId, String)> for ErrorMap {
	fn from_iter<I: IntoIterator<Item = (FieldId, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
