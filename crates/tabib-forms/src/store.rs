//! Per-screen form state.

use crate::error::{FormError, FormResult};
use crate::error_map::ErrorMap;
use crate::field::FieldId;
use crate::snapshot::{ExtendedSnapshot, FormValues, SelectedImage, ShortSnapshot, WorkInterval};
use crate::validators::validate_all;
use crate::wizard::{Advance, StepCursor, StepId};
use tabib_i18n::Translator;

/// In-progress field values, the latest error map, the step cursor and the
/// selected image of one screen instance.
///
/// The store is owned exclusively by its screen and does not outlive it.
///
/// # Examples
///
/// ```
/// use tabib_forms::{FieldId, FormStore};
/// use tabib_i18n::KeyEcho;
///
/// let mut store = FormStore::short();
/// store.set_field(FieldId::Email, "bad").unwrap();
/// assert!(!store.validate_for_submission(&KeyEcho));
/// assert_eq!(store.errors().get(FieldId::Email), Some("email_invalid"));
/// ```
#[derive(Debug, Clone)]
pub struct FormStore<S> {
	snapshot: S,
	errors: ErrorMap,
	cursor: Option<StepCursor>,
	image: Option<SelectedImage>,
}

impl FormStore<ShortSnapshot> {
	/// Store for the single-step account form; it has no cursor.
	pub fn short() -> Self {
		Self {
			snapshot: ShortSnapshot::default(),
			errors: ErrorMap::new(),
			cursor: None,
			image: None,
		}
	}
}

impl FormStore<ExtendedSnapshot> {
	/// Store for the three-step doctor form, starting on the account step.
	pub fn extended() -> Self {
		Self {
			snapshot: ExtendedSnapshot::default(),
			errors: ErrorMap::new(),
			cursor: Some(StepCursor::new()),
			image: None,
		}
	}

	/// Append a work interval picked by the user.
	pub fn add_work_interval(&mut self, interval: WorkInterval) {
		self.snapshot.work_intervals.push(interval);
	}

	/// Remove the interval at `index`; later intervals shift down by one.
	///
	/// # Errors
	///
	/// [`FormError::IntervalIndexOutOfRange`] if `index` is past the end.
	pub fn remove_work_interval(&mut self, index: usize) -> FormResult<WorkInterval> {
		let len = self.snapshot.work_intervals.len();
		if index >= len {
			return Err(FormError::IntervalIndexOutOfRange { index, len });
		}
		Ok(self.snapshot.work_intervals.remove(index))
	}

	pub fn work_intervals(&self) -> &[WorkInterval] {
		&self.snapshot.work_intervals
	}
}

impl<S: FormValues> FormStore<S> {
	pub fn snapshot(&self) -> &S {
		&self.snapshot
	}

	/// Update one field. The error map is left as is until the next
	/// validation pass.
	pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) -> FormResult<()> {
		self.snapshot.set_value(field, value.into())
	}

	pub fn errors(&self) -> &ErrorMap {
		&self.errors
	}

	pub fn replace_errors(&mut self, errors: ErrorMap) {
		self.errors = errors;
	}

	pub fn clear_errors(&mut self) {
		self.errors = ErrorMap::new();
	}

	/// Active step; the short form is always on the account step.
	pub fn current_step(&self) -> StepId {
		self.cursor
			.map(|cursor| cursor.current())
			.unwrap_or(StepId::Account)
	}

	pub fn is_multi_step(&self) -> bool {
		self.cursor.is_some()
	}

	/// Steps that must validate before the form may be submitted.
	pub fn submission_steps(&self) -> &'static [StepId] {
		match self.cursor {
			Some(_) => StepId::Schedule.preceding(),
			None => &[StepId::Account],
		}
	}

	/// Attempt to move to the next step; the error map is rebuilt from the
	/// attempt either way.
	pub fn advance(&mut self, translator: &dyn Translator) -> Advance {
		let Some(cursor) = self.cursor.as_mut() else {
			return Advance::AtLastStep;
		};
		let outcome = cursor.advance(&self.snapshot, translator);
		self.errors = match &outcome {
			Advance::Blocked(errors) => errors.clone(),
			_ => ErrorMap::new(),
		};
		outcome
	}

	/// Move back one step without validation. Returns `false` when already
	/// on the first step (or on a single-step form).
	pub fn back(&mut self) -> bool {
		let moved = self.cursor.as_mut().is_some_and(StepCursor::back);
		if moved {
			self.errors = ErrorMap::new();
		}
		moved
	}

	/// Re-validate every step that gates submission and store the combined
	/// result.
	pub fn validate_for_submission(&mut self, translator: &dyn Translator) -> bool {
		self.errors = validate_all(&self.snapshot, self.submission_steps(), translator);
		self.errors.is_empty()
	}

	pub fn progress_percentage(&self) -> f32 {
		self.cursor
			.map(|cursor| cursor.progress_percentage())
			.unwrap_or(100.0)
	}

	pub fn image(&self) -> Option<&SelectedImage> {
		self.image.as_ref()
	}

	/// Apply an image picker result. `None` (cancelled picker) keeps the
	/// current image; an image is only ever replaced, never cleared.
	pub fn set_image(&mut self, image: Option<SelectedImage>) -> bool {
		match image {
			Some(image) => {
				self.image = Some(image);
				true
			}
			None => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::snapshot::Weekday;
	use rstest::rstest;
	use tabib_i18n::KeyEcho;

	#[rstest]
	fn test_short_store_has_single_step() {
		let mut store = FormStore::short();
		assert!(!store.is_multi_step());
		assert_eq!(store.advance(&KeyEcho), Advance::AtLastStep);
		assert!(!store.back());
		assert_eq!(store.submission_steps(), &[StepId::Account]);
	}

	#[rstest]
	fn test_blocked_advance_stores_errors_and_edit_keeps_them() {
		let mut store = FormStore::extended();
		assert!(matches!(store.advance(&KeyEcho), Advance::Blocked(_)));
		assert!(store.errors().contains(FieldId::Name));

		store.set_field(FieldId::Name, "Ali").unwrap();
		assert!(store.errors().contains(FieldId::Name));
	}

	#[rstest]
	fn test_cancelled_picker_keeps_image() {
		let mut store = FormStore::extended();
		assert!(store.set_image(Some(SelectedImage::new("file:///a.jpg"))));
		assert!(!store.set_image(None));
		assert_eq!(store.image().unwrap().uri, "file:///a.jpg");

		assert!(store.set_image(Some(SelectedImage::new("file:///b.jpg"))));
		assert_eq!(store.image().unwrap().uri, "file:///b.jpg");
	}

	#[rstest]
	fn test_remove_out_of_range_interval() {
		let mut store = FormStore::extended();
		store.add_work_interval(WorkInterval::new(Weekday::Sunday, "09:00", "13:00").unwrap());
		assert_eq!(
			store.remove_work_interval(1),
			Err(FormError::IntervalIndexOutOfRange { index: 1, len: 1 })
		);
		assert_eq!(store.work_intervals().len(), 1);
	}
}
