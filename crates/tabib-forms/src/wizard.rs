use crate::error_map::ErrorMap;
use crate::snapshot::FormValues;
use crate::validators::validate_step;
use serde::{Deserialize, Serialize};
use tabib_i18n::Translator;

/// A page of the doctor sign-up wizard.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
	/// Step 1: name, email, phone, password
	#[default]
	Account,
	/// Step 2: specialty, province, area, clinic location, about
	Clinic,
	/// Step 3: working days, appointment duration, photo
	Schedule,
}

impl StepId {
	pub const ALL: [StepId; 3] = [StepId::Account, StepId::Clinic, StepId::Schedule];

	/// 1-based step number, as shown in the progress header
	pub fn number(self) -> usize {
		match self {
			StepId::Account => 1,
			StepId::Clinic => 2,
			StepId::Schedule => 3,
		}
	}

	pub fn next(self) -> Option<StepId> {
		match self {
			StepId::Account => Some(StepId::Clinic),
			StepId::Clinic => Some(StepId::Schedule),
			StepId::Schedule => None,
		}
	}

	pub fn previous(self) -> Option<StepId> {
		match self {
			StepId::Account => None,
			StepId::Clinic => Some(StepId::Account),
			StepId::Schedule => Some(StepId::Clinic),
		}
	}

	/// Steps before this one; these are re-validated before submission
	pub fn preceding(self) -> &'static [StepId] {
		match self {
			StepId::Account => &[],
			StepId::Clinic => &[StepId::Account],
			StepId::Schedule => &[StepId::Account, StepId::Clinic],
		}
	}
}

/// Result of a forward navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
	/// The current step was clean; the cursor now points at this step.
	Moved(StepId),
	/// The current step failed validation; the cursor did not move.
	Blocked(ErrorMap),
	/// Already on the last step. Submission is the only way forward.
	AtLastStep,
}

/// Cursor over the wizard steps.
///
/// Moves forward one step at a time, only when the current step validates.
/// Moves back one step at a time, unconditionally. No transition skips a
/// step.
///
/// # Examples
///
/// ```
/// use tabib_forms::{Advance, ExtendedSnapshot, StepCursor, StepId};
/// use tabib_i18n::KeyEcho;
///
/// let mut cursor = StepCursor::new();
/// let snapshot = ExtendedSnapshot::default();
///
/// // An empty snapshot cannot leave the account step
/// assert!(matches!(cursor.advance(&snapshot, &KeyEcho), Advance::Blocked(_)));
/// assert_eq!(cursor.current(), StepId::Account);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCursor {
	current: StepId,
}

impl StepCursor {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn current(&self) -> StepId {
		self.current
	}

	pub fn is_first_step(&self) -> bool {
		self.current.previous().is_none()
	}

	pub fn is_last_step(&self) -> bool {
		self.current.next().is_none()
	}

	pub fn total_steps(&self) -> usize {
		StepId::ALL.len()
	}

	/// Validate the current step and move forward if it is clean.
	pub fn advance(&mut self, values: &dyn FormValues, translator: &dyn Translator) -> Advance {
		let Some(next) = self.current.next() else {
			return Advance::AtLastStep;
		};

		let errors = validate_step(values, self.current, translator);
		if !errors.is_empty() {
			tracing::debug!(
				"Step {} blocked by {} field error(s)",
				self.current.number(),
				errors.len()
			);
			return Advance::Blocked(errors);
		}

		self.current = next;
		Advance::Moved(next)
	}

	/// Move back one step without validation.
	///
	/// Returns `false` on the first step, where there is nowhere to go back
	/// to within the wizard.
	pub fn back(&mut self) -> bool {
		match self.current.previous() {
			Some(previous) => {
				self.current = previous;
				true
			}
			None => false,
		}
	}

	pub fn progress_percentage(&self) -> f32 {
		(self.current.number() as f32 / self.total_steps() as f32) * 100.0
	}
}
