//! Validation engine for the sign-up steps.
//!
//! Every rule of a step is checked in the same pass, so the resulting
//! [`ErrorMap`] may hold several entries at once. Validation is pure: the
//! same snapshot and step always produce the same result.

use crate::error_map::ErrorMap;
use crate::field::FieldId;
use crate::snapshot::FormValues;
use crate::wizard::StepId;
use regex::Regex;
use std::sync::LazyLock;
use tabib_i18n::Translator;

// Structural email shape: <non-whitespace>@<non-whitespace>.<non-whitespace>.
//
// Deliberately loose and unanchored; address grammar is the backend's concern.
static EMAIL_SHAPE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_SHAPE: invalid regex pattern"));

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validation failure kinds. Each maps to a translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
	NameRequired,
	EmailRequired,
	EmailInvalid,
	PhoneRequired,
	PasswordRequired,
	PasswordLength,
	PasswordMismatch,
	SpecialtyRequired,
	ProvinceRequired,
	AreaRequired,
	ClinicLocationRequired,
}

impl ErrorCode {
	/// Translation key of the user-facing message
	pub const fn key(self) -> &'static str {
		match self {
			ErrorCode::NameRequired => "name_required",
			ErrorCode::EmailRequired => "email_required",
			ErrorCode::EmailInvalid => "email_invalid",
			ErrorCode::PhoneRequired => "phone_required",
			ErrorCode::PasswordRequired => "password_required",
			ErrorCode::PasswordLength => "password_length",
			ErrorCode::PasswordMismatch => "password_mismatch",
			ErrorCode::SpecialtyRequired => "specialty_required",
			ErrorCode::ProvinceRequired => "province_required",
			ErrorCode::AreaRequired => "area_required",
			ErrorCode::ClinicLocationRequired => "clinic_location_required",
		}
	}
}

fn blank(value: &str) -> bool {
	value.trim().is_empty()
}

fn validate_account(values: &dyn FormValues, codes: &mut Vec<(FieldId, ErrorCode)>) {
	if blank(values.value(FieldId::Name)) {
		codes.push((FieldId::Name, ErrorCode::NameRequired));
	}

	let email = values.value(FieldId::Email);
	if blank(email) {
		codes.push((FieldId::Email, ErrorCode::EmailRequired));
	} else if !EMAIL_SHAPE.is_match(email) {
		codes.push((FieldId::Email, ErrorCode::EmailInvalid));
	}

	if blank(values.value(FieldId::Phone)) {
		codes.push((FieldId::Phone, ErrorCode::PhoneRequired));
	}

	// Passwords are not trimmed: whitespace is part of the secret.
	let password = values.value(FieldId::Password);
	if password.is_empty() {
		codes.push((FieldId::Password, ErrorCode::PasswordRequired));
	} else if password.chars().count() < MIN_PASSWORD_LENGTH {
		codes.push((FieldId::Password, ErrorCode::PasswordLength));
	}

	// Checked even when the password itself failed.
	if values.value(FieldId::ConfirmPassword) != password {
		codes.push((FieldId::ConfirmPassword, ErrorCode::PasswordMismatch));
	}
}

fn validate_clinic(values: &dyn FormValues, codes: &mut Vec<(FieldId, ErrorCode)>) {
	let required = [
		(FieldId::Specialty, ErrorCode::SpecialtyRequired),
		(FieldId::Province, ErrorCode::ProvinceRequired),
		(FieldId::Area, ErrorCode::AreaRequired),
		(FieldId::ClinicLocation, ErrorCode::ClinicLocationRequired),
	];
	for (field, code) in required {
		if blank(values.value(field)) {
			codes.push((field, code));
		}
	}
}

/// Translator-free core of the engine.
///
/// # Examples
///
/// ```
/// use tabib_forms::{ErrorCode, FieldId, ShortSnapshot, StepId, validate_codes};
///
/// let snapshot = ShortSnapshot {
///     name: "Ali".into(),
///     email: "a@b.com".into(),
///     phone: "0770".into(),
///     password: "abc".into(),
///     confirm_password: "abc".into(),
/// };
/// assert_eq!(
///     validate_codes(&snapshot, StepId::Account),
///     vec![(FieldId::Password, ErrorCode::PasswordLength)]
/// );
/// ```
pub fn validate_codes(values: &dyn FormValues, step: StepId) -> Vec<(FieldId, ErrorCode)> {
	let mut codes = Vec::new();
	match step {
		StepId::Account => validate_account(values, &mut codes),
		StepId::Clinic => validate_clinic(values, &mut codes),
		StepId::Schedule => {}
	}
	codes
}

/// Validate one step and translate the failures into an [`ErrorMap`].
pub fn validate_step(values: &dyn FormValues, step: StepId, translator: &dyn Translator) -> ErrorMap {
	validate_codes(values, step)
		.into_iter()
		.map(|(field, code)| (field, translator.text(code.key())))
		.collect()
}

/// `true` when `step` has no validation failures
pub fn is_valid(values: &dyn FormValues, step: StepId) -> bool {
	validate_codes(values, step).is_empty()
}

/// Validate several steps and combine their failures.
pub fn validate_all(values: &dyn FormValues, steps: &[StepId], translator: &dyn Translator) -> ErrorMap {
	let mut errors = ErrorMap::new();
	for step in steps {
		errors.merge(validate_step(values, *step, translator));
	}
	errors
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::snapshot::{ExtendedSnapshot, ShortSnapshot};
	use rstest::rstest;

	fn account(email: &str) -> ShortSnapshot {
		ShortSnapshot {
			name: "Ali".into(),
			email: email.into(),
			phone: "0770".into(),
			password: "abcdef".into(),
			confirm_password: "abcdef".into(),
		}
	}

	#[rstest]
	#[case("a@b.com", true)]
	#[case("first.last@clinic.iq", true)]
	#[case("bad", false)]
	#[case("a@b", false)]
	#[case("@b.com", false)]
	#[case("a@.com", false)]
	// Loose shape: surrounding text is tolerated
	#[case("contact: a@b.com", true)]
	fn test_email_shape(#[case] email: &str, #[case] valid: bool) {
		assert_eq!(is_valid(&account(email), StepId::Account), valid, "email: {}", email);
	}

	#[rstest]
	fn test_blank_email_is_required_not_invalid() {
		let codes = validate_codes(&account("   "), StepId::Account);
		assert_eq!(codes, vec![(FieldId::Email, ErrorCode::EmailRequired)]);
	}

	#[rstest]
	fn test_whitespace_password_is_not_required_error() {
		let mut snapshot = account("a@b.com");
		snapshot.password = "      ".into();
		snapshot.confirm_password = "      ".into();
		assert!(is_valid(&snapshot, StepId::Account));
	}

	#[rstest]
	fn test_password_length_counts_characters() {
		let mut snapshot = account("a@b.com");
		// Six two-byte characters
		snapshot.password = "ابتثجح".into();
		snapshot.confirm_password = "ابتثجح".into();
		assert!(is_valid(&snapshot, StepId::Account));
	}

	#[rstest]
	fn test_clinic_step_requires_four_fields() {
		let snapshot = ExtendedSnapshot::default();
		let fields: Vec<FieldId> = validate_codes(&snapshot, StepId::Clinic)
			.into_iter()
			.map(|(field, _)| field)
			.collect();
		assert_eq!(
			fields,
			vec![
				FieldId::Specialty,
				FieldId::Province,
				FieldId::Area,
				FieldId::ClinicLocation
			]
		);
	}

	#[rstest]
	fn test_schedule_step_has_no_rules() {
		assert!(is_valid(&ExtendedSnapshot::default(), StepId::Schedule));
	}
}
