//! Field identifiers and descriptors.
//!
//! A descriptor is a small immutable record `{id, label_key, kind, required}`
//! handed to a single generic rendering function. Picker-style fields are
//! modelled as explicit selection kinds instead of read-only text inputs.

use crate::wizard::StepId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of every field used by the sign-up flows.
///
/// Serialized with the camelCase names used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
	Name,
	Email,
	Phone,
	Password,
	ConfirmPassword,
	Specialty,
	Province,
	Area,
	ClinicLocation,
	MapLocation,
	About,
	ExperienceYears,
	AppointmentDuration,
	WorkIntervals,
}

impl FieldId {
	/// Fields of the short (single step) account form.
	pub const ACCOUNT: [FieldId; 5] = [
		FieldId::Name,
		FieldId::Email,
		FieldId::Phone,
		FieldId::Password,
		FieldId::ConfirmPassword,
	];

	pub const ALL: [FieldId; 14] = [
		FieldId::Name,
		FieldId::Email,
		FieldId::Phone,
		FieldId::Password,
		FieldId::ConfirmPassword,
		FieldId::Specialty,
		FieldId::Province,
		FieldId::Area,
		FieldId::ClinicLocation,
		FieldId::MapLocation,
		FieldId::About,
		FieldId::ExperienceYears,
		FieldId::AppointmentDuration,
		FieldId::WorkIntervals,
	];

	/// Wire name of the field
	pub const fn as_str(self) -> &'static str {
		match self {
			FieldId::Name => "name",
			FieldId::Email => "email",
			FieldId::Phone => "phone",
			FieldId::Password => "password",
			FieldId::ConfirmPassword => "confirmPassword",
			FieldId::Specialty => "specialty",
			FieldId::Province => "province",
			FieldId::Area => "area",
			FieldId::ClinicLocation => "clinicLocation",
			FieldId::MapLocation => "mapLocation",
			FieldId::About => "about",
			FieldId::ExperienceYears => "experienceYears",
			FieldId::AppointmentDuration => "appointmentDuration",
			FieldId::WorkIntervals => "workIntervals",
		}
	}

	/// Translation key of the field label
	pub const fn label_key(self) -> &'static str {
		match self {
			FieldId::Name => "name",
			FieldId::Email => "email",
			FieldId::Phone => "phone",
			FieldId::Password => "password",
			FieldId::ConfirmPassword => "confirm_password",
			FieldId::Specialty => "specialty",
			FieldId::Province => "province",
			FieldId::Area => "area",
			FieldId::ClinicLocation => "clinic_location",
			FieldId::MapLocation => "map_location",
			FieldId::About => "about",
			FieldId::ExperienceYears => "experience_years",
			FieldId::AppointmentDuration => "appointment_duration",
			FieldId::WorkIntervals => "work_days",
		}
	}

	/// Look a field up by its wire name
	///
	/// # Examples
	///
	/// ```
	/// use tabib_forms::FieldId;
	///
	/// assert_eq!(FieldId::from_wire_name("clinicLocation"), Some(FieldId::ClinicLocation));
	/// assert_eq!(FieldId::from_wire_name("clinic_location"), None);
	/// ```
	pub fn from_wire_name(name: &str) -> Option<FieldId> {
		FieldId::ALL.into_iter().find(|field| field.as_str() == name)
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Soft keyboard hint for free-text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyboard {
	#[default]
	Default,
	Email,
	Phone,
	Numeric,
}

/// How a field is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
	/// Typed text; `secure` fields are masked on entry.
	FreeText {
		secure: bool,
		keyboard: Keyboard,
		multiline: bool,
	},
	/// Exactly one value picked from a prompt.
	SingleSelect { options: Vec<String> },
	/// Values picked repeatedly from a prompt, each pick appending one entry.
	MultiSelect { options: Vec<String> },
}

impl FieldKind {
	pub fn text(keyboard: Keyboard) -> Self {
		FieldKind::FreeText {
			secure: false,
			keyboard,
			multiline: false,
		}
	}

	pub fn secure() -> Self {
		FieldKind::FreeText {
			secure: true,
			keyboard: Keyboard::Default,
			multiline: false,
		}
	}

	pub fn multiline() -> Self {
		FieldKind::FreeText {
			secure: false,
			keyboard: Keyboard::Default,
			multiline: true,
		}
	}

	pub fn is_secure(&self) -> bool {
		matches!(self, FieldKind::FreeText { secure: true, .. })
	}

	pub fn options(&self) -> &[String] {
		match self {
			FieldKind::FreeText { .. } => &[],
			FieldKind::SingleSelect { options } | FieldKind::MultiSelect { options } => options,
		}
	}

	/// Whether `value` is an acceptable pick. Free text accepts anything.
	pub fn accepts(&self, value: &str) -> bool {
		match self {
			FieldKind::FreeText { .. } => true,
			FieldKind::SingleSelect { options } | FieldKind::MultiSelect { options } => {
				options.iter().any(|option| option == value)
			}
		}
	}
}

/// Immutable description of one rendered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
	pub id: FieldId,
	pub label_key: &'static str,
	pub kind: FieldKind,
	pub required: bool,
}

impl FieldDescriptor {
	pub fn new(id: FieldId, kind: FieldKind, required: bool) -> Self {
		Self {
			id,
			label_key: id.label_key(),
			kind,
			required,
		}
	}
}

/// Descriptors for the account step (also the whole short form).
///
/// Password fields are secure: entry is masked.
pub fn account_fields() -> Vec<FieldDescriptor> {
	vec![
		FieldDescriptor::new(FieldId::Name, FieldKind::text(Keyboard::Default), true),
		FieldDescriptor::new(FieldId::Email, FieldKind::text(Keyboard::Email), true),
		FieldDescriptor::new(FieldId::Phone, FieldKind::text(Keyboard::Phone), true),
		FieldDescriptor::new(FieldId::Password, FieldKind::secure(), true),
		FieldDescriptor::new(FieldId::ConfirmPassword, FieldKind::secure(), true),
	]
}

/// Descriptors for the clinic step; selection options come from the
/// specialty and translation collaborators.
pub fn clinic_fields(specialties: Vec<String>, provinces: Vec<String>) -> Vec<FieldDescriptor> {
	vec![
		FieldDescriptor::new(
			FieldId::Specialty,
			FieldKind::SingleSelect {
				options: specialties,
			},
			true,
		),
		FieldDescriptor::new(
			FieldId::Province,
			FieldKind::SingleSelect { options: provinces },
			true,
		),
		FieldDescriptor::new(FieldId::Area, FieldKind::text(Keyboard::Default), true),
		FieldDescriptor::new(
			FieldId::ClinicLocation,
			FieldKind::text(Keyboard::Default),
			true,
		),
		FieldDescriptor::new(
			FieldId::MapLocation,
			FieldKind::text(Keyboard::Default),
			false,
		),
		FieldDescriptor::new(
			FieldId::ExperienceYears,
			FieldKind::text(Keyboard::Numeric),
			false,
		),
		FieldDescriptor::new(FieldId::About, FieldKind::multiline(), false),
	]
}

/// Descriptors for the schedule step.
pub fn schedule_fields(weekdays: Vec<String>, durations: Vec<String>) -> Vec<FieldDescriptor> {
	vec![
		FieldDescriptor::new(
			FieldId::WorkIntervals,
			FieldKind::MultiSelect { options: weekdays },
			false,
		),
		FieldDescriptor::new(
			FieldId::AppointmentDuration,
			FieldKind::SingleSelect { options: durations },
			false,
		),
	]
}

/// Fields validated on each step, in display order.
pub fn step_field_ids(step: StepId) -> &'static [FieldId] {
	match step {
		StepId::Account => &FieldId::ACCOUNT,
		StepId::Clinic => &[
			FieldId::Specialty,
			FieldId::Province,
			FieldId::Area,
			FieldId::ClinicLocation,
			FieldId::MapLocation,
			FieldId::ExperienceYears,
			FieldId::About,
		],
		StepId::Schedule => &[FieldId::WorkIntervals, FieldId::AppointmentDuration],
	}
}
