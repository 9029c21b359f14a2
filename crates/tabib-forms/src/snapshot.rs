//! Form snapshots and the values they carry.
//!
//! A snapshot is the complete set of field values at a point in time. The
//! short variant backs the patient sign-up form; the extended variant adds
//! clinic and schedule data for doctors.

use crate::error::{FormError, FormResult};
use crate::field::FieldId;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabib_i18n::Translator;

/// Read and write access to text field values by identifier.
pub trait FormValues {
	/// Current text of `field`. Fields outside this variant read as empty.
	fn value(&self, field: FieldId) -> &str;

	/// Replace the text of `field`.
	///
	/// # Errors
	///
	/// [`FormError::UnknownField`] when the field is not part of this
	/// variant, [`FormError::NotATextField`] for structured fields.
	fn set_value(&mut self, field: FieldId, value: String) -> FormResult<()>;
}

/// Account fields shared by both sign-up flows.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortSnapshot {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub password: String,
	pub confirm_password: String,
}

impl FormValues for ShortSnapshot {
	fn value(&self, field: FieldId) -> &str {
		match field {
			FieldId::Name => &self.name,
			FieldId::Email => &self.email,
			FieldId::Phone => &self.phone,
			FieldId::Password => &self.password,
			FieldId::ConfirmPassword => &self.confirm_password,
			_ => "",
		}
	}

	fn set_value(&mut self, field: FieldId, value: String) -> FormResult<()> {
		let slot = match field {
			FieldId::Name => &mut self.name,
			FieldId::Email => &mut self.email,
			FieldId::Phone => &mut self.phone,
			FieldId::Password => &mut self.password,
			FieldId::ConfirmPassword => &mut self.confirm_password,
			other => return Err(FormError::UnknownField(other)),
		};
		*slot = value;
		Ok(())
	}
}

fn redact(secret: &str) -> &'static str {
	if secret.is_empty() { "" } else { "<redacted>" }
}

impl fmt::Debug for ShortSnapshot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ShortSnapshot")
			.field("name", &self.name)
			.field("email", &self.email)
			.field("phone", &self.phone)
			.field("password", &redact(&self.password))
			.field("confirm_password", &redact(&self.confirm_password))
			.finish()
	}
}

/// Doctor sign-up snapshot: account fields plus clinic and schedule data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedSnapshot {
	#[serde(flatten)]
	pub account: ShortSnapshot,
	pub specialty: String,
	pub province: String,
	pub area: String,
	pub clinic_location: String,
	pub map_location: String,
	pub about: String,
	pub experience_years: String,
	pub appointment_duration: String,
	pub work_intervals: Vec<WorkInterval>,
}

impl FormValues for ExtendedSnapshot {
	fn value(&self, field: FieldId) -> &str {
		match field {
			FieldId::Specialty => &self.specialty,
			FieldId::Province => &self.province,
			FieldId::Area => &self.area,
			FieldId::ClinicLocation => &self.clinic_location,
			FieldId::MapLocation => &self.map_location,
			FieldId::About => &self.about,
			FieldId::ExperienceYears => &self.experience_years,
			FieldId::AppointmentDuration => &self.appointment_duration,
			FieldId::WorkIntervals => "",
			account => self.account.value(account),
		}
	}

	fn set_value(&mut self, field: FieldId, value: String) -> FormResult<()> {
		let slot = match field {
			FieldId::Specialty => &mut self.specialty,
			FieldId::Province => &mut self.province,
			FieldId::Area => &mut self.area,
			FieldId::ClinicLocation => &mut self.clinic_location,
			FieldId::MapLocation => &mut self.map_location,
			FieldId::About => &mut self.about,
			FieldId::ExperienceYears => &mut self.experience_years,
			FieldId::AppointmentDuration => &mut self.appointment_duration,
			FieldId::WorkIntervals => return Err(FormError::NotATextField(field)),
			account => return self.account.set_value(account, value),
		};
		*slot = value;
		Ok(())
	}
}

/// Day of the working week, Saturday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
	Saturday,
	Sunday,
	Monday,
	Tuesday,
	Wednesday,
	Thursday,
	Friday,
}

impl Weekday {
	pub const ALL: [Weekday; 7] = [
		Weekday::Saturday,
		Weekday::Sunday,
		Weekday::Monday,
		Weekday::Tuesday,
		Weekday::Wednesday,
		Weekday::Thursday,
		Weekday::Friday,
	];

	/// Position in the translator's `weekdays` list
	pub fn index(self) -> usize {
		Weekday::ALL
			.iter()
			.position(|day| *day == self)
			.unwrap_or_default()
	}

	pub fn from_index(index: usize) -> FormResult<Weekday> {
		Weekday::ALL
			.get(index)
			.copied()
			.ok_or(FormError::UnknownWeekday(index))
	}

	fn english(self) -> &'static str {
		match self {
			Weekday::Saturday => "Saturday",
			Weekday::Sunday => "Sunday",
			Weekday::Monday => "Monday",
			Weekday::Tuesday => "Tuesday",
			Weekday::Wednesday => "Wednesday",
			Weekday::Thursday => "Thursday",
			Weekday::Friday => "Friday",
		}
	}

	/// Localized label, falling back to the English name when the catalog
	/// has no `weekdays` list.
	pub fn label(self, translator: &dyn Translator) -> String {
		translator
			.list("weekdays")
			.into_iter()
			.nth(self.index())
			.unwrap_or_else(|| self.english().to_string())
	}
}

/// One working period of a doctor's week.
///
/// Neither ordering between `from` and `to` nor uniqueness of days is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
	pub day: Weekday,
	pub from: String,
	pub to: String,
}

impl WorkInterval {
	/// Build an interval, normalizing both times to `HH:MM`.
	///
	/// # Examples
	///
	/// ```
	/// use tabib_forms::{Weekday, WorkInterval};
	///
	/// let interval = WorkInterval::new(Weekday::Sunday, "9:30", "17:00").unwrap();
	/// assert_eq!(interval.from, "09:30");
	/// assert!(WorkInterval::new(Weekday::Sunday, "25:00", "17:00").is_err());
	/// ```
	pub fn new(day: Weekday, from: &str, to: &str) -> FormResult<Self> {
		Ok(Self {
			day,
			from: normalize_time(from)?,
			to: normalize_time(to)?,
		})
	}
}

fn normalize_time(value: &str) -> FormResult<String> {
	NaiveTime::parse_from_str(value.trim(), "%H:%M")
		.map(|time| time.format("%H:%M").to_string())
		.map_err(|_| FormError::InvalidTime(value.to_string()))
}

/// Image reference returned by the device image picker.
///
/// The URI is opaque to this crate; dimensions and MIME type are best effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedImage {
	pub uri: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub width: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub height: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mime_type: Option<String>,
}

impl SelectedImage {
	pub fn new(uri: impl Into<String>) -> Self {
		Self {
			uri: uri.into(),
			width: None,
			height: None,
			mime_type: None,
		}
	}

	pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
		self.width = Some(width);
		self.height = Some(height);
		self
	}

	pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = Some(mime_type.into());
		self
	}

	/// Reported MIME type, or one guessed from the URI extension.
	///
	/// # Examples
	///
	/// ```
	/// use tabib_forms::SelectedImage;
	///
	/// let image = SelectedImage::new("file:///tmp/avatar.PNG");
	/// assert_eq!(image.mime_type_or_guess(), Some("image/png"));
	/// ```
	pub fn mime_type_or_guess(&self) -> Option<&str> {
		if let Some(mime) = self.mime_type.as_deref() {
			return Some(mime);
		}
		let extension = self.uri.rsplit_once('.')?.1.to_ascii_lowercase();
		match extension.as_str() {
			"jpg" | "jpeg" => Some("image/jpeg"),
			"png" => Some("image/png"),
			"webp" => Some("image/webp"),
			"heic" => Some("image/heic"),
			"gif" => Some("image/gif"),
			_ => None,
		}
	}
}
