//! Specialty label mapping.
//!
//! Specialties are shown to doctors in the active language but must be sent
//! to the backend as canonical identifiers. The mapping is a pure lookup; the
//! reverse enumeration feeds the specialty selection prompt.

use crate::error::{I18nError, I18nResult};
use crate::translation::{Translation, Translator};

/// Translation key holding the specialty table.
pub const SPECIALTIES_KEY: &str = "specialties";

/// Canonical specialty identifier to localized labels.
///
/// # Examples
///
/// ```
/// use tabib_i18n::SpecialtyMap;
///
/// let mut map = SpecialtyMap::new();
/// map.insert("cardiology", vec!["Cardiology".into(), "قلبية".into()]);
/// map.insert("dermatology", vec!["Dermatology".into(), "جلدية".into()]);
///
/// assert_eq!(map.to_canonical("قلبية"), "cardiology");
/// // Unknown labels are passed through unchanged
/// assert_eq!(map.to_canonical("Other"), "Other");
/// assert_eq!(map.labels().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpecialtyMap {
	entries: Vec<(String, Vec<String>)>,
}

impl SpecialtyMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build the map from the structured [`SPECIALTIES_KEY`] entry.
	///
	/// # Errors
	///
	/// Returns [`I18nError::UnexpectedShape`] when the entry is not a map.
	pub fn from_translator(translator: &dyn Translator) -> I18nResult<Self> {
		match translator.t(SPECIALTIES_KEY) {
			Translation::Map(map) => Ok(Self {
				entries: map.into_iter().collect(),
			}),
			_ => Err(I18nError::UnexpectedShape {
				key: SPECIALTIES_KEY.to_string(),
				expected: "map",
			}),
		}
	}

	/// Add or replace the labels of a canonical identifier
	pub fn insert(&mut self, canonical: impl Into<String>, labels: Vec<String>) {
		let canonical = canonical.into();
		match self.entries.iter_mut().find(|(id, _)| *id == canonical) {
			Some((_, existing)) => *existing = labels,
			None => self.entries.push((canonical, labels)),
		}
	}

	/// Map a displayed label to its canonical identifier.
	///
	/// A label that is already canonical, or unknown, is returned unchanged.
	pub fn to_canonical(&self, label: &str) -> String {
		self.entries
			.iter()
			.find(|(id, labels)| id == label || labels.iter().any(|l| l == label))
			.map(|(id, _)| id.clone())
			.unwrap_or_else(|| label.to_string())
	}

	/// Labels registered for one canonical identifier
	pub fn labels_for(&self, canonical: &str) -> Option<&[String]> {
		self.entries
			.iter()
			.find(|(id, _)| id == canonical)
			.map(|(_, labels)| labels.as_slice())
	}

	pub fn canonical_ids(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(id, _)| id.as_str())
	}

	/// Every label in enumeration order, for populating selection prompts
	pub fn labels(&self) -> Vec<&str> {
		self.entries
			.iter()
			.flat_map(|(_, labels)| labels.iter().map(String::as_str))
			.collect()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
