//! The translation collaborator contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value stored under a translation key.
///
/// Most keys hold plain text. Some keys represent structured data used to
/// populate selection prompts: province lists and weekday names are lists,
/// specialty tables are maps from a canonical identifier to its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translation {
	Text(String),
	List(Vec<String>),
	Map(BTreeMap<String, Vec<String>>),
}

impl Translation {
	/// Returns the text, or `fallback` when this entry is structured.
	pub fn into_text(self, fallback: &str) -> String {
		match self {
			Translation::Text(text) => text,
			_ => fallback.to_string(),
		}
	}

	/// Returns the list entries; text and map entries yield an empty list.
	pub fn into_list(self) -> Vec<String> {
		match self {
			Translation::List(items) => items,
			_ => Vec::new(),
		}
	}

	pub fn as_map(&self) -> Option<&BTreeMap<String, Vec<String>>> {
		match self {
			Translation::Map(map) => Some(map),
			_ => None,
		}
	}
}

/// Key to localized value lookup.
///
/// Implementations must echo the key back as [`Translation::Text`] when no
/// entry exists, so an untranslated key is still visible on screen.
///
/// # Examples
///
/// ```
/// use tabib_i18n::{KeyEcho, Translation, Translator};
///
/// let t = KeyEcho;
/// assert_eq!(t.t("email_invalid"), Translation::Text("email_invalid".into()));
/// assert!(t.list("provinces").is_empty());
/// ```
pub trait Translator: Send + Sync {
	fn t(&self, key: &str) -> Translation;

	fn text(&self, key: &str) -> String {
		self.t(key).into_text(key)
	}

	fn list(&self, key: &str) -> Vec<String> {
		self.t(key).into_list()
	}
}

/// Translator with no catalog: every key resolves to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl Translator for KeyEcho {
	fn t(&self, key: &str) -> Translation {
		Translation::Text(key.to_string())
	}
}
