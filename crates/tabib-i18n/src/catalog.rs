//! Message catalogs for storing translations

use crate::error::{I18nError, I18nResult};
use crate::translation::{Translation, Translator};
use std::collections::{BTreeMap, HashMap};

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use tabib_i18n::{MessageCatalog, Translation};
///
/// let mut catalog = MessageCatalog::new("en");
/// catalog.add_translation("phone_required", "Phone number is required");
/// catalog.add_list("provinces", vec!["Baghdad", "Basra", "Erbil"]);
///
/// assert_eq!(
///     catalog.get("phone_required"),
///     Some(&Translation::Text("Phone number is required".to_string()))
/// );
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, Translation>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Parse a catalog from a flat JSON object.
	///
	/// String values become text entries, arrays become lists and objects of
	/// arrays become maps.
	///
	/// # Examples
	///
	/// ```
	/// use tabib_i18n::MessageCatalog;
	///
	/// let catalog = MessageCatalog::from_json_str(
	///     "ar",
	///     r#"{"name_required": "الاسم مطلوب", "weekdays": ["السبت", "الأحد"]}"#,
	/// ).unwrap();
	/// assert_eq!(catalog.locale(), "ar");
	/// assert_eq!(catalog.len(), 2);
	/// ```
	pub fn from_json_str(locale: &str, json: &str) -> I18nResult<Self> {
		let messages: HashMap<String, Translation> =
			serde_json::from_str(json).map_err(|source| I18nError::Parse {
				locale: locale.to_string(),
				source,
			})?;
		tracing::debug!("Loaded {} entries for locale {}", messages.len(), locale);
		Ok(Self {
			locale: locale.to_string(),
			messages,
		})
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages
			.insert(key.into(), Translation::Text(translation.into()));
	}

	/// Add a list entry (province names, weekday names, ...)
	pub fn add_list(&mut self, key: impl Into<String>, items: Vec<&str>) {
		self.messages.insert(
			key.into(),
			Translation::List(items.iter().map(|s| s.to_string()).collect()),
		);
	}

	/// Add a map entry keyed by canonical identifier
	pub fn add_map(&mut self, key: impl Into<String>, map: BTreeMap<String, Vec<String>>) {
		self.messages.insert(key.into(), Translation::Map(map));
	}

	/// Get a translation
	pub fn get(&self, key: &str) -> Option<&Translation> {
		self.messages.get(key)
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

/// Set of catalogs with an active locale and an optional fallback locale.
///
/// Lookups try the active catalog, then the fallback catalog, then echo the
/// key.
#[derive(Debug, Clone)]
pub struct Catalogs {
	active: String,
	fallback: Option<String>,
	catalogs: HashMap<String, MessageCatalog>,
}

impl Catalogs {
	pub fn new(active: &str) -> Self {
		Self {
			active: active.to_string(),
			fallback: None,
			catalogs: HashMap::new(),
		}
	}

	/// Set the locale consulted when the active catalog lacks a key
	pub fn with_fallback(mut self, fallback: &str) -> Self {
		self.fallback = Some(fallback.to_string());
		self
	}

	/// Register a catalog, replacing any catalog for the same locale
	pub fn register(&mut self, catalog: MessageCatalog) {
		self.catalogs.insert(catalog.locale().to_string(), catalog);
	}

	pub fn active_locale(&self) -> &str {
		&self.active
	}

	/// Switch the active locale.
	///
	/// # Errors
	///
	/// Returns [`I18nError::UnknownLocale`] if no catalog is registered for
	/// `locale`; the active locale is left unchanged.
	pub fn set_locale(&mut self, locale: &str) -> I18nResult<()> {
		if !self.catalogs.contains_key(locale) {
			return Err(I18nError::UnknownLocale(locale.to_string()));
		}
		self.active = locale.to_string();
		Ok(())
	}

	fn lookup(&self, key: &str) -> Option<&Translation> {
		let active = self.catalogs.get(&self.active).and_then(|c| c.get(key));
		active.or_else(|| {
			self.fallback
				.as_ref()
				.and_then(|locale| self.catalogs.get(locale))
				.and_then(|c| c.get(key))
		})
	}
}

impl Translator for Catalogs {
	fn t(&self, key: &str) -> Translation {
		self.lookup(key)
			.cloned()
			.unwrap_or_else(|| Translation::Text(key.to_string()))
	}
}
