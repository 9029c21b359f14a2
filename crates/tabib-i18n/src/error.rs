//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading or selecting catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
	/// Catalog JSON could not be parsed.
	#[error("failed to parse catalog for locale {locale}: {source}")]
	Parse {
		locale: String,
		#[source]
		source: serde_json::Error,
	},

	/// The requested locale has no registered catalog.
	#[error("no catalog registered for locale: {0}")]
	UnknownLocale(String),

	/// A structured entry had an unexpected shape.
	#[error("entry {key} is not a {expected}")]
	UnexpectedShape { key: String, expected: &'static str },
}

/// Result type alias for i18n operations.
pub type I18nResult<T> = Result<T, I18nError>;
