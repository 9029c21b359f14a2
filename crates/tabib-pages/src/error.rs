//! Error types for tabib-pages.

use tabib_forms::FormError;
use tabib_i18n::I18nError;
use thiserror::Error;

/// Errors raised by screens and their collaborators.
///
/// Validation failures are not errors here; they travel as
/// [`tabib_forms::ErrorMap`] values.
#[derive(Debug, Error)]
pub enum PageError {
	/// A web-content URL used a scheme other than http or https.
	#[error("unsupported URL scheme '{0}'")]
	UnsupportedScheme(String),

	/// A link could not be parsed.
	#[error("invalid URL '{input}': {source}")]
	InvalidUrl {
		input: String,
		#[source]
		source: url::ParseError,
	},

	/// A notice action was chosen by an index the notice does not have.
	#[error("notice has no action at index {index} ({len} available)")]
	NoSuchAction { index: usize, len: usize },

	/// There is no notice on screen to act on.
	#[error("no notice is being shown")]
	NoNotice,

	/// The host could not open an external link.
	#[error("failed to open link '{url}': {reason}")]
	LinkOpen { url: String, reason: String },

	/// The device image picker failed (cancellation is not an error).
	#[error("image picker failed: {0}")]
	ImagePicker(String),

	#[error(transparent)]
	Form(#[from] FormError),

	#[error(transparent)]
	I18n(#[from] I18nError),
}

/// Result type alias for page operations.
pub type PageResult<T> = Result<T, PageError>;
