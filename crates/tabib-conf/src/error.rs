//! Error types for settings loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Settings file could not be read
	#[error("failed to read settings file: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Settings were not valid TOML or had the wrong shape
	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// A value parsed but is not acceptable
	#[error("invalid setting {key}: {message}")]
	Invalid { key: &'static str, message: String },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
