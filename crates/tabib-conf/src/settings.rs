//! Application settings.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
	/// Active locale for catalog lookups
	pub locale: String,

	/// Locale consulted when the active catalog lacks a key
	pub fallback_locale: String,

	/// Scroll container settings
	pub scroll: ScrollSettings,

	/// Navigation destination names
	pub destinations: Destinations,

	/// Sign-up submission settings
	pub submission: SubmissionSettings,
}

/// Scroll container settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
	/// Minimum height of the trailing spacer appended after vertical content,
	/// so the last field clears the on-screen keyboard or a fixed footer.
	pub spacer_min_height: f32,
}

/// Names of the navigation destinations the screens refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destinations {
	pub doctor_home: String,
	pub user_home: String,
	pub login: String,
	pub doctor_sign_up: String,
	pub user_sign_up: String,
	pub web_content: String,
}

/// Sign-up submission settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionSettings {
	/// Upper bound on the sign-up call. Unset means an unbounded wait.
	pub timeout_secs: Option<u64>,
}

impl Default for AppSettings {
	fn default() -> Self {
		Self {
			locale: String::from("ar"),
			fallback_locale: String::from("en"),
			scroll: ScrollSettings::default(),
			destinations: Destinations::default(),
			submission: SubmissionSettings::default(),
		}
	}
}

impl Default for ScrollSettings {
	fn default() -> Self {
		Self {
			spacer_min_height: 120.0,
		}
	}
}

impl Default for Destinations {
	fn default() -> Self {
		Self {
			doctor_home: String::from("DoctorHome"),
			user_home: String::from("UserHome"),
			login: String::from("Login"),
			doctor_sign_up: String::from("DoctorSignUp"),
			user_sign_up: String::from("UserSignUp"),
			web_content: String::from("WebContent"),
		}
	}
}

impl SubmissionSettings {
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}
}

impl AppSettings {
	/// Parse and validate settings from a TOML string.
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: AppSettings = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Read, parse and validate a TOML settings file.
	pub fn from_path(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&source)?;
		tracing::info!("Loaded settings from {}", path.display());
		Ok(settings)
	}

	/// Check values that parse but cannot work.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Invalid`] for an empty locale, a negative or
	/// non-finite spacer height, or an empty destination name.
	pub fn validate(&self) -> SettingsResult<()> {
		if self.locale.trim().is_empty() {
			return Err(invalid("locale", "must not be empty"));
		}
		if self.fallback_locale.trim().is_empty() {
			return Err(invalid("fallback_locale", "must not be empty"));
		}

		let height = self.scroll.spacer_min_height;
		if !height.is_finite() || height < 0.0 {
			return Err(invalid(
				"scroll.spacer_min_height",
				format!("must be a finite, non-negative number, got {}", height),
			));
		}

		let destinations = [
			("destinations.doctor_home", &self.destinations.doctor_home),
			("destinations.user_home", &self.destinations.user_home),
			("destinations.login", &self.destinations.login),
			("destinations.doctor_sign_up", &self.destinations.doctor_sign_up),
			("destinations.user_sign_up", &self.destinations.user_sign_up),
			("destinations.web_content", &self.destinations.web_content),
		];
		for (key, name) in destinations {
			if name.trim().is_empty() {
				return Err(invalid(key, "must not be empty"));
			}
		}

		if self.submission.timeout_secs == Some(0) {
			return Err(invalid("submission.timeout_secs", "must be at least 1"));
		}

		Ok(())
	}
}

fn invalid(key: &'static str, message: impl Into<String>) -> SettingsError {
	SettingsError::Invalid {
		key,
		message: message.into(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_source_gives_defaults() {
		let settings = AppSettings::from_toml_str("").unwrap();
		assert_eq!(settings, AppSettings::default());
		assert_eq!(settings.submission.timeout(), None);
	}

	#[rstest]
	#[case("locale = \"\"", "locale")]
	#[case("[scroll]\nspacer_min_height = -1.0", "scroll.spacer_min_height")]
	#[case("[scroll]\nspacer_min_height = nan", "scroll.spacer_min_height")]
	#[case("[destinations]\nlogin = \" \"", "destinations.login")]
	#[case("[submission]\ntimeout_secs = 0", "submission.timeout_secs")]
	fn test_invalid_values_rejected(#[case] source: &str, #[case] expected_key: &str) {
		match AppSettings::from_toml_str(source) {
			Err(SettingsError::Invalid { key, .. }) => assert_eq!(key, expected_key),
			other => panic!("expected Invalid for {}, got {:?}", expected_key, other),
		}
	}

	#[rstest]
	fn test_wrong_type_is_parse_error() {
		let result = AppSettings::from_toml_str("[scroll]\nspacer_min_height = \"tall\"");
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	fn test_partial_table_keeps_other_defaults() {
		let settings = AppSettings::from_toml_str("[destinations]\nlogin = \"SignIn\"").unwrap();
		assert_eq!(settings.destinations.login, "SignIn");
		assert_eq!(settings.destinations.user_home, "UserHome");
	}
}
