//! Settings for Tabib clients
//!
//! Settings are read from TOML. Every key has a default, so an empty file
//! (or no file at all) yields a working configuration.
//!
//! ```
//! use tabib_conf::AppSettings;
//!
//! let settings = AppSettings::from_toml_str(r#"
//! locale = "en"
//!
//! [scroll]
//! spacer_min_height = 200.0
//!
//! [submission]
//! timeout_secs = 30
//! "#).unwrap();
//!
//! assert_eq!(settings.locale, "en");
//! assert_eq!(settings.destinations.doctor_home, "DoctorHome");
//! assert_eq!(settings.submission.timeout_secs, Some(30));
//! ```

pub mod error;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{AppSettings, Destinations, ScrollSettings, SubmissionSettings};
