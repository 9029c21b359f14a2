//! # Tabib
//!
//! Cross-platform client core for the Tabib healthcare platform.
//!
//! Tabib holds everything a registration client does apart from drawing
//! pixels: form state, validation, the three-step doctor wizard, the
//! sign-up submission pipeline with its notices and navigation, and a
//! scroll container that behaves on the browser as well as inside native
//! shells. A host renderer (WASM/DOM or a native webview) draws the
//! screens and feeds user input back in.
//!
//! ## Feature Flags
//!
//! - `minimal` - Form state, validation and step navigation (`forms`, `i18n`)
//! - `full` (default) - All features enabled
//! - `forms` - Snapshots, validation engine, wizard and form store
//! - `i18n` - Translator trait, JSON message catalogs, specialty mapping
//! - `auth` - Sign-up service contract
//! - `conf` - TOML application settings
//! - `pages` - Screens, submission pipeline, scroll layer, platform aliases
//!
//! ## Quick Example
//!
//! ```
//! use tabib::forms::{Advance, FieldId, FormStore, StepId};
//! use tabib::i18n::KeyEcho;
//!
//! let mut store = FormStore::extended();
//! for (field, value) in [
//!     (FieldId::Name, "Ali"),
//!     (FieldId::Email, "a@b.com"),
//!     (FieldId::Phone, "0770"),
//!     (FieldId::Password, "abcdef"),
//!     (FieldId::ConfirmPassword, "abcdef"),
//! ] {
//!     store.set_field(field, value).unwrap();
//! }
//!
//! assert_eq!(store.advance(&KeyEcho), Advance::Moved(StepId::Clinic));
//! ```

#[cfg(feature = "auth")]
pub mod auth;
#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "i18n")]
pub mod i18n;
#[cfg(feature = "pages")]
pub mod pages;

// Re-export the types most hosts touch
#[cfg(feature = "forms")]
pub use tabib_forms::{ErrorMap, FieldId, FormStore, StepId};

#[cfg(feature = "i18n")]
pub use tabib_i18n::{Catalogs, Translator};

#[cfg(feature = "auth")]
pub use tabib_auth::{SignUpError, SignUpService};

#[cfg(feature = "conf")]
pub use tabib_conf::AppSettings;

#[cfg(feature = "pages")]
pub use tabib_pages::{
	DoctorSignUpScreen, LandingScreen, Platform, ScreenContext, SubmissionOutcome,
	UserSignUpScreen,
};
