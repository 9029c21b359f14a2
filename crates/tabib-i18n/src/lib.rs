//! Localization support for Tabib
//!
//! This crate provides the translation collaborator used by every screen:
//!
//! - [`Translator`]: key lookup returning either a string or structured data
//!   (province lists, weekday names, duration option sets)
//! - [`MessageCatalog`] / [`Catalogs`]: JSON-backed catalogs with a locale
//!   fallback chain
//! - [`SpecialtyMap`]: mapping between locale-displayed specialty labels and
//!   the canonical identifiers the backend expects
//!
//! # Example
//!
//! ```
//! use tabib_i18n::{Catalogs, MessageCatalog, Translator};
//!
//! let mut en = MessageCatalog::new("en");
//! en.add_translation("name_required", "Name is required");
//! en.add_list("weekdays", vec!["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]);
//!
//! let mut catalogs = Catalogs::new("en");
//! catalogs.register(en);
//!
//! assert_eq!(catalogs.text("name_required"), "Name is required");
//! assert_eq!(catalogs.list("weekdays").len(), 7);
//! // Missing keys echo the key back
//! assert_eq!(catalogs.text("unknown_key"), "unknown_key");
//! ```

pub mod catalog;
pub mod error;
pub mod specialty;
pub mod translation;

pub use catalog::{Catalogs, MessageCatalog};
pub use error::{I18nError, I18nResult};
pub use specialty::SpecialtyMap;
pub use translation::{KeyEcho, Translation, Translator};
