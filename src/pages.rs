//! Screens, submission pipeline and platform glue
//!
//! This module re-exports everything from `tabib-pages`.
//!
//! ## Example
//!
//! ```
//! use tabib::pages::{Platform, ScrollView, ScrollViewProps};
//! use tabib::conf::ScrollSettings;
//!
//! let container = ScrollView::new(ScrollViewProps::new())
//!     .child("content")
//!     .build(Platform::Web, &ScrollSettings::default());
//! assert!(container.style().is_some());
//! ```

pub use tabib_pages::*;
