//! Screens and platform glue for Tabib clients
//!
//! This crate sits on top of `tabib-forms`, `tabib-i18n`, `tabib-auth` and
//! `tabib-conf` and provides what a host renderer (WASM/DOM or a native
//! shell) drives:
//!
//! - [`DoctorSignUpScreen`] and [`UserSignUpScreen`]: form state, step
//!   navigation and submission
//! - [`SubmissionPipeline`]: validation, canonical mapping, the sign-up
//!   call and the resulting [`Notice`]
//! - [`ScrollView`]: a scroll container styled for the browser and passed
//!   through to the native scroll view elsewhere
//! - [`ModuleAliases`]: per-platform bindings for maps, image picking and
//!   the camera
//! - [`LandingScreen`] and [`WebContentView`]
//!
//! Collaborators the host must provide are traits: [`Navigator`],
//! [`LinkOpener`], [`ImagePicker`], plus
//! [`SignUpService`](tabib_auth::SignUpService) and
//! [`Translator`](tabib_i18n::Translator).

pub mod error;
pub mod image;
pub mod navigation;
pub mod notice;
pub mod platform;
pub mod screens;
pub mod scroll;
pub mod submission;
pub mod webview;

pub use error::{PageError, PageResult};
pub use image::{ImagePicker, select_image};
pub use navigation::{Destination, LinkOpener, Navigator, parse_link};
pub use notice::{Notice, NoticeAction, NoticeEffect};
pub use platform::{Capability, ModuleAliases, ModuleTarget, Platform};
pub use screens::{
	CallToAction, DoctorSignUpScreen, LandingScreen, LandingSection, ScreenContext,
	UserSignUpScreen,
};
pub use scroll::{ScrollChild, ScrollContainer, ScrollView, ScrollViewProps, StyleMap};
pub use submission::{SubmissionOutcome, SubmissionPipeline};
pub use webview::WebContentView;
