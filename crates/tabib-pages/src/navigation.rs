//! Navigation and external-link collaborators.

use crate::error::{PageError, PageResult};
use tabib_conf::Destinations;
use url::Url;

/// Named screen the navigation stack can move to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
	DoctorHome,
	UserHome,
	Login,
	DoctorSignUp,
	UserSignUp,
	WebContent,
	Named(String),
}

impl Destination {
	/// Route name as configured in [`Destinations`].
	pub fn resolve<'a>(&'a self, destinations: &'a Destinations) -> &'a str {
		match self {
			Destination::DoctorHome => &destinations.doctor_home,
			Destination::UserHome => &destinations.user_home,
			Destination::Login => &destinations.login,
			Destination::DoctorSignUp => &destinations.doctor_sign_up,
			Destination::UserSignUp => &destinations.user_sign_up,
			Destination::WebContent => &destinations.web_content,
			Destination::Named(name) => name,
		}
	}
}

/// The host's navigation stack.
pub trait Navigator: Send + Sync {
	fn navigate(&self, destination: &str);

	fn go_back(&self);
}

/// Opens links in an external application (messaging app, browser).
pub trait LinkOpener: Send + Sync {
	fn open(&self, url: &Url) -> PageResult<()>;
}

/// Parse an absolute link, trimming surrounding whitespace.
pub fn parse_link(raw: &str) -> PageResult<Url> {
	let input = raw.trim();
	Url::parse(input).map_err(|source| PageError::InvalidUrl {
		input: input.to_string(),
		source,
	})
}
