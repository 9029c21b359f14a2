use crate::error::{PageError, PageResult};
use crate::navigation::parse_link;
use serde::Serialize;
use url::Url;

/// Generic viewer for a web page (terms, privacy policy, help).
///
/// Only `http` and `https` URLs are accepted.
///
/// # Examples
///
/// ```
/// use tabib_pages::WebContentView;
///
/// let view = WebContentView::new("https://tabib.example/terms")
///     .unwrap()
///     .with_title("Terms");
/// assert_eq!(view.url().host_str(), Some("tabib.example"));
///
/// assert!(WebContentView::new("javascript:alert(1)").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebContentView {
	url: Url,
	title: Option<String>,
}

impl WebContentView {
	pub fn new(raw: &str) -> PageResult<Self> {
		let url = parse_link(raw)?;
		match url.scheme() {
			"http" | "https" => Ok(Self { url, title: None }),
			other => Err(PageError::UnsupportedScheme(other.to_string())),
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn url(&self) -> &Url {
		&self.url
	}

	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}
}
