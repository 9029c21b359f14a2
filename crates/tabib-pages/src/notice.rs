//! Dismissable user notices and the effects of their actions.

use crate::error::{PageError, PageResult};
use crate::navigation::{LinkOpener, Navigator};
use serde::Serialize;
use url::Url;

/// Something that happens when the user picks a notice action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum NoticeEffect {
	OpenLink(Url),
	Navigate(String),
}

/// One button of a notice. Effects run in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeAction {
	pub label: String,
	pub effects: Vec<NoticeEffect>,
}

impl NoticeAction {
	/// Action that only closes the notice.
	pub fn dismiss(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			effects: Vec::new(),
		}
	}

	pub fn then(mut self, effect: NoticeEffect) -> Self {
		self.effects.push(effect);
		self
	}

	/// Destination this action navigates to, if any.
	pub fn destination(&self) -> Option<&str> {
		self.effects.iter().find_map(|effect| match effect {
			NoticeEffect::Navigate(destination) => Some(destination.as_str()),
			NoticeEffect::OpenLink(_) => None,
		})
	}
}

/// A dismissable message with one or more actions.
///
/// # Examples
///
/// ```
/// use tabib_pages::{Notice, NoticeAction, NoticeEffect};
///
/// let notice = Notice::new("Done", "Account created")
///     .with_action(NoticeAction::dismiss("OK").then(NoticeEffect::Navigate("UserHome".into())));
///
/// assert_eq!(notice.actions().len(), 1);
/// assert_eq!(notice.actions()[0].destination(), Some("UserHome"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
	pub title: String,
	pub message: String,
	actions: Vec<NoticeAction>,
}

impl Notice {
	pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			message: message.into(),
			actions: Vec::new(),
		}
	}

	pub fn with_action(mut self, action: NoticeAction) -> Self {
		self.actions.push(action);
		self
	}

	pub fn actions(&self) -> &[NoticeAction] {
		&self.actions
	}

	/// Perform the effects of the action at `index`.
	///
	/// Every effect runs even if opening a link fails, so the user still
	/// lands on the destination; the first link failure is returned
	/// afterwards.
	pub fn choose(
		&self,
		index: usize,
		navigator: &dyn Navigator,
		opener: &dyn LinkOpener,
	) -> PageResult<()> {
		let action = self.actions.get(index).ok_or(PageError::NoSuchAction {
			index,
			len: self.actions.len(),
		})?;

		let mut first_failure = None;
		for effect in &action.effects {
			match effect {
				NoticeEffect::OpenLink(url) => {
					if let Err(e) = opener.open(url) {
						tracing::warn!(%url, error = %e, "failed to open link");
						first_failure.get_or_insert(e);
					}
				}
				NoticeEffect::Navigate(destination) => {
					tracing::info!(destination = %destination, "navigating");
					navigator.navigate(destination);
				}
			}
		}
		first_failure.map_or(Ok(()), Err)
	}
}
