use super::ScreenContext;
use crate::navigation::Destination;
use crate::platform::Platform;
use crate::scroll::{ScrollContainer, ScrollView, ScrollViewProps};
use serde::Serialize;

const SECTIONS: [(&str, &str); 3] = [
	("landing_hero_title", "landing_hero_body"),
	("landing_doctors_title", "landing_doctors_body"),
	("landing_patients_title", "landing_patients_body"),
];

/// Localized block of marketing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingSection {
	pub title: String,
	pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
	JoinAsDoctor,
	JoinAsPatient,
	Login,
}

impl CallToAction {
	fn destination(self) -> Destination {
		match self {
			CallToAction::JoinAsDoctor => Destination::DoctorSignUp,
			CallToAction::JoinAsPatient => Destination::UserSignUp,
			CallToAction::Login => Destination::Login,
		}
	}
}

/// Marketing screen shown before sign-in.
pub struct LandingScreen {
	context: ScreenContext,
}

impl LandingScreen {
	pub fn new(context: ScreenContext) -> Self {
		Self { context }
	}

	pub fn sections(&self) -> Vec<LandingSection> {
		let t = self.context.translator.as_ref();
		SECTIONS
			.iter()
			.map(|(title, body)| LandingSection {
				title: t.text(title),
				body: t.text(body),
			})
			.collect()
	}

	/// The sections inside a vertical scroll container for the host platform.
	pub fn content(&self) -> ScrollContainer<LandingSection> {
		self.scroll_view()
			.build_current(&self.context.settings.scroll)
	}

	/// Same as [`Self::content`] for an explicit platform.
	pub fn content_for(&self, platform: Platform) -> ScrollContainer<LandingSection> {
		self.scroll_view()
			.build(platform, &self.context.settings.scroll)
	}

	fn scroll_view(&self) -> ScrollView<LandingSection> {
		ScrollView::new(ScrollViewProps::new().shows_vertical_indicator(false))
			.children(self.sections())
	}

	pub fn call_to_action(&self, action: CallToAction) {
		self.context.navigate(&action.destination());
	}
}
