//! Screens: state holders a host renderer draws and feeds input into.

mod doctor_sign_up;
mod landing;
mod user_sign_up;

pub use doctor_sign_up::DoctorSignUpScreen;
pub use landing::{CallToAction, LandingScreen, LandingSection};
pub use user_sign_up::UserSignUpScreen;

use crate::error::{PageError, PageResult};
use crate::navigation::{Destination, LinkOpener, Navigator};
use crate::notice::Notice;
use crate::platform::{Capability, ModuleAliases, ModuleTarget, Platform};
use crate::submission::SubmissionPipeline;
use std::sync::Arc;
use tabib_auth::SignUpService;
use tabib_conf::AppSettings;
use tabib_i18n::{SpecialtyMap, Translator};

/// Collaborators shared by every screen of one app instance.
#[derive(Clone)]
pub struct ScreenContext {
	pub translator: Arc<dyn Translator>,
	pub navigator: Arc<dyn Navigator>,
	pub link_opener: Arc<dyn LinkOpener>,
	pub service: Arc<dyn SignUpService>,
	pub specialties: Arc<SpecialtyMap>,
	pub settings: Arc<AppSettings>,
	pub aliases: Arc<ModuleAliases>,
}

impl ScreenContext {
	/// Fresh pipeline with its own busy flag, for one screen instance.
	pub fn pipeline(&self) -> SubmissionPipeline {
		SubmissionPipeline::from_settings(
			self.service.clone(),
			self.translator.clone(),
			self.specialties.clone(),
			&self.settings,
		)
	}

	/// Module bound to `capability` on the host platform.
	pub fn module_for(&self, capability: Capability) -> Option<&ModuleTarget> {
		let platform = Platform::current();
		let target = self.aliases.resolve(platform, capability);
		if target.is_none() {
			tracing::warn!(%platform, ?capability, "no module bound for capability");
		}
		target
	}

	pub fn navigate(&self, destination: &Destination) {
		let name = destination.resolve(&self.settings.destinations);
		tracing::info!(destination = name, "navigating");
		self.navigator.navigate(name);
	}
}

/// Run the chosen action of the notice on screen and close it.
///
/// An out-of-range index leaves the notice in place.
fn choose_notice_action(
	notice: &mut Option<Notice>,
	index: usize,
	context: &ScreenContext,
) -> PageResult<()> {
	let current = notice.as_ref().ok_or(PageError::NoNotice)?;
	if index >= current.actions().len() {
		return Err(PageError::NoSuchAction {
			index,
			len: current.actions().len(),
		});
	}
	let current = notice.take().ok_or(PageError::NoNotice)?;
	current.choose(
		index,
		context.navigator.as_ref(),
		context.link_opener.as_ref(),
	)
}
