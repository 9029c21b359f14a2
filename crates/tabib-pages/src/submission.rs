//! Submission pipeline
//!
//! Re-validates every step that gates submission, maps locale-displayed
//! values to their canonical form, calls the sign-up service and turns the
//! result into a notice. A busy flag keeps one submission in flight per
//! pipeline; it is released on every exit path.

use crate::navigation::parse_link;
use crate::notice::{Notice, NoticeAction, NoticeEffect};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tabib_auth::{AccountKind, SignUpError, SignUpRequest, SignUpResult, SignUpService, SignUpSuccess};
use tabib_conf::{AppSettings, Destinations};
use tabib_forms::{ErrorMap, ExtendedSnapshot, SelectedImage, ShortSnapshot, StepId, validate_all};
use tabib_i18n::{SpecialtyMap, Translator};

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
	/// Another submission is in flight; nothing was done.
	Busy,
	/// Submission was attempted before reaching the last step of a
	/// multi-step form; nothing was validated or sent.
	NotOnFinalStep(StepId),
	/// A gating step failed validation; the service was not called.
	Invalid(ErrorMap),
	/// The account was created. Every action of the notice ends on the
	/// role's home destination.
	Registered(Notice),
	/// The service rejected the request. The notice has a single
	/// dismissal that stays on the screen.
	Failed(Notice),
}

impl SubmissionOutcome {
	pub fn notice(&self) -> Option<&Notice> {
		match self {
			SubmissionOutcome::Registered(notice) | SubmissionOutcome::Failed(notice) => {
				Some(notice)
			}
			SubmissionOutcome::Busy
			| SubmissionOutcome::NotOnFinalStep(_)
			| SubmissionOutcome::Invalid(_) => None,
		}
	}

	pub fn is_registered(&self) -> bool {
		matches!(self, SubmissionOutcome::Registered(_))
	}
}

enum CallFailure {
	Rejected(SignUpError),
	TimedOut,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
	fn claim(flag: &'a AtomicBool) -> Option<Self> {
		flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.ok()
			.map(|_| Self(flag))
	}
}

impl Drop for BusyGuard<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

/// Runs sign-up submissions for one screen instance.
pub struct SubmissionPipeline {
	service: Arc<dyn SignUpService>,
	translator: Arc<dyn Translator>,
	specialties: Arc<SpecialtyMap>,
	destinations: Destinations,
	timeout: Option<Duration>,
	busy: AtomicBool,
}

impl SubmissionPipeline {
	pub fn new(
		service: Arc<dyn SignUpService>,
		translator: Arc<dyn Translator>,
		specialties: Arc<SpecialtyMap>,
	) -> Self {
		Self {
			service,
			translator,
			specialties,
			destinations: Destinations::default(),
			timeout: None,
			busy: AtomicBool::new(false),
		}
	}

	/// Pipeline using the configured destinations and timeout.
	pub fn from_settings(
		service: Arc<dyn SignUpService>,
		translator: Arc<dyn Translator>,
		specialties: Arc<SpecialtyMap>,
		settings: &AppSettings,
	) -> Self {
		Self::new(service, translator, specialties)
			.with_destinations(settings.destinations.clone())
			.with_timeout(settings.submission.timeout())
	}

	pub fn with_destinations(mut self, destinations: Destinations) -> Self {
		self.destinations = destinations;
		self
	}

	/// Bound the wait for the service. `None` waits indefinitely.
	///
	/// On native targets the bound is enforced with `tokio::time::timeout`,
	/// so submissions must then be driven inside a tokio runtime with the
	/// time driver enabled; other executors panic when the timer is armed.
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		#[cfg(target_arch = "wasm32")]
		if timeout.is_some() {
			tracing::warn!("submission timeout is not supported on wasm32 and will be ignored");
		}
		self.timeout = timeout;
		self
	}

	pub fn is_busy(&self) -> bool {
		self.busy.load(Ordering::Acquire)
	}

	/// Submit the extended doctor form with the selected profile image.
	pub async fn submit_doctor(
		&self,
		snapshot: &ExtendedSnapshot,
		image: Option<&SelectedImage>,
	) -> SubmissionOutcome {
		let Some(_guard) = BusyGuard::claim(&self.busy) else {
			tracing::debug!("doctor submission ignored: already in flight");
			return SubmissionOutcome::Busy;
		};

		let errors = validate_all(
			snapshot,
			StepId::Schedule.preceding(),
			self.translator.as_ref(),
		);
		if !errors.is_empty() {
			tracing::debug!(errors = errors.len(), "doctor submission blocked by validation");
			return SubmissionOutcome::Invalid(errors);
		}

		let mut transformed = snapshot.clone();
		transformed.specialty = self.specialties.to_canonical(&snapshot.specialty);

		let request = SignUpRequest::doctor(&transformed, image);
		self.dispatch(AccountKind::Doctor, request).await
	}

	/// Submit the short patient form.
	pub async fn submit_user(&self, snapshot: &ShortSnapshot) -> SubmissionOutcome {
		let Some(_guard) = BusyGuard::claim(&self.busy) else {
			tracing::debug!("user submission ignored: already in flight");
			return SubmissionOutcome::Busy;
		};

		let errors = validate_all(snapshot, &[StepId::Account], self.translator.as_ref());
		if !errors.is_empty() {
			tracing::debug!(errors = errors.len(), "user submission blocked by validation");
			return SubmissionOutcome::Invalid(errors);
		}

		let request = SignUpRequest::user(snapshot);
		self.dispatch(AccountKind::User, request).await
	}

	async fn dispatch(
		&self,
		kind: AccountKind,
		request: SignUpResult<SignUpRequest>,
	) -> SubmissionOutcome {
		tracing::info!(user_type = kind.as_str(), "submitting sign-up");
		let result = match request {
			Ok(request) => self.call(request).await,
			Err(e) => Err(CallFailure::Rejected(e)),
		};

		match result {
			Ok(success) => {
				tracing::info!(user_type = kind.as_str(), "sign-up succeeded");
				SubmissionOutcome::Registered(self.success_notice(kind, &success))
			}
			Err(CallFailure::Rejected(e)) => {
				tracing::warn!(user_type = kind.as_str(), error = %e, "sign-up failed");
				let message = e
					.user_message()
					.map(str::to_string)
					.unwrap_or_else(|| self.translator.text("signup_failed"));
				SubmissionOutcome::Failed(self.failure_notice(message))
			}
			Err(CallFailure::TimedOut) => {
				tracing::warn!(user_type = kind.as_str(), "sign-up timed out");
				SubmissionOutcome::Failed(self.failure_notice(self.translator.text("request_timeout")))
			}
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	async fn call(&self, request: SignUpRequest) -> Result<SignUpSuccess, CallFailure> {
		let call = self.service.sign_up(request);
		match self.timeout {
			Some(limit) => match tokio::time::timeout(limit, call).await {
				Ok(result) => result.map_err(CallFailure::Rejected),
				Err(_) => Err(CallFailure::TimedOut),
			},
			None => call.await.map_err(CallFailure::Rejected),
		}
	}

	#[cfg(target_arch = "wasm32")]
	async fn call(&self, request: SignUpRequest) -> Result<SignUpSuccess, CallFailure> {
		self.service
			.sign_up(request)
			.await
			.map_err(CallFailure::Rejected)
	}

	fn home(&self, kind: AccountKind) -> &str {
		match kind {
			AccountKind::Doctor => &self.destinations.doctor_home,
			AccountKind::User => &self.destinations.user_home,
		}
	}

	fn success_notice(&self, kind: AccountKind, success: &SignUpSuccess) -> Notice {
		let t = self.translator.as_ref();
		let home = NoticeEffect::Navigate(self.home(kind).to_string());

		let link = success.deep_link().and_then(|raw| match parse_link(raw) {
			Ok(url) => Some(url),
			Err(e) => {
				tracing::warn!(error = %e, "ignoring unparsable deep link");
				None
			}
		});

		match link {
			Some(url) => Notice::new(
				t.text("signup_success_title"),
				t.text("signup_success_whatsapp_message"),
			)
			.with_action(
				NoticeAction::dismiss(t.text("open_whatsapp"))
					.then(NoticeEffect::OpenLink(url))
					.then(home.clone()),
			)
			.with_action(NoticeAction::dismiss(t.text("later")).then(home)),
			None => Notice::new(t.text("signup_success_title"), t.text("signup_success_message"))
				.with_action(NoticeAction::dismiss(t.text("ok")).then(home)),
		}
	}

	fn failure_notice(&self, message: String) -> Notice {
		let t = self.translator.as_ref();
		Notice::new(t.text("error"), message).with_action(NoticeAction::dismiss(t.text("ok")))
	}
}
