use super::{ScreenContext, choose_notice_action};
use crate::error::PageResult;
use crate::navigation::Destination;
use crate::notice::Notice;
use crate::submission::{SubmissionOutcome, SubmissionPipeline};
use tabib_forms::field::account_fields;
use tabib_forms::{ErrorMap, FieldDescriptor, FieldId, FormStore, ShortSnapshot};

/// Single-step patient registration.
pub struct UserSignUpScreen {
	context: ScreenContext,
	store: FormStore<ShortSnapshot>,
	pipeline: SubmissionPipeline,
	notice: Option<Notice>,
}

impl UserSignUpScreen {
	pub fn new(context: ScreenContext) -> Self {
		let pipeline = context.pipeline();
		Self {
			context,
			store: FormStore::short(),
			pipeline,
			notice: None,
		}
	}

	pub fn snapshot(&self) -> &ShortSnapshot {
		self.store.snapshot()
	}

	pub fn errors(&self) -> &ErrorMap {
		self.store.errors()
	}

	pub fn notice(&self) -> Option<&Notice> {
		self.notice.as_ref()
	}

	pub fn is_busy(&self) -> bool {
		self.pipeline.is_busy()
	}

	pub fn field_descriptors(&self) -> Vec<FieldDescriptor> {
		account_fields()
	}

	pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) -> PageResult<()> {
		Ok(self.store.set_field(field, value)?)
	}

	/// Validate and submit. Validation errors land in [`Self::errors`];
	/// service results land in [`Self::notice`].
	pub async fn submit(&mut self) -> SubmissionOutcome {
		let outcome = self.pipeline.submit_user(self.store.snapshot()).await;
		match &outcome {
			SubmissionOutcome::Invalid(errors) => self.store.replace_errors(errors.clone()),
			SubmissionOutcome::Registered(notice) | SubmissionOutcome::Failed(notice) => {
				self.store.clear_errors();
				self.notice = Some(notice.clone());
			}
			SubmissionOutcome::Busy | SubmissionOutcome::NotOnFinalStep(_) => {}
		}
		outcome
	}

	pub fn choose_notice_action(&mut self, index: usize) -> PageResult<()> {
		choose_notice_action(&mut self.notice, index, &self.context)
	}

	pub fn go_to_login(&self) {
		self.context.navigate(&Destination::Login);
	}
}
