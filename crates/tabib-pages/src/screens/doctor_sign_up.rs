use super::{ScreenContext, choose_notice_action};
use crate::error::PageResult;
use crate::image::{ImagePicker, select_image};
use crate::navigation::Destination;
use crate::notice::Notice;
use crate::platform::{Capability, ModuleTarget};
use crate::submission::{SubmissionOutcome, SubmissionPipeline};
use tabib_forms::field::{account_fields, clinic_fields, schedule_fields};
use tabib_forms::{
	Advance, ErrorMap, ExtendedSnapshot, FieldDescriptor, FieldId, FormStore, SelectedImage,
	StepId, Weekday, WorkInterval,
};

const PROVINCES_KEY: &str = "provinces";
const DURATIONS_KEY: &str = "appointment_durations";

/// Three-step doctor registration: account, clinic, schedule.
///
/// # Examples
///
/// ```ignore
/// let mut screen = DoctorSignUpScreen::new(context);
/// screen.set_field(FieldId::Name, "Dr. Sara")?;
/// // ...fill in the rest of the account step...
/// assert!(matches!(screen.next(), Advance::Moved(StepId::Clinic)));
/// ```
pub struct DoctorSignUpScreen {
	context: ScreenContext,
	store: FormStore<ExtendedSnapshot>,
	pipeline: SubmissionPipeline,
	notice: Option<Notice>,
}

impl DoctorSignUpScreen {
	pub fn new(context: ScreenContext) -> Self {
		let pipeline = context.pipeline();
		Self {
			context,
			store: FormStore::extended(),
			pipeline,
			notice: None,
		}
	}

	pub fn snapshot(&self) -> &ExtendedSnapshot {
		self.store.snapshot()
	}

	pub fn step(&self) -> StepId {
		self.store.current_step()
	}

	pub fn progress_percentage(&self) -> f32 {
		self.store.progress_percentage()
	}

	pub fn errors(&self) -> &ErrorMap {
		self.store.errors()
	}

	pub fn notice(&self) -> Option<&Notice> {
		self.notice.as_ref()
	}

	pub fn image(&self) -> Option<&SelectedImage> {
		self.store.image()
	}

	pub fn is_busy(&self) -> bool {
		self.pipeline.is_busy()
	}

	pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) -> PageResult<()> {
		Ok(self.store.set_field(field, value)?)
	}

	/// Advance to the next step if the current one validates.
	pub fn next(&mut self) -> Advance {
		let outcome = self.store.advance(self.context.translator.as_ref());
		match &outcome {
			Advance::Moved(step) => tracing::info!(step = step.number(), "doctor sign-up moved on"),
			Advance::Blocked(errors) => {
				tracing::debug!(errors = errors.len(), "doctor sign-up step blocked")
			}
			Advance::AtLastStep => {}
		}
		outcome
	}

	/// Step back, or leave the screen from the first step.
	pub fn back(&mut self) {
		if !self.store.back() {
			self.context.navigator.go_back();
		}
	}

	/// Weekday choices for the "add working day" prompt, Saturday first.
	pub fn pick_days_prompt(&self) -> Vec<(Weekday, String)> {
		let translator = self.context.translator.as_ref();
		Weekday::ALL
			.into_iter()
			.map(|day| (day, day.label(translator)))
			.collect()
	}

	pub fn add_work_interval(&mut self, day: Weekday, from: &str, to: &str) -> PageResult<()> {
		let interval = WorkInterval::new(day, from, to)?;
		self.store.add_work_interval(interval);
		Ok(())
	}

	pub fn remove_work_interval(&mut self, index: usize) -> PageResult<WorkInterval> {
		Ok(self.store.remove_work_interval(index)?)
	}

	pub async fn select_image(&mut self, picker: &dyn ImagePicker) -> PageResult<bool> {
		select_image(picker, &mut self.store).await
	}

	/// Map widget for the clinic location on this platform.
	pub fn map_module(&self) -> Option<&ModuleTarget> {
		self.context.module_for(Capability::MapView)
	}

	/// Picker backing [`Self::select_image`] on this platform.
	pub fn image_picker_module(&self) -> Option<&ModuleTarget> {
		self.context.module_for(Capability::ImagePicker)
	}

	pub fn specialty_options(&self) -> Vec<String> {
		let options: Vec<String> = self
			.context
			.specialties
			.labels()
			.into_iter()
			.map(str::to_string)
			.collect();
		if options.is_empty() {
			tracing::warn!("no specialties available for the clinic step");
		}
		options
	}

	pub fn province_options(&self) -> Vec<String> {
		self.context.translator.list(PROVINCES_KEY)
	}

	pub fn duration_options(&self) -> Vec<String> {
		self.context.translator.list(DURATIONS_KEY)
	}

	/// Descriptors for the fields of the current step.
	pub fn field_descriptors(&self) -> Vec<FieldDescriptor> {
		match self.step() {
			StepId::Account => account_fields(),
			StepId::Clinic => clinic_fields(self.specialty_options(), self.province_options()),
			StepId::Schedule => schedule_fields(
				self.pick_days_prompt()
					.into_iter()
					.map(|(_, label)| label)
					.collect(),
				self.duration_options(),
			),
		}
	}

	/// Validate the account and clinic steps and submit. Validation errors
	/// land in [`Self::errors`]; service results land in [`Self::notice`].
	///
	/// Only the schedule step may submit; from earlier steps this returns
	/// [`SubmissionOutcome::NotOnFinalStep`] without touching the service.
	pub async fn submit(&mut self) -> SubmissionOutcome {
		let step = self.step();
		if step != StepId::Schedule {
			tracing::debug!(step = step.number(), "doctor submission before the schedule step");
			return SubmissionOutcome::NotOnFinalStep(step);
		}

		let outcome = self
			.pipeline
			.submit_doctor(self.store.snapshot(), self.store.image())
			.await;
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
