//! Doctor sign-up screen flow tests
//!
//! Step gating, back navigation, work intervals, image selection and
//! field descriptors as a host renderer sees them.

mod common;

use async_trait::async_trait;
use common::*;
use rstest::*;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tabib_forms::{Advance, FieldId, FieldKind, SelectedImage, StepId, Weekday};
use tabib_pages::{
	DoctorSignUpScreen, ImagePicker, ModuleAliases, ModuleTarget, PageError, PageResult,
};

#[fixture]
fn env() -> Harness {
	harness(ScriptedService::default())
}

#[rstest]
fn test_invalid_account_step_blocks_advance(env: Harness) {
	let mut screen = DoctorSignUpScreen::new(env.context.clone());
	screen.set_field(FieldId::Name, "Ali").unwrap();
	screen.set_field(FieldId::Email, "bad").unwrap();

	let Advance::Blocked(errors) = screen.next() else {
		panic!("expected the account step to block");
	};

	assert_eq!(screen.step(), StepId::Account);
	assert_eq!(errors.get(FieldId::Email), Some("البريد الإلكتروني غير صالح"));
	assert_eq!(screen.errors(), &errors);
}

#[rstest]
fn test_back_is_unconditional_and_leaves_from_first_step(env: Harness) {
	let mut screen = DoctorSignUpScreen::new(env.context.clone());
	let account = valid_account();
	for (field, value) in [
		(FieldId::Name, account.name),
		(FieldId::Email, account.email),
		(FieldId::Phone, account.phone),
		(FieldId::Password, account.password),
		(FieldId::ConfirmPassword, account.confirm_password),
	] {
		screen.set_field(field, value).unwrap();
	}
	assert_eq!(screen.next(), Advance::Moved(StepId::Clinic));

	// clinic step is still empty; going back must not validate it
	screen.back();
	assert_eq!(screen.step(), StepId::Account);
	assert!(screen.errors().is_empty());
	assert_eq!(env.navigator.backs.load(Ordering::SeqCst), 0);

	screen.back();
	assert_eq!(screen.step(), StepId::Account);
	assert_eq!(env.navigator.backs.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_work_interval_removal_shifts_later_entries(env: Harness) {
	let mut screen = DoctorSignUpScreen::new(env.context.clone());
	screen.add_work_interval(Weekday::Saturday, "09:00", "13:00").unwrap();
	screen.add_work_interval(Weekday::Sunday, "09:00", "13:00").unwrap();
	screen.add_work_interval(Weekday::Sunday, "17:00", "21:00").unwrap();

	let removed = screen.remove_work_interval(0).unwrap();

	assert_eq!(removed.day, Weekday::Saturday);
	let days: Vec<_> = screen.snapshot().work_intervals.iter().map(|i| i.day).collect();
	assert_eq!(days, vec![Weekday::Sunday, Weekday::Sunday]);
	assert_eq!(screen.snapshot().work_intervals[1].from, "17:00");
}

#[rstest]
fn test_work_interval_errors(env: Harness) {
	let mut screen = DoctorSignUpScreen::new(env.context.clone());

	assert!(matches!(
		screen.add_work_interval(Weekday::Monday, "9am", "13:00"),
		Err(PageError::Form(_))
	));
	assert!(matches!(
		screen.remove_work_interval(0),
		Err(PageError::Form(_))
	));
}

#[rstest]
fn test_pick_days_prompt_uses_localized_weekdays(env: Harness) {
	let screen = DoctorSignUpScreen::new(env.context.clone());

	let prompt = screen.pick_days_prompt();

	assert_eq!(prompt.len(), 7);
	assert_eq!(prompt[0], (Weekday::Saturday, "السبت".to_string()));
	assert_eq!(prompt[6].0, Weekday::Friday);
}

#[rstest]
fn test_field_descriptors_follow_the_step(env: Harness) {
	let mut screen = DoctorSignUpScreen::new(env.context.clone());

	let account = screen.field_descriptors();
	let password = account.iter().find(|d| d.id == FieldId::Password).unwrap();
	assert!(password.kind.is_secure());

	let snapshot = valid_account();
	screen.set_field(FieldId::Name, snapshot.name).unwrap();
	screen.set_field(FieldId::Email, snapshot.email).unwrap();
	screen.set_field(FieldId::Phone, snapshot.phone).unwrap();
	screen.set_field(FieldId::Password, snapshot.password).unwrap();
	screen
		.set_field(FieldId::ConfirmPassword, snapshot.confirm_password)
		.unwrap();
	screen.next();

	let clinic = screen.field_descriptors();
	let specialty = clinic.iter().find(|d| d.id == FieldId::Specialty).unwrap();
	assert!(matches!(&specialty.kind, FieldKind::SingleSelect { options } if options.len() == 2));
	assert!(specialty.kind.accepts("جلدية"));
	let province = clinic.iter().find(|d| d.id == FieldId::Province).unwrap();
	assert_eq!(province.kind.options(), screen.province_options().as_slice());
}

struct OnePick(Option<SelectedImage>);

#[async_trait]
impl ImagePicker for OnePick {
	async fn pick(&self) -> PageResult<Option<SelectedImage>> {
		Ok(self.0.clone())
	}
}

#[rstest]
#[tokio::test]
async fn test_cancelled_picker_is_a_no_op(env: Harness) {
	let mut screen = DoctorSignUpScreen::new(env.context.clone());
	let photo = SelectedImage::new("file:///photo.png").with_dimensions(512, 512);

	assert!(screen.select_image(&OnePick(Some(photo.clone()))).await.unwrap());
	assert!(!screen.select_image(&OnePick(None)).await.unwrap());

	assert_eq!(screen.image(), Some(&photo));
}

#[rstest]
fn test_go_to_login(env: Harness) {
	let screen = DoctorSignUpScreen::new(env.context.clone());
	screen.go_to_login();
	assert_eq!(env.navigator.visits(), vec!["Login"]);
}

#[cfg(not(any(target_os = "android", target_os = "ios")))]
#[rstest]
fn test_host_modules_are_web_stand_ins(env: Harness) {
	let screen = DoctorSignUpScreen::new(env.context.clone());

	let map = screen.map_module().unwrap();
	let picker = screen.image_picker_module().unwrap();

	assert_eq!(map, &ModuleTarget::WebStandIn("web-maps".to_string()));
	assert_eq!(picker.module(), "web-file-input");
}

#[rstest]
fn test_unbound_modules_resolve_to_none(mut env: Harness) {
	env.context.aliases = Arc::new(ModuleAliases::empty());
	let screen = DoctorSignUpScreen::new(env.context.clone());

	assert_eq!(screen.map_module(), None);
	assert_eq!(screen.image_picker_module(), None);
}
