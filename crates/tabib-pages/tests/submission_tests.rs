//! Submission pipeline tests
//!
//! Gating by validation, single in-flight submission, the success and
//! failure notices and the optional timeout.

mod common;

use common::*;
use rstest::*;
use std::sync::Arc;
use std::time::Duration;
use tabib_auth::{SignUpError, SignUpSuccess};
use tabib_conf::AppSettings;
use tabib_forms::{Advance, FieldId, StepId};
use tabib_pages::{
	DoctorSignUpScreen, NoticeEffect, SubmissionOutcome, SubmissionPipeline, UserSignUpScreen,
};
use tokio::sync::Notify;

fn fill_account(screen: &mut DoctorSignUpScreen) {
	let account = valid_account();
	screen.set_field(FieldId::Name, account.name).unwrap();
	screen.set_field(FieldId::Email, account.email).unwrap();
	screen.set_field(FieldId::Phone, account.phone).unwrap();
	screen.set_field(FieldId::Password, account.password).unwrap();
	screen
		.set_field(FieldId::ConfirmPassword, account.confirm_password)
		.unwrap();
}

fn doctor_on_schedule_step(harness: &Harness) -> DoctorSignUpScreen {
	let mut screen = DoctorSignUpScreen::new(harness.context.clone());
	fill_account(&mut screen);
	assert_eq!(screen.next(), Advance::Moved(StepId::Clinic));
	for (field, value) in VALID_CLINIC {
		screen.set_field(field, value).unwrap();
	}
	assert_eq!(screen.next(), Advance::Moved(StepId::Schedule));
	screen
}

#[rstest]
#[case(FieldId::Email, "bad")]
#[case(FieldId::Area, "  ")]
#[tokio::test]
async fn test_no_call_when_a_prior_step_is_invalid(#[case] field: FieldId, #[case] value: &str) {
	let harness = harness(ScriptedService::replying(vec![Ok(SignUpSuccess::default())]));
	let mut screen = doctor_on_schedule_step(&harness);
	screen.set_field(field, value).unwrap();

	let outcome = screen.submit().await;

	assert!(matches!(outcome, SubmissionOutcome::Invalid(_)));
	assert!(screen.errors().contains(field));
	assert_eq!(harness.service.calls(), 0);
	assert!(screen.notice().is_none());
	assert_eq!(screen.step(), StepId::Schedule);
	assert!(!screen.is_busy());
}

#[rstest]
#[case(0)]
#[case(1)]
#[tokio::test]
async fn test_doctor_cannot_submit_before_schedule_step(#[case] advances: usize) {
	let harness = harness(ScriptedService::replying(vec![Ok(SignUpSuccess::default())]));
	let mut screen = DoctorSignUpScreen::new(harness.context.clone());
	fill_account(&mut screen);
	for (field, value) in VALID_CLINIC {
		screen.set_field(field, value).unwrap();
	}
	for _ in 0..advances {
		assert!(matches!(screen.next(), Advance::Moved(_)));
	}
	let step = screen.step();

	let outcome = screen.submit().await;

	assert_eq!(outcome, SubmissionOutcome::NotOnFinalStep(step));
	assert_ne!(step, StepId::Schedule);
	assert_eq!(harness.service.calls(), 0);
	assert!(screen.notice().is_none());
	assert!(screen.errors().is_empty());
	assert!(!screen.is_busy());

	// reaching the schedule step unlocks submission
	while screen.step() != StepId::Schedule {
		screen.next();
	}
	assert!(screen.submit().await.is_registered());
	assert_eq!(harness.service.calls(), 1);
}

#[rstest]
#[tokio::test]
async fn test_second_submission_while_in_flight_is_ignored() {
	let gate = Arc::new(Notify::new());
	let harness = harness(
		ScriptedService::replying(vec![Ok(SignUpSuccess::default())]).gated(gate.clone()),
	);
	let pipeline = harness.context.pipeline();
	let snapshot = valid_account();

	let first = pipeline.submit_user(&snapshot);
	let second = async {
		tokio::task::yield_now().await;
		assert!(pipeline.is_busy());
		let outcome = pipeline.submit_user(&snapshot).await;
		gate.notify_one();
		outcome
	};
	let (first, second) = tokio::join!(first, second);

	assert!(first.is_registered());
	assert_eq!(second, SubmissionOutcome::Busy);
	assert_eq!(harness.service.calls(), 1);
	assert!(!pipeline.is_busy());
}

#[rstest]
#[tokio::test]
async fn test_deep_link_offers_two_paths_to_doctor_home() {
	let harness = harness(ScriptedService::replying(vec![Ok(SignUpSuccess::with_link(
		"https://wa.me/9647700000000",
	))]));
	let mut screen = doctor_on_schedule_step(&harness);

	let outcome = screen.submit().await;

	let notice = outcome.notice().unwrap();
	assert_eq!(notice.actions().len(), 2);
	for action in notice.actions() {
		assert_eq!(action.destination(), Some("DoctorHome"));
	}
	assert!(matches!(
		notice.actions()[0].effects[0],
		NoticeEffect::OpenLink(ref url) if url.as_str() == "https://wa.me/9647700000000"
	));

	screen.choose_notice_action(0).unwrap();
	assert_eq!(harness.navigator.visits(), vec!["DoctorHome"]);
	assert_eq!(harness.opener.opened.lock().unwrap().len(), 1);
	assert!(screen.notice().is_none());
}

#[rstest]
#[case(0)]
#[case(1)]
#[tokio::test]
async fn test_each_deep_link_choice_lands_on_home(#[case] choice: usize) {
	let harness = harness(ScriptedService::replying(vec![Ok(SignUpSuccess::with_link(
		"https://wa.me/1",
	))]));
	let mut screen = doctor_on_schedule_step(&harness);
	screen.submit().await;

	screen.choose_notice_action(choice).unwrap();

	assert_eq!(harness.navigator.visits(), vec!["DoctorHome"]);
}

#[rstest]
#[tokio::test]
async fn test_without_deep_link_single_dismissal_to_user_home() {
	let harness = harness(ScriptedService::replying(vec![Ok(SignUpSuccess::default())]));
	let mut screen = UserSignUpScreen::new(harness.context.clone());
	for (field, value) in [
		(FieldId::Name, "Ali"),
		(FieldId::Email, "a@b.com"),
		(FieldId::Phone, "0770"),
		(FieldId::Password, "abcdef"),
		(FieldId::ConfirmPassword, "abcdef"),
	] {
		screen.set_field(field, value).unwrap();
	}

	let outcome = screen.submit().await;

	let notice = outcome.notice().unwrap();
	assert_eq!(notice.actions().len(), 1);
	screen.choose_notice_action(0).unwrap();
	assert_eq!(harness.navigator.visits(), vec!["UserHome"]);
	assert!(harness.opener.opened.lock().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_rejection_message_is_shown_and_screen_stays() {
	let harness = harness(ScriptedService::replying(vec![
		Err(SignUpError::rejected("duplicate email")),
		Ok(SignUpSuccess::default()),
	]));
	let mut screen = doctor_on_schedule_step(&harness);

	let outcome = screen.submit().await;

	let SubmissionOutcome::Failed(notice) = outcome else {
		panic!("expected Failed, got {outcome:?}");
	};
	assert_eq!(notice.message, "duplicate email");
	assert!(!screen.is_busy());
	assert_eq!(screen.step(), StepId::Schedule);

	screen.choose_notice_action(0).unwrap();
	assert!(harness.navigator.visits().is_empty());

	// retry is allowed
	assert!(screen.submit().await.is_registered());
	assert_eq!(harness.service.calls(), 2);
}

#[rstest]
#[tokio::test]
async fn test_rejection_without_message_uses_localized_fallback() {
	let harness = harness(ScriptedService::replying(vec![Err(SignUpError::Rejected {
		message: Some(String::new()),
	})]));
	let pipeline = harness.context.pipeline();

	let outcome = pipeline.submit_user(&valid_account()).await;

	assert_eq!(outcome.notice().unwrap().message, "فشل التسجيل");
}

#[rstest]
#[tokio::test]
async fn test_specialty_is_sent_in_canonical_form() {
	let harness = harness(ScriptedService::replying(vec![Ok(SignUpSuccess::default())]));
	let mut screen = doctor_on_schedule_step(&harness);

	screen.submit().await;

	let request = harness.service.last_request().unwrap();
	assert_eq!(request.field(FieldId::Specialty).unwrap(), "cardiology");
	assert!(request.field(FieldId::ConfirmPassword).is_none());
	assert_eq!(request.to_json().unwrap()["user_type"], "doctor");
	assert_eq!(screen.snapshot().specialty, "قلبية");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_timeout_surfaces_failure_and_releases_busy_flag() {
	let gate = Arc::new(Notify::new());
	let mut settings = AppSettings::default();
	settings.submission.timeout_secs = Some(5);
	let harness = harness_with_settings(
		ScriptedService::replying(vec![Ok(SignUpSuccess::default())]).gated(gate),
		settings,
	);
	let pipeline: SubmissionPipeline = harness.context.pipeline();

	let outcome = pipeline.submit_user(&valid_account()).await;

	let SubmissionOutcome::Failed(notice) = outcome else {
		panic!("expected Failed, got {outcome:?}");
	};
	assert_eq!(notice.message, "request_timeout");
	assert!(!pipeline.is_busy());
	assert_eq!(harness.service.calls(), 1);
}
