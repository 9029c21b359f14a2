//! Landing screen and web content viewer tests

mod common;

use common::*;
use rstest::*;
use tabib_pages::{CallToAction, LandingScreen, Platform, ScrollContainer, WebContentView};

#[fixture]
fn env() -> Harness {
	harness(ScriptedService::default())
}

#[rstest]
fn test_sections_fall_back_to_keys(env: Harness) {
	let screen = LandingScreen::new(env.context.clone());

	let sections = screen.sections();

	assert_eq!(sections.len(), 3);
	assert_eq!(sections[0].title, "landing_hero_title");
}

#[rstest]
#[case(Platform::Web, true)]
#[case(Platform::Android, false)]
fn test_content_scrolls_per_platform(env: Harness, #[case] platform: Platform, #[case] web: bool) {
	let screen = LandingScreen::new(env.context.clone());

	let content = screen.content_for(platform);

	assert_eq!(matches!(content, ScrollContainer::Web { .. }), web);
	assert_eq!(content.content().count(), 3);
	assert!(content.has_spacer());
}

#[cfg(not(target_arch = "wasm32"))]
#[rstest]
fn test_content_uses_native_container_on_host(env: Harness) {
	let screen = LandingScreen::new(env.context.clone());

	let content = screen.content();

	assert!(matches!(content, ScrollContainer::Native { .. }));
	assert!(content.style().is_none());
	assert!(!content.props().shows_vertical_indicator);
	assert_eq!(content.content().count(), 3);
}

#[rstest]
#[case(CallToAction::JoinAsDoctor, "DoctorSignUp")]
#[case(CallToAction::JoinAsPatient, "UserSignUp")]
#[case(CallToAction::Login, "Login")]
fn test_calls_to_action(env: Harness, #[case] action: CallToAction, #[case] destination: &str) {
	let screen = LandingScreen::new(env.context.clone());

	screen.call_to_action(action);

	assert_eq!(env.navigator.visits(), vec![destination]);
}

#[rstest]
fn test_web_content_view_keeps_title() {
	let view = WebContentView::new("https://tabib.example/terms")
		.unwrap()
		.with_title("Terms");
	assert_eq!(view.title(), Some("Terms"));
}
