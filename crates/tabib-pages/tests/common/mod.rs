//! Shared doubles for the screen and pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tabib_auth::{SignUpError, SignUpRequest, SignUpResult, SignUpService, SignUpSuccess};
use tabib_conf::AppSettings;
use tabib_forms::{FieldId, ShortSnapshot};
use tabib_i18n::{Catalogs, MessageCatalog, SpecialtyMap};
use tabib_pages::{LinkOpener, ModuleAliases, Navigator, PageResult, ScreenContext};
use tokio::sync::Notify;
use url::Url;

pub const AR_CATALOG: &str = r#"{
	"name_required": "الاسم مطلوب",
	"email_invalid": "البريد الإلكتروني غير صالح",
	"signup_failed": "فشل التسجيل",
	"provinces": ["بغداد", "البصرة"],
	"weekdays": ["السبت", "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة"],
	"appointment_durations": ["15", "30"],
	"specialties": {
		"cardiology": ["قلبية"],
		"dermatology": ["جلدية"]
	}
}"#;

#[derive(Default)]
pub struct RecordingNavigator {
	pub visits: Mutex<Vec<String>>,
	pub backs: AtomicUsize,
}

impl RecordingNavigator {
	pub fn visits(&self) -> Vec<String> {
		self.visits.lock().unwrap().clone()
	}
}

impl Navigator for RecordingNavigator {
	fn navigate(&self, destination: &str) {
		self.visits.lock().unwrap().push(destination.to_string());
	}

	fn go_back(&self) {
		self.backs.fetch_add(1, Ordering::SeqCst);
	}
}

#[derive(Default)]
pub struct RecordingOpener {
	pub opened: Mutex<Vec<Url>>,
}

impl LinkOpener for RecordingOpener {
	fn open(&self, url: &Url) -> PageResult<()> {
		self.opened.lock().unwrap().push(url.clone());
		Ok(())
	}
}

/// Service answering from a script, optionally holding each call until
/// released.
#[derive(Default)]
pub struct ScriptedService {
	replies: Mutex<VecDeque<SignUpResult<SignUpSuccess>>>,
	requests: Mutex<Vec<SignUpRequest>>,
	gate: Option<Arc<Notify>>,
}

impl ScriptedService {
	pub fn replying(replies: Vec<SignUpResult<SignUpSuccess>>) -> Self {
		Self {
			replies: Mutex::new(replies.into()),
			..Self::default()
		}
	}

	pub fn gated(mut self, gate: Arc<Notify>) -> Self {
		self.gate = Some(gate);
		self
	}

	pub fn calls(&self) -> usize {
		self.requests.lock().unwrap().len()
	}

	pub fn last_request(&self) -> Option<SignUpRequest> {
		self.requests.lock().unwrap().last().cloned()
	}
}

#[async_trait]
impl SignUpService for ScriptedService {
	async fn sign_up(&self, request: SignUpRequest) -> SignUpResult<SignUpSuccess> {
		self.requests.lock().unwrap().push(request);
		if let Some(gate) = &self.gate {
			gate.notified().await;
		}
		self.replies
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| Err(SignUpError::rejected("no scripted reply")))
	}
}

pub struct Harness {
	pub context: ScreenContext,
	pub navigator: Arc<RecordingNavigator>,
	pub opener: Arc<RecordingOpener>,
	pub service: Arc<ScriptedService>,
}

pub fn harness(service: ScriptedService) -> Harness {
	harness_with_settings(service, AppSettings::default())
}

pub fn harness_with_settings(service: ScriptedService, settings: AppSettings) -> Harness {
	let mut catalogs = Catalogs::new("ar");
	catalogs.register(MessageCatalog::from_json_str("ar", AR_CATALOG).unwrap());
	let specialties = SpecialtyMap::from_translator(&catalogs).unwrap();

	let navigator = Arc::new(RecordingNavigator::default());
	let opener = Arc::new(RecordingOpener::default());
	let service = Arc::new(service);
	let context = ScreenContext {
		translator: Arc::new(catalogs),
		navigator: navigator.clone(),
		link_opener: opener.clone(),
		service: service.clone(),
		specialties: Arc::new(specialties),
		settings: Arc::new(settings),
		aliases: Arc::new(ModuleAliases::default()),
	};
	Harness {
		context,
		navigator,
		opener,
		service,
	}
}

pub fn valid_account() -> ShortSnapshot {
	ShortSnapshot {
		name: "Ali".into(),
		email: "a@b.com".into(),
		phone: "0770".into(),
		password: "abcdef".into(),
		confirm_password: "abcdef".into(),
	}
}

pub const VALID_CLINIC: [(FieldId, &str); 4] = [
	(FieldId::Specialty, "قلبية"),
	(FieldId::Province, "بغداد"),
	(FieldId::Area, "الكرادة"),
	(FieldId::ClinicLocation, "شارع 62"),
];
