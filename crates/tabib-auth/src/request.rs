//! Request and response shapes of the sign-up call.

use crate::error::SignUpResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabib_forms::{ExtendedSnapshot, FieldId, SelectedImage, ShortSnapshot};

/// Account kind discriminator sent as `user_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
	Doctor,
	User,
}

impl AccountKind {
	pub fn as_str(self) -> &'static str {
		match self {
			AccountKind::Doctor => "doctor",
			AccountKind::User => "user",
		}
	}
}

/// Payload of one sign-up call.
///
/// `fields` holds the snapshot in its wire form. The confirmation password
/// is client-side only and never transmitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpRequest {
	pub user_type: AccountKind,
	#[serde(flatten)]
	pub fields: Map<String, Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<SelectedImage>,
}

impl SignUpRequest {
	/// Build a doctor request. The snapshot is expected to be transformed
	/// already (specialty in canonical form).
	///
	/// # Examples
	///
	/// ```
	/// use tabib_auth::{AccountKind, SignUpRequest};
	/// use tabib_forms::{ExtendedSnapshot, SelectedImage};
	///
	/// let mut snapshot = ExtendedSnapshot::default();
	/// snapshot.account.name = "Dr. Sara".into();
	/// snapshot.specialty = "cardiology".into();
	///
	/// let image = SelectedImage::new("file:///tmp/me.jpg");
	/// let request = SignUpRequest::doctor(&snapshot, Some(&image)).unwrap();
	///
	/// assert_eq!(request.user_type, AccountKind::Doctor);
	/// assert_eq!(request.fields["specialty"], "cardiology");
	/// assert!(!request.fields.contains_key("confirmPassword"));
	/// assert_eq!(request.image.unwrap().uri, "file:///tmp/me.jpg");
	/// ```
	pub fn doctor(
		snapshot: &ExtendedSnapshot,
		image: Option<&SelectedImage>,
	) -> SignUpResult<Self> {
		Ok(Self {
			user_type: AccountKind::Doctor,
			fields: wire_fields(snapshot)?,
			image: image.cloned(),
		})
	}

	/// Build a patient request from the short form.
	pub fn user(snapshot: &ShortSnapshot) -> SignUpResult<Self> {
		Ok(Self {
			user_type: AccountKind::User,
			fields: wire_fields(snapshot)?,
			image: None,
		})
	}

	pub fn field(&self, field: FieldId) -> Option<&Value> {
		self.fields.get(field.as_str())
	}

	/// Encode the whole request as a JSON object.
	pub fn to_json(&self) -> SignUpResult<Value> {
		Ok(serde_json::to_value(self)?)
	}
}

fn wire_fields<T: Serialize>(snapshot: &T) -> SignUpResult<Map<String, Value>> {
	let mut fields = match serde_json::to_value(snapshot)? {
		Value::Object(map) => map,
		_ => Map::new(),
	};
	fields.remove(FieldId::ConfirmPassword.as_str());
	Ok(fields)
}

/// Successful sign-up result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpSuccess {
	/// Messaging-app link for follow-up document submission
	#[serde(
		rename = "whatsappLink",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub whatsapp_link: Option<String>,
}

impl SignUpSuccess {
	pub fn with_link(link: impl Into<String>) -> Self {
		Self {
			whatsapp_link: Some(link.into()),
		}
	}

	/// The deep link, if present and non-blank.
	pub fn deep_link(&self) -> Option<&str> {
		self.whatsapp_link
			.as_deref()
			.map(str::trim)
			.filter(|link| !link.is_empty())
	}
}
