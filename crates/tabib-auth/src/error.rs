//! Error types for the sign-up call.

use thiserror::Error;

/// Ways a sign-up attempt can fail.
#[derive(Debug, Error)]
pub enum SignUpError {
	/// The backend refused the registration.
	#[error("sign-up rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
	Rejected { message: Option<String> },

	/// The request could not be encoded.
	#[error("failed to encode sign-up request: {0}")]
	Encoding(#[from] serde_json::Error),
}

impl SignUpError {
	pub fn rejected(message: impl Into<String>) -> Self {
		SignUpError::Rejected {
			message: Some(message.into()),
		}
	}

	/// Message suitable for showing to the user, if the backend sent one.
	///
	/// Blank messages count as absent.
	pub fn user_message(&self) -> Option<&str> {
		match self {
			SignUpError::Rejected { message } => {
				message.as_deref().filter(|m| !m.trim().is_empty())
			}
			SignUpError::Encoding(_) => None,
		}
	}
}

/// Result type alias for sign-up calls.
pub type SignUpResult<T> = Result<T, SignUpError>;
