use crate::error::SignUpResult;
use crate::request::{SignUpRequest, SignUpSuccess};
use async_trait::async_trait;

/// The authentication backend's sign-up call.
///
/// A single call is the only suspension point of the sign-up flow. No
/// timeout is implied: callers that want one must add it.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use tabib_auth::{SignUpError, SignUpRequest, SignUpResult, SignUpService, SignUpSuccess};
///
/// struct ClosedRegistrations;
///
/// #[async_trait]
/// impl SignUpService for ClosedRegistrations {
///     async fn sign_up(&self, _request: SignUpRequest) -> SignUpResult<SignUpSuccess> {
///         Err(SignUpError::rejected("registrations are closed"))
///     }
/// }
/// ```
#[async_trait]
pub trait SignUpService: Send + Sync {
	async fn sign_up(&self, request: SignUpRequest) -> SignUpResult<SignUpSuccess>;
}
