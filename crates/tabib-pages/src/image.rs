use crate::error::PageResult;
use async_trait::async_trait;
use tabib_forms::{FormStore, FormValues, SelectedImage};

/// Device image picker.
///
/// A user cancelling the picker is `Ok(None)`, not an error.
#[async_trait]
pub trait ImagePicker: Send + Sync {
	async fn pick(&self) -> PageResult<Option<SelectedImage>>;
}

/// Run the picker and store its result. Returns whether the store's image
/// changed; cancellation leaves the current image in place.
pub async fn select_image<S: FormValues>(
	picker: &dyn ImagePicker,
	store: &mut FormStore<S>,
) -> PageResult<bool> {
	match picker.pick().await? {
		Some(image) => {
			tracing::debug!(uri = %image.uri, "profile image selected");
			Ok(store.set_image(Some(image)))
		}
		None => {
			tracing::debug!("image picker cancelled");
			Ok(false)
		}
	}
}
